//! In-place sorting of parity subsets

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Algorithm used to order the even and odd subsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Quadratic bubble sort with early exit
    #[default]
    Bubble,
    /// `slice::sort_unstable`
    Builtin,
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortStrategy::Bubble => write!(f, "bubble"),
            SortStrategy::Builtin => write!(f, "builtin"),
        }
    }
}

impl FromStr for SortStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortStrategy::Bubble),
            "builtin" => Ok(SortStrategy::Builtin),
            other => Err(DomainError::UnknownSortStrategy(other.to_string())),
        }
    }
}

/// Sort values into non-decreasing order.
pub fn sort_ascending(values: &mut [u16], strategy: SortStrategy) {
    match strategy {
        SortStrategy::Bubble => bubble_sort_by(values, |a, b| a > b),
        SortStrategy::Builtin => values.sort_unstable(),
    }
}

/// Sort values into non-increasing order.
pub fn sort_descending(values: &mut [u16], strategy: SortStrategy) {
    match strategy {
        SortStrategy::Bubble => bubble_sort_by(values, |a, b| a < b),
        SortStrategy::Builtin => values.sort_unstable_by(|a, b| b.cmp(a)),
    }
}

/// Bubble sort swapping adjacent pairs while `out_of_order(left, right)` holds.
///
/// Each pass moves the largest out-of-order element to the end of the
/// unsorted prefix; a pass without swaps ends the sort early.
pub fn bubble_sort_by<T, F>(values: &mut [T], mut out_of_order: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = values.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if out_of_order(&values[j], &values[j + 1]) {
                values.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
