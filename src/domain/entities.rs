//! Domain entities: core data structures

use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::domain::sorting::{sort_ascending, sort_descending, SortStrategy};
use crate::domain::DomainError;

/// Smallest value that can be generated.
pub const MIN_VALUE: u16 = 0;

/// Largest value that can be generated (inclusive).
pub const MAX_VALUE: u16 = 999;

/// Number of values requested by the user. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(NonZeroUsize);

impl Count {
    /// Validate a requested count; zero is invalid input.
    pub fn new(value: usize) -> Result<Self, DomainError> {
        NonZeroUsize::new(value)
            .map(Count)
            .ok_or_else(|| DomainError::InvalidInput {
                input: value.to_string(),
            })
    }

    /// Parse one line of user input.
    ///
    /// Surrounding whitespace is ignored. Anything that is not a whole
    /// number of at least one is `InvalidInput`, including negative numbers.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        trimmed
            .parse::<usize>()
            .map_err(|_| DomainError::InvalidInput {
                input: trimmed.to_string(),
            })
            .and_then(Self::new)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for Count {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Generated numbers in generation order, each within `MIN_VALUE..=MAX_VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberSequence {
    values: Vec<u16>,
}

impl NumberSequence {
    /// Reserve storage for `count` values without aborting on failure.
    ///
    /// `limit` caps the request before any memory is touched.
    pub fn allocate(count: Count, limit: Option<usize>) -> Result<Vec<u16>, DomainError> {
        let requested = count.get();
        if limit.is_some_and(|max| requested > max) {
            return Err(DomainError::AllocationFailure { requested });
        }
        let mut values = Vec::new();
        values
            .try_reserve_exact(requested)
            .map_err(|_| DomainError::AllocationFailure { requested })?;
        Ok(values)
    }

    /// Build a sequence, rejecting any value above `MAX_VALUE`.
    pub fn from_values(values: Vec<u16>) -> Result<Self, DomainError> {
        if let Some(&bad) = values.iter().find(|&&v| !(MIN_VALUE..=MAX_VALUE).contains(&v)) {
            return Err(DomainError::ValueOutOfRange(bad));
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into even and odd subsets, keeping generation order.
    pub fn partition(&self) -> ParityPartition {
        ParityPartition::split(&self.values)
    }
}

/// Even and odd subsets of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityPartition {
    evens: Vec<u16>,
    odds: Vec<u16>,
}

impl ParityPartition {
    /// Parity partition of `values`; both halves preserve relative order.
    pub fn split(values: &[u16]) -> Self {
        let even_count = values.iter().filter(|&&v| v % 2 == 0).count();
        let mut evens = Vec::with_capacity(even_count);
        let mut odds = Vec::with_capacity(values.len() - even_count);
        for &value in values {
            if value % 2 == 0 {
                evens.push(value);
            } else {
                odds.push(value);
            }
        }
        Self { evens, odds }
    }

    /// Evens ascending, odds descending.
    pub fn sort(&mut self, strategy: SortStrategy) {
        sort_ascending(&mut self.evens, strategy);
        sort_descending(&mut self.odds, strategy);
    }

    /// Consume and return the partition sorted with `strategy`.
    pub fn sorted(mut self, strategy: SortStrategy) -> Self {
        self.sort(strategy);
        self
    }

    pub fn evens(&self) -> &[u16] {
        &self.evens
    }

    pub fn odds(&self) -> &[u16] {
        &self.odds
    }

    pub fn even_count(&self) -> usize {
        self.evens.len()
    }

    pub fn odd_count(&self) -> usize {
        self.odds.len()
    }

    pub fn total(&self) -> usize {
        self.evens.len() + self.odds.len()
    }
}
