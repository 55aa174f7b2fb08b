//! Console report for a generated sequence and its sorted parity partition

use std::io::{self, Write};

use itertools::Itertools;

use crate::domain::{NumberSequence, ParityPartition, SortStrategy};

pub const PROMPT_MESSAGE: &str = "How many random numbers in the range 0 - 999 are desired? ";
pub const UNSORTED_HEADER: &str = "Here are the random numbers:";
pub const ARRANGED_HEADER: &str = "Here are the random numbers arranged:";
pub const NO_EVEN_MESSAGE: &str = "No Even Numbers";
pub const NO_ODD_MESSAGE: &str = "No Odd Numbers";

/// Space-separated rendering of `values`.
pub fn format_values(values: &[u16]) -> String {
    values.iter().join(" ")
}

/// Generated numbers together with their sorted partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    numbers: NumberSequence,
    partition: ParityPartition,
}

impl ParityReport {
    /// Partition `numbers` and sort both halves.
    pub fn new(numbers: NumberSequence, strategy: SortStrategy) -> Self {
        let partition = numbers.partition().sorted(strategy);
        Self { numbers, partition }
    }

    pub fn numbers(&self) -> &NumberSequence {
        &self.numbers
    }

    pub fn partition(&self) -> &ParityPartition {
        &self.partition
    }

    pub fn total(&self) -> usize {
        self.numbers.len()
    }

    pub fn even_count(&self) -> usize {
        self.partition.even_count()
    }

    pub fn odd_count(&self) -> usize {
        self.partition.odd_count()
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Of the above {} numbers, {} were even and {} odd",
            self.total(),
            self.even_count(),
            self.odd_count()
        )
    }

    /// Write everything that follows the prompt.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", UNSORTED_HEADER)?;
        writeln!(out, "{}", format_values(self.numbers.values()))?;
        writeln!(out, "{}", ARRANGED_HEADER)?;

        let evens = self.partition.evens();
        if evens.is_empty() {
            write!(out, "{}", NO_EVEN_MESSAGE)?;
        } else {
            write!(out, "{}", format_values(evens))?;
        }
        write!(out, " - ")?;
        let odds = self.partition.odds();
        if odds.is_empty() {
            write!(out, "{}", NO_ODD_MESSAGE)?;
        } else {
            write!(out, "{}", format_values(odds))?;
        }

        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{}", self.summary_line())?;
        out.flush()
    }

    /// The report as a string, exactly as `write_to` emits it.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
