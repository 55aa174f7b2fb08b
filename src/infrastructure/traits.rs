//! I/O boundary traits for testability
//!
//! These traits abstract console input and randomness, allowing services
//! to be tested with scripted implementations.

use std::io::{self, BufRead};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Line-oriented input source.
pub trait LineReader {
    /// Read one line, without the trailing line break.
    /// Returns `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw a value in `0..=upper`.
    fn next_in_range(&mut self, upper: u16) -> u16;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// `LineReader` over any buffered reader.
#[derive(Debug)]
pub struct BufLineReader<R> {
    inner: R,
}

impl<R: BufRead> BufLineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: BufRead> LineReader for BufLineReader<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.inner.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Reads lines from the process's standard input.
#[derive(Debug, Default)]
pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        BufLineReader::new(io::stdin().lock()).read_line()
    }
}

/// `RandomSource` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source: equal seeds yield equal sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, upper: u16) -> u16 {
        self.rng.gen_range(0..=upper)
    }
}
