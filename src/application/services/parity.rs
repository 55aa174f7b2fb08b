//! Parity report service
//!
//! Prompts for a count, generates the numbers and writes the sorted report.

use std::io::Write;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::application::report::{ParityReport, PROMPT_MESSAGE};
use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Count, DomainError, NumberSequence, MAX_VALUE};
use crate::infrastructure::traits::{LineReader, RandomSource};

/// Service running the prompt / generate / partition / sort / print procedure.
pub struct ParityService {
    settings: Arc<Settings>,
    reader: Box<dyn LineReader>,
    random: Box<dyn RandomSource>,
}

impl ParityService {
    /// Create a new parity service.
    pub fn new(
        settings: Arc<Settings>,
        reader: Box<dyn LineReader>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            settings,
            reader,
            random,
        }
    }

    /// Prompt on `out`, read the count, then generate and print the report.
    ///
    /// Rejections (`InvalidInput`, `AllocationFailure`) are returned as
    /// errors after the prompt; nothing else has been written at that point.
    #[instrument(skip_all)]
    pub fn run(&mut self, out: &mut dyn Write) -> ApplicationResult<ParityReport> {
        let count = self.prompt_count(out)?;
        self.run_with_count(count, out)
    }

    /// Generate and print the report for a count known up front.
    #[instrument(skip_all, fields(count = count.get()))]
    pub fn run_with_count(
        &mut self,
        count: Count,
        out: &mut dyn Write,
    ) -> ApplicationResult<ParityReport> {
        let numbers = self.generate(count)?;
        let report = ParityReport::new(numbers, self.settings.sort);
        debug!(
            total = report.total(),
            evens = report.even_count(),
            odds = report.odd_count(),
            strategy = %self.settings.sort,
            "report ready"
        );
        report.write_to(out).with_context("write report")?;
        Ok(report)
    }

    /// Print the prompt and parse the answer.
    pub fn prompt_count(&mut self, out: &mut dyn Write) -> ApplicationResult<Count> {
        write!(out, "{}", PROMPT_MESSAGE).with_context("write prompt")?;
        out.flush().with_context("flush prompt")?;

        let line = self.reader.read_line().with_context("read count")?;
        trace!(?line, "prompt answered");
        let line = line.ok_or_else(|| DomainError::InvalidInput {
            input: String::new(),
        })?;
        Ok(Count::parse(&line)?)
    }

    /// Draw `count` values in `0..=MAX_VALUE`.
    pub fn generate(&mut self, count: Count) -> ApplicationResult<NumberSequence> {
        let mut values = NumberSequence::allocate(count, self.settings.max_count)?;
        for _ in 0..count.get() {
            values.push(self.random.next_in_range(MAX_VALUE));
        }
        debug!(count = values.len(), "generated numbers");
        Ok(NumberSequence::from_values(values)?)
    }
}
