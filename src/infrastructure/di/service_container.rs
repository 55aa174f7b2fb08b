//! Service container for dependency injection
//!
//! Wires up the parity service with its input and randomness capabilities.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::ParityService;
use crate::config::Settings;
use crate::infrastructure::traits::{LineReader, RandomSource, RngSource, StdinReader};

/// Container holding the application settings and I/O capabilities.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Console input
    pub reader: Box<dyn LineReader>,

    /// Random number source
    pub random: Box<dyn RandomSource>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// A configured seed selects a deterministic generator.
    pub fn new(settings: Settings) -> Self {
        let random: Box<dyn RandomSource> = match settings.seed {
            Some(seed) => {
                debug!(seed, "using seeded random source");
                Box::new(RngSource::seeded(seed))
            }
            None => Box::new(RngSource::from_entropy()),
        };
        Self::with_deps(settings, Box::new(StdinReader), random)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        reader: Box<dyn LineReader>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            reader,
            random,
        }
    }

    /// Hand the capabilities over to a parity service.
    pub fn into_parity_service(self) -> ParityService {
        ParityService::new(self.settings, self.reader, self.random)
    }
}
