//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (LineReader, RandomSource)
//! but are themselves concrete structs, not traits.

mod parity;

pub use parity::ParityService;
