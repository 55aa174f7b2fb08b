//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod report;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use report::{
    format_values, ParityReport, ARRANGED_HEADER, NO_EVEN_MESSAGE, NO_ODD_MESSAGE, PROMPT_MESSAGE,
    UNSORTED_HEADER,
};
