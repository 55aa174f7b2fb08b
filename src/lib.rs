//! evenodd: random numbers split by parity
//!
//! Reads a count, generates that many random integers in `0..=999`, prints
//! them, then prints the even ones ascending and the odd ones descending
//! followed by a summary line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
