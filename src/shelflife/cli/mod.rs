//! # CLI Layer
//!
//! One possible client of the library. This is the only code that:
//! - parses arguments (`setup.rs`)
//! - reads the clock, the environment and the platform data directory
//!   (`commands.rs`)
//! - installs the tracing subscriber (`logging.rs`)
//! - writes to stdout/stderr (`render.rs`)

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
