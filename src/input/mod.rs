//! Parameter input for the binary.
//!
//! - [`args`] - clap command line definition
//! - [`prompt`] - interactive prompts for omitted parameters

mod args;
mod prompt;

pub use args::CommandLine;
pub use prompt::{read_address, read_hosts};
