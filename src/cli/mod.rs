/// CLI layer: argument parsing.
pub mod args;

pub use args::{Cli, Command, ValidateCli};
