//! Command-line argument parsing and usage text

pub mod args;
pub mod usage;

pub use args::{collect_args, ModuleArgument, ParseOutcome, ParsedArguments};
pub use usage::usage_text;
