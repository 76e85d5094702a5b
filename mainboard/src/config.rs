//! Default names applied after option scanning
//!
//! Production always uses [`DEFAULT_PROCESS_NAME`] and [`DEFAULT_SCHED_NAME`].
//! Other values can be supplied through [`ParserDefaults::new`] when embedding the
//! parser, but a default is never empty: an empty value falls back to the constant.

use mainboard_common::{DEFAULT_PROCESS_NAME, DEFAULT_SCHED_NAME};

/// Names used when the command line leaves a field empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserDefaults {
    process_name: String,
    sched_name: String,
}

impl Default for ParserDefaults {
    fn default() -> Self {
        Self {
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            sched_name: DEFAULT_SCHED_NAME.to_string(),
        }
    }
}

impl ParserDefaults {
    pub fn new(process_name: impl Into<String>, sched_name: impl Into<String>) -> Self {
        Self {
            process_name: non_empty_or(process_name.into(), DEFAULT_PROCESS_NAME),
            sched_name: non_empty_or(sched_name.into(), DEFAULT_SCHED_NAME),
        }
    }

    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    #[must_use]
    pub fn sched_name(&self) -> &str {
        &self.sched_name
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
