//! # Shared Process State (Mainboard ↔ Runtime)
//!
//! Holds the values the argument parser resolves at startup and the rest of the
//! runtime reads afterwards. The parser writes exactly once, before any other
//! subsystem starts; readers may come online on any thread after that.
//!
//! ## Key Types
//!
//! - [`ProcessConfig`] - Sink the parser publishes into
//! - [`GlobalData`] - Process-wide store backing the sink in production
//! - [`DEFAULT_PROCESS_NAME`], [`DEFAULT_SCHED_NAME`] - Values used when none are given

use std::sync::{OnceLock, PoisonError, RwLock};

// ============================================================================
// Defaults
// ============================================================================

/// Process namespace used when `-p/--process_name` is absent
///
/// Components launched without an explicit namespace share the manager process.
pub const DEFAULT_PROCESS_NAME: &str = "mainboard_default";

/// Scheduling policy used when `-s/--sched_name` is absent
///
/// Must name a policy present in the scheduler configuration.
pub const DEFAULT_SCHED_NAME: &str = "CYBER_DEFAULT";

// ============================================================================
// Sink
// ============================================================================

/// Destination for the resolved process and schedule names.
pub trait ProcessConfig {
    fn set_process_name(&self, name: &str);
    fn set_sched_name(&self, name: &str);
}

// ============================================================================
// Process-wide store
// ============================================================================

/// Process-wide configuration store.
///
/// Obtain the singleton with [`GlobalData::instance`]. Separate instances can be
/// created with [`GlobalData::new`] where isolation is needed.
#[derive(Debug)]
pub struct GlobalData {
    process_name: RwLock<String>,
    sched_name: RwLock<String>,
}

impl GlobalData {
    #[must_use]
    pub fn new() -> Self {
        Self {
            process_name: RwLock::new(DEFAULT_PROCESS_NAME.to_string()),
            sched_name: RwLock::new(DEFAULT_SCHED_NAME.to_string()),
        }
    }

    /// The store shared by the whole process
    pub fn instance() -> &'static GlobalData {
        static INSTANCE: OnceLock<GlobalData> = OnceLock::new();
        INSTANCE.get_or_init(GlobalData::new)
    }

    #[must_use]
    pub fn process_name(&self) -> String {
        self.process_name.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn sched_name(&self) -> String {
        self.sched_name.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for GlobalData {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessConfig for GlobalData {
    fn set_process_name(&self, name: &str) {
        log::debug!("GlobalData: process_name = {name}");
        *self.process_name.write().unwrap_or_else(PoisonError::into_inner) = name.to_string();
    }

    fn set_sched_name(&self, name: &str) {
        log::debug!("GlobalData: sched_name = {name}");
        *self.sched_name.write().unwrap_or_else(PoisonError::into_inner) = name.to_string();
    }
}
