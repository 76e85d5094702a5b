//! # Mainboard - Module Process Launcher Arguments
//!
//! Resolves the command line of a module-loading process before its scheduler
//! starts: which dag config files to load, which process namespace the modules
//! run in, and which scheduling policy applies.
//!
//! ## Program Flow
//!
//! ```text
//! argv ──▶ ModuleArgument::parse_argument ──┬──▶ ParseOutcome::Parsed
//!                                           │      ├─ names published to ProcessConfig
//!                                           │      └─ dag_conf_list handed to the loader
//!                                           └──▶ ParseOutcome::HelpRequested
//!                                                  └─ usage logged, caller exits 0
//! ```
//!
//! ## Module Structure
//!
//! - [`cli`]: Option scanning and usage text
//! - [`config`]: Default process and schedule names
//!
//! The process-wide store the names land in lives in the `mainboard-common` crate,
//! so the parser can be exercised against an in-memory sink.
//!
//! ## Typical Usage
//!
//! ```bash
//! mainboard -d dag/perception.dag dag/planning.dag -p compute -s classic
//! ```

pub mod cli;
pub mod config;
