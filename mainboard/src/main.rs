//! # mainboard - Main Entry Point
//!
//! Parses the launch arguments, publishes the process and schedule names, and
//! exits immediately with status 0 when help is requested.

use log::info;
use mainboard::cli::{collect_args, ModuleArgument, ParseOutcome};
use mainboard_common::GlobalData;

const EXIT_SUCCESS: i32 = 0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv = collect_args(std::env::args_os());
    let args = match ModuleArgument::default().parse_argument(&argv, GlobalData::instance()) {
        ParseOutcome::Parsed(args) => args,
        ParseOutcome::HelpRequested { .. } => std::process::exit(EXIT_SUCCESS),
    };

    info!(
        "{} ready: {} dag conf(s) for process {} under sched {}",
        args.binary_name,
        args.dag_conf_list.len(),
        GlobalData::instance().process_name(),
        GlobalData::instance().sched_name()
    );
}
