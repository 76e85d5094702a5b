//! Module launch arguments
//!
//! Recognised options:
//!
//! | Short | Long | Value |
//! |---|---|---|
//! | `-h` | `--help` | optional, ignored |
//! | `-d` | `--dag_conf` | one or more paths, greedy until the next `-` token |
//! | `-p` | `--process_name` | one value, last wins |
//! | `-s` | `--sched_name` | one value, last wins |
//!
//! Anything else is ignored. Parsing never fails; the only early exit is a help
//! request, returned as [`ParseOutcome::HelpRequested`] for the caller to act on.

use std::ffi::OsString;

use log::{debug, info, warn};
use mainboard_common::ProcessConfig;

use super::usage::usage_text;
use crate::config::ParserDefaults;

/// Resolved launch configuration for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Basename of `argv[0]`
    pub binary_name: String,
    /// Dag config files in command-line order
    pub dag_conf_list: Vec<String>,
    pub process_name: String,
    pub sched_name: String,
}

/// What the caller should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Continue startup with these arguments. Already published to the sink.
    Parsed(ParsedArguments),
    /// `-h/--help` was given. Usage has been logged; the process should exit with 0.
    HelpRequested { usage: String },
}

impl ParseOutcome {
    #[must_use]
    pub fn should_display_help(&self) -> bool {
        matches!(self, ParseOutcome::HelpRequested { .. })
    }

    #[must_use]
    pub fn parsed(&self) -> Option<&ParsedArguments> {
        match self {
            ParseOutcome::Parsed(args) => Some(args),
            ParseOutcome::HelpRequested { .. } => None,
        }
    }

    #[must_use]
    pub fn into_parsed(self) -> Option<ParsedArguments> {
        match self {
            ParseOutcome::Parsed(args) => Some(args),
            ParseOutcome::HelpRequested { .. } => None,
        }
    }
}

/// Argument parser for a module-loading process.
#[derive(Debug, Clone, Default)]
pub struct ModuleArgument {
    defaults: ParserDefaults,
}

impl ModuleArgument {
    #[must_use]
    pub fn new(defaults: ParserDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub fn defaults(&self) -> &ParserDefaults {
        &self.defaults
    }

    /// Parse `argv` (program path first) and publish the resolved names to `config`.
    ///
    /// Nothing is published when help is requested.
    pub fn parse_argument<S, C>(&self, argv: &[S], config: &C) -> ParseOutcome
    where
        S: AsRef<str>,
        C: ProcessConfig + ?Sized,
    {
        let argv: Vec<&str> = argv.iter().map(AsRef::as_ref).collect();
        let binary_name = argv.first().map_or("", |arg0| binary_basename(arg0)).to_string();

        info!("command: {}", argv.join(" "));

        let mut scanner = OptionScanner::new(&argv);
        if scanner.run() == Scan::Help {
            let usage = usage_text(&binary_name);
            info!("{usage}");
            return ParseOutcome::HelpRequested { usage };
        }

        let OptionScanner { dag_conf_list, process_name, sched_name, .. } = scanner;
        let parsed = ParsedArguments {
            binary_name,
            dag_conf_list,
            process_name: or_default(process_name, self.defaults.process_name()),
            sched_name: or_default(sched_name, self.defaults.sched_name()),
        };

        config.set_process_name(&parsed.process_name);
        config.set_sched_name(&parsed.sched_name);

        info!(
            "binary_name is {}, process_name is {}, sched_name is {}, has {} dag conf",
            parsed.binary_name,
            parsed.process_name,
            parsed.sched_name,
            parsed.dag_conf_list.len()
        );
        for dag in &parsed.dag_conf_list {
            info!("dag_conf: {dag}");
        }

        ParseOutcome::Parsed(parsed)
    }
}

/// Portion of `path` after the last `/`, or all of it when there is none.
#[must_use]
pub fn binary_basename(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((_, name)) => name,
        None => path,
    }
}

/// Convert raw process arguments to strings.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD; the argument is kept.
pub fn collect_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().unwrap_or_else(|raw| {
                let lossy = raw.to_string_lossy().into_owned();
                warn!("argument {index} is not valid UTF-8, using {lossy}");
                lossy
            })
        })
        .collect()
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

// ============================================================================
// Option scanning
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opt {
    Help,
    Value(ValueOpt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueOpt {
    DagConf,
    ProcessName,
    SchedName,
}

const LONG_OPTIONS: [(&str, Opt); 4] = [
    ("help", Opt::Help),
    ("dag_conf", Opt::Value(ValueOpt::DagConf)),
    ("process_name", Opt::Value(ValueOpt::ProcessName)),
    ("sched_name", Opt::Value(ValueOpt::SchedName)),
];

fn short_option(c: char) -> Option<Opt> {
    match c {
        'h' => Some(Opt::Help),
        'd' => Some(Opt::Value(ValueOpt::DagConf)),
        'p' => Some(Opt::Value(ValueOpt::ProcessName)),
        's' => Some(Opt::Value(ValueOpt::SchedName)),
        _ => None,
    }
}

/// Exact long name, or a prefix matching exactly one long name.
fn long_option(name: &str) -> Option<Opt> {
    if let Some(&(_, opt)) = LONG_OPTIONS.iter().find(|(long, _)| *long == name) {
        return Some(opt);
    }
    let mut candidates = LONG_OPTIONS.iter().filter(|(long, _)| long.starts_with(name));
    match (candidates.next(), candidates.next()) {
        (Some(&(_, opt)), None) if !name.is_empty() => Some(opt),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Done,
    Help,
}

struct OptionScanner<'a> {
    argv: &'a [&'a str],
    next: usize,
    dag_conf_list: Vec<String>,
    process_name: String,
    sched_name: String,
}

impl<'a> OptionScanner<'a> {
    fn new(argv: &'a [&'a str]) -> Self {
        Self {
            argv,
            next: 1,
            dag_conf_list: Vec::new(),
            process_name: String::new(),
            sched_name: String::new(),
        }
    }

    fn run(&mut self) -> Scan {
        while let Some(&token) = self.argv.get(self.next) {
            self.next += 1;

            if token == "--" {
                break;
            }

            if let Some(body) = token.strip_prefix("--") {
                let (name, inline) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (body, None),
                };
                match long_option(name) {
                    Some(Opt::Help) => return Scan::Help,
                    Some(Opt::Value(opt)) => self.apply(opt, inline),
                    None => debug!("ignoring unknown option {token}"),
                }
                continue;
            }

            // Stray positionals and a lone "-" have no consumer
            let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) else {
                continue;
            };

            for (pos, c) in cluster.char_indices() {
                match short_option(c) {
                    Some(Opt::Help) => return Scan::Help,
                    Some(Opt::Value(opt)) => {
                        let rest = &cluster[pos + c.len_utf8()..];
                        self.apply(opt, (!rest.is_empty()).then_some(rest));
                        break;
                    }
                    None => debug!("ignoring unknown option -{c}"),
                }
            }
        }
        Scan::Done
    }

    fn apply(&mut self, opt: ValueOpt, inline: Option<&str>) {
        match opt {
            ValueOpt::DagConf => self.collect_dag_confs(inline),
            ValueOpt::ProcessName => {
                if let Some(value) = self.take_value(inline, "-p/--process_name") {
                    self.process_name = value;
                }
            }
            ValueOpt::SchedName => {
                if let Some(value) = self.take_value(inline, "-s/--sched_name") {
                    self.sched_name = value;
                }
            }
        }
    }

    /// Inline value, else the next token verbatim. `None` at end of input.
    fn take_value(&mut self, inline: Option<&str>, option: &str) -> Option<String> {
        if let Some(value) = inline {
            return Some(value.to_string());
        }
        if let Some(&value) = self.argv.get(self.next) {
            self.next += 1;
            return Some(value.to_string());
        }
        warn!("option {option} given without a value, ignoring");
        None
    }

    /// Greedy: every following token up to the next one starting with `-`.
    fn collect_dag_confs(&mut self, inline: Option<&str>) {
        if let Some(path) = inline.filter(|p| !p.is_empty()) {
            self.dag_conf_list.push(path.to_string());
        }
        while let Some(&token) = self.argv.get(self.next) {
            if token.starts_with('-') {
                break;
            }
            if !token.is_empty() {
                self.dag_conf_list.push(token.to_string());
            }
            self.next += 1;
        }
    }
}
