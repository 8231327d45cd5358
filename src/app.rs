//! Application entry point
//!
//! `run` takes the argument list, a command runner and the output writer and
//! returns the process exit code, so the whole flow can be tested without
//! spawning `go` or touching the real stderr.

use crate::check::{self, CheckPolicy};
use crate::cli::CliArgs;
use crate::exec::CommandRunner;
use crate::golist;
use crate::logging;
use crate::output::ReportFormatter;
use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::io::{IsTerminal, Write};

/// Nothing to report
pub const EXIT_SUCCESS: u8 = 0;
/// At least one module was reported, or the run failed
pub const EXIT_FAILURE: u8 = 1;

/// Parse the arguments, check the modules and write the report to `out`
pub fn run<I, T, R>(args: I, runner: &R, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: CommandRunner + ?Sized,
{
    let cli = match CliArgs::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = write!(out, "{}", e);
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_FAILURE,
            };
        }
    };

    logging::init(cli.verbose);

    let color = !cli.no_color && std::io::stderr().is_terminal();
    let formatter = ReportFormatter::with_color(color);
    match check(&cli, runner, formatter, Utc::now(), out) {
        Ok(true) => EXIT_FAILURE,
        Ok(false) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

/// List, classify and report the modules of `cli.path`.
///
/// Classification and the "Last update" column are both computed against
/// `now`. Returns true if at least one module was reported.
pub fn check<R: CommandRunner + ?Sized>(
    cli: &CliArgs,
    runner: &R,
    formatter: ReportFormatter,
    now: DateTime<Utc>,
    out: &mut dyn Write,
) -> anyhow::Result<bool> {
    let policy = CheckPolicy::from_cli(cli);

    let raw = golist::list_modules_raw(runner, &cli.path)
        .with_context(|| format!("could not list the modules of {}", cli.path.display()))?;
    let modules =
        golist::parse_modules(&raw).context("could not parse the output of go list")?;

    let results = check::classify_at(&policy, &modules, now);
    formatter
        .at(now)
        .format(&results, out)
        .context("could not write the report")?;
    out.flush().context("could not write the report")?;

    Ok(results.has_modules())
}
