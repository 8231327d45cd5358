//! check-deps - Report outdated, replaced and stale Go modules
//!
//! Runs `go list -m -u -json all` in the target directory and prints a
//! report on stderr. Exits with 1 when a module is reported or the check
//! failed, 0 otherwise.

use check_deps::app::run;
use check_deps::exec::SystemRunner;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let runner = SystemRunner::new();
    let mut stderr = io::stderr().lock();
    let code = run(std::env::args_os(), &runner, &mut stderr);
    let _ = stderr.flush();
    ExitCode::from(code)
}
