//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point.
// FORMAT: report on stdout; log lines (seq|level|category|message) on stderr

fn main() -> std::process::ExitCode {
    rpncalc_lib::run()
}
