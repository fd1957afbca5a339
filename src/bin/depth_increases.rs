use std::process::ExitCode;

/// Prints how many measurements are deeper than the one before.
fn main() -> ExitCode {
    sonar_sweep::run(1)
}
