use std::process::ExitCode;

/// Prints how many three-measurement window sums exceed the previous window.
fn main() -> ExitCode {
    sonar_sweep::run(3)
}
