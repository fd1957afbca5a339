//! Counts how often the sum of a sliding window over a series of sonar
//! depth measurements increases.

use std::error::Error as _;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod error;
mod lines;
mod window;

pub use error::{Result, SweepError};
pub use lines::{open_measurements, MeasurementLines};
pub use window::{count_increases, WindowedIncreaseCounter};

/// Input read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Counts window-sum increases over the measurements of `reader`, one per line.
pub fn count_reader_increases<R: BufRead>(reader: R, window: usize) -> Result<u64> {
    let mut counter = WindowedIncreaseCounter::new(window)?;
    tally_into(&mut counter, MeasurementLines::new(reader))?;
    Ok(counter.increases())
}

/// Counts window-sum increases over the measurements stored in `path`.
pub fn count_file_increases<P: AsRef<Path>>(path: P, window: usize) -> Result<u64> {
    let path = path.as_ref();
    log::debug!("reading measurements from {}", path.display());
    let mut counter = WindowedIncreaseCounter::new(window)?;
    tally_into(&mut counter, open_measurements(path)?)?;
    Ok(counter.increases())
}

fn tally_into<R: BufRead>(
    counter: &mut WindowedIncreaseCounter,
    lines: MeasurementLines<R>,
) -> Result<()> {
    for value in lines {
        counter.push(value?);
    }
    log::debug!(
        "{} measurements, window {}: {} increases",
        counter.measurements(),
        counter.window(),
        counter.increases()
    );
    Ok(())
}

/// Shared entry point of the binaries: reads the file named by the first
/// argument (or `input.txt`) and prints the count for `window`.
pub fn run(window: usize) -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    match count_file_increases(&path, window) {
        Ok(count) => {
            println!("{}", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("window {} over {} failed: {:?}", window, path.display(), e);
            eprintln!("error: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

/// Formats an error followed by its chain of sources.
fn describe(err: &SweepError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SONAR: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn counts_from_reader() -> Result<()> {
        assert_eq!(count_reader_increases(Cursor::new(SONAR), 1)?, 7);
        assert_eq!(count_reader_increases(Cursor::new(SONAR), 3)?, 5);
        Ok(())
    }

    #[test]
    fn counting_a_file_twice_gives_the_same_answer(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(SONAR.as_bytes())?;
        file.flush()?;

        let first = count_file_increases(file.path(), 3)?;
        let second = count_file_increases(file.path(), 3)?;
        assert_eq!(first, 5);
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn short_file_is_not_an_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "1\n2")?;
        assert_eq!(count_file_increases(file.path(), 3)?, 0);
        Ok(())
    }

    #[test]
    fn malformed_line_fails_the_whole_count() {
        let err = count_reader_increases(Cursor::new("1\n2\nabc\n4\n"), 1).unwrap_err();
        assert!(matches!(err, SweepError::Parse { line: 3, .. }));
    }

    #[test]
    fn zero_window_fails_before_reading() {
        let err = count_reader_increases(Cursor::new(SONAR), 0).unwrap_err();
        assert!(matches!(err, SweepError::ZeroWindow));
    }

    #[test]
    fn error_description_includes_the_cause() {
        let err = count_reader_increases(Cursor::new("12x\n"), 1).unwrap_err();
        assert_eq!(
            describe(&err),
            "line 1: \"12x\" is not an integer: invalid digit found in string"
        );
    }
}
