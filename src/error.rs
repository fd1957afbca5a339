use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// The input file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input")]
    Read(#[from] io::Error),

    /// A line that is not a decimal integer. `line` is 1-based.
    #[error("line {line}: {text:?} is not an integer")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("window size must be at least 1")]
    ZeroWindow,
}

pub type Result<T> = std::result::Result<T, SweepError>;
