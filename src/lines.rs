use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SweepError};

/// Yields one measurement per line of the underlying reader.
pub struct MeasurementLines<R: BufRead> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> MeasurementLines<R> {
    pub fn new(reader: R) -> Self {
        MeasurementLines {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for MeasurementLines<R> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None, // End of input
            Ok(_) => {
                self.line += 1;
                let text = self.buffer.trim();
                Some(text.parse::<i64>().map_err(|source| SweepError::Parse {
                    line: self.line,
                    text: text.to_string(),
                    source,
                }))
            }
            Err(e) => Some(Err(SweepError::Read(e))),
        }
    }
}

/// Opens `path` and returns an iterator over its measurements.
/// The file is closed when the iterator is dropped.
pub fn open_measurements<P: AsRef<Path>>(path: P) -> Result<MeasurementLines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SweepError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(MeasurementLines::new(BufReader::new(file)))
}
