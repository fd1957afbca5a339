use std::collections::VecDeque;

use crate::error::{Result, SweepError};

/// Counts how often the sum of a sliding window of `window` consecutive
/// measurements is strictly greater than the sum of the window before it.
///
/// Only the last `window` measurements are retained, so the counter can be
/// fed straight from a reader.
#[derive(Debug, Clone)]
pub struct WindowedIncreaseCounter {
    window: usize,
    history: VecDeque<i64>,
    /// Sum of `history`. Wider than the measurements so it cannot overflow.
    sum: i128,
    previous: i128,
    measurements: usize,
    increases: u64,
}

impl WindowedIncreaseCounter {
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(SweepError::ZeroWindow);
        }
        Ok(WindowedIncreaseCounter {
            window,
            history: VecDeque::with_capacity(window + 1),
            sum: 0,
            previous: 0,
            measurements: 0,
            increases: 0,
        })
    }

    pub fn push(&mut self, value: i64) {
        self.measurements += 1;
        self.history.push_back(value);
        self.sum += i128::from(value);

        // A full window already existed, so this value closes a new one.
        if self.history.len() > self.window {
            if let Some(leaving) = self.history.pop_front() {
                self.sum -= i128::from(leaving);
            }
            if self.sum > self.previous {
                self.increases += 1;
            }
        }
        self.previous = self.sum;
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn measurements(&self) -> usize {
        self.measurements
    }

    /// Number of strict increases seen so far. Zero until more than
    /// `window` measurements have been pushed.
    pub fn increases(&self) -> u64 {
        self.increases
    }
}

impl Extend<i64> for WindowedIncreaseCounter {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Counts window-sum increases over an in-memory sequence.
pub fn count_increases(values: &[i64], window: usize) -> Result<u64> {
    let mut counter = WindowedIncreaseCounter::new(window)?;
    counter.extend(values.iter().copied());
    Ok(counter.increases())
}
