//! Lazy batched line reader over a file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use super::{Batch, BatchSource, SourceError};

enum State {
    /// File not yet touched; opened on the first `next_batch` call.
    Unopened,
    Reading(Lines<BufReader<File>>),
    /// Exhausted, or degraded after a reported error.
    Done,
}

/// Reads a file line by line, yielding batches of up to `batch_size` lines.
///
/// The file is opened lazily. If it cannot be opened or a read fails, the
/// error is returned once and the source thereafter reports end of input.
pub struct FileSource {
    path: PathBuf,
    batch_size: usize,
    state: State,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, batch_size: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            batch_size: batch_size.max(1),
            state: State::Unopened,
        }
    }
}

impl BatchSource for FileSource {
    fn next_batch(&mut self) -> Result<Option<Batch>, SourceError> {
        if let State::Unopened = self.state {
            match File::open(&self.path) {
                Ok(f) => self.state = State::Reading(BufReader::new(f).lines()),
                Err(e) => {
                    self.state = State::Done;
                    return Err(SourceError::Open {
                        path: self.path.clone(),
                        source: e,
                    });
                }
            }
        }

        let lines = match &mut self.state {
            State::Reading(lines) => lines,
            _ => return Ok(None),
        };

        let mut batch = Batch::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            match lines.next() {
                Some(Ok(line)) => batch.push(line),
                Some(Err(e)) => {
                    self.state = State::Done;
                    return Err(SourceError::Read(e));
                }
                None => {
                    self.state = State::Done;
                    break;
                }
            }
        }

        if batch.is_empty() {
            Ok(None)
        } else {
            Ok(Some(batch))
        }
    }
}
