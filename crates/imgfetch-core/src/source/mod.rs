//! Batched input sources.
//!
//! A source yields fixed-size batches of raw candidate lines until the
//! underlying medium is exhausted. An unreadable medium is reported once and
//! then treated as exhausted, so a missing input file yields zero work rather
//! than aborting the run.

mod file;

pub use file::FileSource;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One batch of raw input lines, at most `batch_size` long.
pub type Batch = Vec<String>;

/// Failure while opening or reading the input medium. Returned at most once
/// per source; subsequent calls report end of input.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

/// Produces ordered, non-overlapping batches of raw lines.
///
/// `Ok(Some(batch))` carries between 1 and `batch_size` lines (the final
/// batch of a stream may be shorter). `Ok(None)` signals end of input.
pub trait BatchSource {
    fn next_batch(&mut self) -> Result<Option<Batch>, SourceError>;
}
