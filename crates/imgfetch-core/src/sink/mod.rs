//! Persistence targets for fetched bytes.

mod dir;

pub use dir::DirSink;

use std::io;
use thiserror::Error;

/// Failure while persisting one payload. Reported, never retried.
#[derive(Debug, Error)]
#[error("failed to write {name}: {source}")]
pub struct WriteError {
    pub name: String,
    #[source]
    pub source: io::Error,
}

/// Accepts a destination name and a byte payload.
///
/// Implementations own directory existence/creation and may be called from
/// concurrent fetch tasks; within one batch, distinct URLs yield distinct
/// names except for colliding final path segments (last writer wins).
pub trait Sink: Send + Sync {
    fn write(&self, name: &str, bytes: &[u8]) -> Result<(), WriteError>;
}
