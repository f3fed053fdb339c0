//! Engine driver loop: batch pull, validation, concurrent fan-out, barrier.

use std::fmt;
use std::sync::Arc;

use tokio::task::JoinSet;

use crate::sink::Sink;
use crate::source::{Batch, BatchSource};

use super::fetch::{fetch_one, FetchOutcome};
use super::FetchEngine;

/// Per-run counters, one increment per terminal task state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub batches: usize,
    pub rejected_lines: usize,
    pub written: usize,
    pub http_errors: usize,
    pub transport_errors: usize,
    pub write_errors: usize,
    pub source_errors: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} http errors, {} transport errors, {} write errors \
             ({} batches, {} lines rejected)",
            self.written,
            self.http_errors,
            self.transport_errors,
            self.write_errors,
            self.batches,
            self.rejected_lines
        )
    }
}

/// Terminal state of one per-URL task.
enum TaskStatus {
    Written,
    HttpRejected,
    TransportFailed,
    WriteFailed,
}

impl FetchEngine {
    /// Drives the full pipeline until the source is exhausted.
    ///
    /// Per-URL failures (transport, non-200 status, write) are logged and
    /// isolated to their task; a source failure is logged and the source
    /// degrades to empty. Nothing short of source exhaustion ends the run.
    pub async fn run<S, K>(&self, mut source: S, sink: Arc<K>) -> RunSummary
    where
        S: BatchSource,
        K: Sink + 'static,
    {
        let mut summary = RunSummary::default();
        loop {
            let batch = match source.next_batch() {
                Ok(Some(batch)) => batch,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("input source unavailable: {e}");
                    summary.source_errors += 1;
                    continue;
                }
            };
            summary.batches += 1;
            self.run_batch(batch, &sink, &mut summary).await;
        }
        summary
    }

    async fn run_batch<K>(&self, batch: Batch, sink: &Arc<K>, summary: &mut RunSummary)
    where
        K: Sink + 'static,
    {
        // Invalid lines are dropped silently; only the counter records them.
        let accepted: Vec<String> = batch
            .iter()
            .map(|line| line.trim())
            .filter(|line| self.validator.is_valid(line))
            .map(str::to_string)
            .collect();
        summary.rejected_lines += batch.len() - accepted.len();

        let mut tasks = JoinSet::new();
        for url in accepted {
            let client = self.client.clone();
            let sink = Arc::clone(sink);
            tasks.spawn(async move { fetch_and_persist(&client, &url, sink.as_ref()).await });
        }

        // Barrier: drain every task of this batch, panics included, before
        // the caller may pull the next batch.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(TaskStatus::Written) => summary.written += 1,
                Ok(TaskStatus::HttpRejected) => summary.http_errors += 1,
                Ok(TaskStatus::TransportFailed) => summary.transport_errors += 1,
                Ok(TaskStatus::WriteFailed) => summary.write_errors += 1,
                Err(e) => tracing::error!("fetch task join: {e}"),
            }
        }
    }
}

/// One URL end to end: fetch, then persist on 200. Every outcome is reduced
/// to a diagnostic plus a terminal state; nothing propagates to siblings.
async fn fetch_and_persist<K: Sink>(client: &reqwest::Client, url: &str, sink: &K) -> TaskStatus {
    match fetch_one(client, url).await {
        Ok(FetchOutcome::Success { name, bytes }) => match sink.write(&name, &bytes) {
            Ok(()) => {
                tracing::info!("downloaded [{url}] to {name}");
                TaskStatus::Written
            }
            Err(e) => {
                tracing::warn!("output write failed for [{url}]: {e}");
                TaskStatus::WriteFailed
            }
        },
        Ok(FetchOutcome::HttpStatus(code)) => {
            tracing::warn!("fetching [{url}] returned http status {code}");
            TaskStatus::HttpRejected
        }
        Err(e) => {
            tracing::warn!("error fetching [{url}]: {e}");
            TaskStatus::TransportFailed
        }
    }
}
