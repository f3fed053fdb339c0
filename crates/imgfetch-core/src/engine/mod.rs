//! Batched concurrent fetch-and-persist engine.
//!
//! Pulls one batch at a time from a [`BatchSource`], fetches every accepted
//! URL of that batch concurrently over a single shared HTTP client, and
//! persists 200 responses through a [`Sink`]. Batches never overlap: the
//! engine waits for every task of the current batch before pulling the next.
//!
//! [`BatchSource`]: crate::source::BatchSource
//! [`Sink`]: crate::sink::Sink

mod fetch;
mod run;

pub use fetch::{fetch_one, FetchError, FetchOutcome};
pub use run::RunSummary;

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::FetchConfig;
use crate::validate::UrlValidator;

pub struct FetchEngine {
    /// Shared connection pool, created once per run and dropped with the
    /// engine.
    client: reqwest::Client,
    validator: UrlValidator,
}

impl FetchEngine {
    /// Builds the long-lived HTTP client: redirects disabled, per-request
    /// timeout from config.
    pub fn new(cfg: &FetchConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(cfg.request_timeout_secs));
        if let Some(ua) = &cfg.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let client = builder.build().context("failed to build HTTP client")?;
        Ok(Self {
            client,
            validator: UrlValidator::new(),
        })
    }
}
