//! One GET request: status and body to an outcome, transport failures to an
//! error.

use std::fmt;

use crate::naming;

/// Result of a completed request (a status line was obtained).
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 OK: full body in memory plus the destination name derived from
    /// the final URL's last path segment.
    Success { name: String, bytes: Vec<u8> },
    /// Any other status. The body is not read and nothing is persisted.
    HttpStatus(u16),
}

/// Failure below the HTTP status layer (timeout, connect failure, reset
/// while reading the body).
#[derive(Debug)]
pub enum FetchError {
    Transport(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
        }
    }
}

/// Performs a single GET for `url` on the shared client.
///
/// Redirects are disabled on the client, so a redirect status surfaces as
/// [`FetchOutcome::HttpStatus`] like any other non-200.
pub async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
) -> Result<FetchOutcome, FetchError> {
    let resp = client.get(url).send().await.map_err(FetchError::Transport)?;
    if resp.status() != reqwest::StatusCode::OK {
        return Ok(FetchOutcome::HttpStatus(resp.status().as_u16()));
    }
    let name = naming::destination_name(resp.url());
    let bytes = resp.bytes().await.map_err(FetchError::Transport)?;
    Ok(FetchOutcome::Success {
        name,
        bytes: bytes.to_vec(),
    })
}
