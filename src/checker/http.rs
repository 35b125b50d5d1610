// src/checker/http.rs
// =============================================================================
// HTTP liveness checks.
//
// A link is alive iff a GET returns a success-class status. Everything else
// is dead, with one of two user-facing reasons:
//   - "Bad status code: <code> '<text>'" for well-formed error responses
//   - "Connection error" for any transport-level failure
//
// The generic connection reason is deliberate: DNS/TLS/socket details are
// noise for the report. The underlying error is still logged at debug level
// for anyone running with --verbose.
// =============================================================================

use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::fmt;

/// Why a link was judged dead. The vocabulary is fixed and small.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DeadReason {
    /// The server answered, but outside the HTTP success class.
    BadStatus { code: u16, text: String },
    /// The request never produced a well-formed response.
    ConnectionError,
}

impl fmt::Display for DeadReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeadReason::BadStatus { code, text } => {
                write!(f, "Bad status code: {code} '{text}'")
            }
            DeadReason::ConnectionError => write!(f, "Connection error"),
        }
    }
}

/// Outcome of a single liveness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Alive,
    Dead(DeadReason),
}

/// Checks links for liveness over HTTP. Cheap to clone; the inner client
/// shares its connection pool.
#[derive(Debug, Clone)]
pub struct LivenessChecker {
    client: Client,
}

impl LivenessChecker {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Checks whether the link is reachable. Never fails: every error path
    /// degrades to a dead verdict so the caller can keep crawling.
    pub async fn check(&self, link: &str) -> Verdict {
        match self.client.get(link).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Verdict::Alive
                } else {
                    Verdict::Dead(DeadReason::BadStatus {
                        code: status.as_u16(),
                        text: status.canonical_reason().unwrap_or_default().to_string(),
                    })
                }
            }
            Err(error) => {
                debug!("liveness check failed for {link}: {error:?}");
                Verdict::Dead(DeadReason::ConnectionError)
            }
        }
    }
}
