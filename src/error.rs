//! Error types for hostmerge.
//!
//! Every variant here is recoverable by design: a failing source or file
//! contributes nothing and the run continues. Only a persistence failure
//! defeats the run's purpose, and even that is surfaced through logging
//! rather than an abort.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("request failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("all {attempts} attempts failed for {url}: {last}")]
    RetryExhausted {
        url: String,
        attempts: u32,
        last: String,
    },

    #[error("fetched artifact is empty for {url}")]
    EmptyArtifact { url: String },

    #[error("failed to store fetched list for {url}: {reason}")]
    Store { url: String, reason: String },
}
