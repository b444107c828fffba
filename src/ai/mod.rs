//! Remote language-model plumbing.
//!
//! One HTTP client, two callers: the tutor (verbatim passthrough) and the
//! quiz generator (the extract/repair/validate pipeline in [`quiz`]).

mod client;
pub mod quiz;
pub mod tutor;

use thiserror::Error;

pub use client::OpenRouterClient;

/// Failures of the remote call itself. Content-shape problems never surface
/// here; they degrade to fallback output inside the quiz pipeline.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured. Raised before any network I/O.
    #[error("missing OPENROUTER_API_KEY")]
    MissingCredential,

    /// The endpoint answered with a non-success status.
    #[error("OpenRouter request failed with status {status}: {body}")]
    RemoteService { status: u16, body: String },

    /// Transport-level failure (DNS, TLS, timeout, malformed envelope).
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
}
