use thiserror::Error;

/// Failures of the outbound generation call.
///
/// Malformed model output is not an error: it is handled by the fallback
/// document in [`crate::interpret`].
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation provider returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("generation provider returned no completion text")]
    EmptyCompletion,

    #[error("generation call timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),
}
