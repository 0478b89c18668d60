use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to encode wire message: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed wire frame: {0}")]
    Malformed(#[source] serde_json::Error),
}
