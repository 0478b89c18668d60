use crate::worker::WorkerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    /// Any call after `destroy` is a programming error.
    #[error("circle packer has been destroyed")]
    Destroyed,

    #[error(transparent)]
    Worker(#[from] WorkerError),

    #[error("invalid packer configuration: {0}")]
    Config(#[source] serde_json::Error),
}
