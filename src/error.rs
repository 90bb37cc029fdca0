use thiserror::Error;

use crate::ai::provider::AiError;

#[derive(Debug, Error)]
pub enum ChatpickError {
    #[error("{0}")]
    Ai(#[from] AiError),

    #[error("Request worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
