use crate::error::CsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Sequence(#[from] CsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
