use core_data::DataError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Rejected before any data access. The message is shown to users as-is.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

impl CoreError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CoreError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
