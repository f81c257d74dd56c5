use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid seed data for {entity}: {message}")]
    InvalidSeed { entity: String, message: String },

    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
