use thiserror::Error;

/// Engine layer errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    CoreError(#[from] koyomi_core::error::CoreError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
