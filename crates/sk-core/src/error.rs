use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SkError {
    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Degenerate shape: {0}")]
    Degenerate(String),
}

pub type Result<T> = std::result::Result<T, SkError>;
