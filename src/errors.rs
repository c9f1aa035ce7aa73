use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{0}")]
    Usage(String),
    #[error("{role} file not found: {path}")]
    MissingFile { role: String, path: String },
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid baseline: {0}")]
    InvalidBaseline(String),
    #[error("config error: {0}")]
    Config(String),
}

impl CompareError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        CompareError::Usage(msg.into())
    }

    pub fn missing_file<T: Into<String>>(role: T, path: &Path) -> Self {
        CompareError::MissingFile {
            role: role.into(),
            path: path.display().to_string(),
        }
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        CompareError::Io(msg.into())
    }

    pub fn parse<T: Into<String>>(msg: T) -> Self {
        CompareError::Parse(msg.into())
    }

    pub fn invalid_baseline<T: Into<String>>(msg: T) -> Self {
        CompareError::InvalidBaseline(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        CompareError::Config(msg.into())
    }
}
