use std::fmt;

#[derive(Debug)]
pub enum VecgenError {
    ConfigError(String),
    InvalidReferenceImage(String),
    GenerationError(String),
    TraceError(String),
}

impl fmt::Display for VecgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecgenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            VecgenError::InvalidReferenceImage(msg) => {
                write!(f, "Invalid reference image: {}", msg)
            }
            VecgenError::GenerationError(msg) => write!(f, "Generation error: {}", msg),
            VecgenError::TraceError(msg) => write!(f, "Trace error: {}", msg),
        }
    }
}

impl std::error::Error for VecgenError {}

pub type Result<T> = std::result::Result<T, VecgenError>;
