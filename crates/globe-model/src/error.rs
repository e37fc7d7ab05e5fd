use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown dataset key: {key}")]
    UnknownDataset { key: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
