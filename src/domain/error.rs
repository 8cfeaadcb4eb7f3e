use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("unavailable: {0}")]
    Unavailable(String),
}
