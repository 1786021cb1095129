use thiserror::Error;

/// Rejection of a value at the type boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid season '{0}', expected one of 春, 夏, 秋, 冬")]
    InvalidSeason(String),
}
