use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}
