use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid number \"{input}\"")]
    InvalidNumber { input: String },

    #[error("Invalid timestamp \"{input}\" (expected dd.MM.yyyy HH:mm:ss)")]
    InvalidDbTime { input: String },
}
