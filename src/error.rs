//! Error types for password generation and improvement.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid argument: password length must not be negative (got {length})")]
    InvalidArgument { length: i64 },
    #[error("Cannot improve an empty password")]
    EmptyPassword,
}
