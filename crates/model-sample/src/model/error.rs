//! Error types raised by the sample validation hooks.

use thiserror::Error;

/// Rules a person must satisfy beyond required fields.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonError {
    #[error("firstName must not be blank")]
    BlankName,

    #[error("birthDate must not be in the future")]
    FutureBirthDate,
}
