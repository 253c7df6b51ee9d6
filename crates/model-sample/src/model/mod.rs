//! Model specifications for the sample domain.

pub mod address;
pub mod error;
pub mod person;

pub use address::*;
pub use error::*;
pub use person::*;
