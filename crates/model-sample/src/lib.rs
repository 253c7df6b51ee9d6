//! # Model Sample
//!
//! A small domain built on [`model_framework`]:
//!
//! - **[model]**: the `Address` value object and the `Person` entity, as [`ModelSpec`](model_framework::ModelSpec)s.
//! - **[catalog]**: [`ModelCatalog`](catalog::ModelCatalog) defines every model through one
//!   [`ModelFactory`](model_framework::ModelFactory) and rehydrates stored people.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p model-sample
//! ```

pub mod catalog;
pub mod model;
