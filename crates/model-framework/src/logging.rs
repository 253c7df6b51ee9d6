//! # Logging
//!
//! The framework emits structured `tracing` events with a `model` field:
//!
//! - `debug`: every definition and every build, with the full spec or attributes.
//! - `info`: a named model was registered with a factory.
//! - `warn`: a definition or a build failed, with `error` set to the message.
//!
//! The library never installs a subscriber itself. Binaries call [`setup_tracing`].
//!
//! ```bash
//! RUST_LOG=model_framework=debug cargo run -p model-sample
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
