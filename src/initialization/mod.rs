//! Application initialization.
//!
//! This module provides functions to set up process-wide facilities:
//! - Logger configuration
//! - The TLS crypto provider

mod logger;

pub use logger::init_logger_with;

use rustls::crypto::{ring::default_provider, CryptoProvider};

/// Initializes the crypto provider for TLS operations.
///
/// Configures the global crypto provider for `rustls`. This must be called
/// before any TLS connections are established.
pub fn init_crypto_provider() {
    // The return value is ignored because reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
