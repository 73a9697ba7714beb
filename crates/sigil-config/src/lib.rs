#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
//! Configuration for the Sigil facade.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sigil_config::Config;
//!
//! // defaults → SIGIL_* environment fallbacks → sigil.toml
//! let config = Config::load(Some(std::path::Path::new("sigil.toml"))).unwrap();
//! println!("dispatch mode: {}", config.dispatch.mode);
//! ```
//!
//! # Configuration Precedence
//!
//! From highest to lowest priority:
//!
//! 1. **Config file** passed to [`Config::load`]
//! 2. **Environment variables** (`SIGIL_DISPATCH_MODE`, `SIGIL_MAX_IN_FLIGHT`,
//!    `SIGIL_LOG_LEVEL`, `SIGIL_LOG_FORMAT`), used only where the file is silent
//! 3. **Embedded defaults** (`defaults.toml` compiled into binary)
//!
//! This crate has **no dependencies on other internal sigil crates**.

/// Configuration error types.
pub mod error;
/// Configuration file loading and layering.
pub mod loader;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use types::*;

impl Config {
    /// Load configuration with full precedence chain.
    ///
    /// See [`loader::load`] for the full algorithm.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config file is malformed or the
    /// final configuration fails validation.
    pub fn load(path: Option<&std::path::Path>) -> ConfigResult<Self> {
        loader::load(path)
    }

    /// Load configuration from a single file over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load_file(path: &std::path::Path) -> ConfigResult<Self> {
        loader::load_file(path)
    }

    /// Parse a TOML document over the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is malformed or invalid.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        loader::from_toml_str(content)
    }
}
