//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the listener's runtime
//! behavior.
//!
//! ## Environment Variables
//!
//! ### `UPLOADGATE_DEBUG_ASSETS`
//!
//! When set to `1`, `true`, `yes`, or `on`, the asset catalog serves
//! unminified JavaScript and CSS so widget code can be debugged in the
//! browser. Any other value, or the variable being unset, selects the
//! minified production assets.
//!
//! ## Usage
//!
//! ```rust
//! use uploadgate::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("debug assets: {}", config.debug_assets);
//! ```

use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeConfig {
    /// Serve unminified widget assets (default: false)
    pub debug_assets: bool,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let debug_assets = match env::var("UPLOADGATE_DEBUG_ASSETS") {
            Ok(val) => matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ),
            Err(_) => false,
        };
        RuntimeConfig { debug_assets }
    }
}
