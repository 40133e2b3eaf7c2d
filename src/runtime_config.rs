//! # Runtime Configuration Module
//!
//! Environment-driven configuration for helper rendering.
//!
//! ## Environment Variables
//!
//! ### `ROUTE_HELPERS_DEFAULT_FORMAT`
//!
//! Format suffix applied to routes whose template declares no fixed
//! extension. Accepts `json` or `.json`; empty or unset means no suffix.
//!
//! Routes declared with a format (`/cats(.json)`) always keep their own.
//!
//! ## Usage
//!
//! ```rust
//! use route_helpers::runtime_config::HelperConfig;
//!
//! let config = HelperConfig::from_env();
//! println!("Default format: {:?}", config.default_format);
//! ```
//!
//! ## Example Configuration
//!
//! ```bash
//! export ROUTE_HELPERS_DEFAULT_FORMAT=json
//! ```

use std::env;

/// Environment variable holding the default format.
pub const DEFAULT_FORMAT_ENV: &str = "ROUTE_HELPERS_DEFAULT_FORMAT";

/// Configuration shared by every catalog a registry builds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelperConfig {
    /// Format token (`json`) used when a route declares none
    pub default_format: Option<String>,
}

impl HelperConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_values(env::var(DEFAULT_FORMAT_ENV).ok())
    }

    fn from_values(default_format: Option<String>) -> Self {
        let default_format = default_format
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());
        HelperConfig { default_format }
    }

    #[must_use]
    pub fn with_default_format(mut self, format: impl Into<String>) -> Self {
        self.default_format = Some(format.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_format_is_none() {
        assert_eq!(HelperConfig::from_values(Some("  ".into())).default_format, None);
        assert_eq!(HelperConfig::from_values(None).default_format, None);
    }

    #[test]
    fn test_format_is_trimmed() {
        let config = HelperConfig::from_values(Some(" json ".into()));
        assert_eq!(config.default_format.as_deref(), Some("json"));
    }
}
