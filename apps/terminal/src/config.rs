//! Terminal configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Every value must parse or the process refuses to start; in
//! particular the boolean flag accepts only an enumerated token set instead
//! of coercing arbitrary strings to true.

use std::env;

/// Terminal configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbose logging flag (`DEBUG`).
    pub debug: bool,

    /// Decimal places for pack prices (`PRICE_DECIMAL_PLACES`).
    pub price_decimal_places: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(AppConfig {
            debug: parse_bool_flag(&env::var("DEBUG").unwrap_or_else(|_| "false".to_string()))
                .ok_or_else(|| ConfigError::InvalidValue("DEBUG".to_string()))?,

            price_decimal_places: env::var("PRICE_DECIMAL_PLACES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRICE_DECIMAL_PLACES".to_string()))?,
        })
    }
}

/// Parses a boolean flag from an enumerated token set, case-insensitively.
///
/// False: `false`, `0`, `no`, `not`. True: `true`, `1`, `yes`, `on`.
/// Anything else is rejected rather than coerced to true.
fn parse_bool_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "false" | "0" | "no" | "not" => Some(false),
        "true" | "1" | "yes" | "on" => Some(true),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
