//! Errors raised while loading slider configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read slider config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse slider config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid color `{0}`: expected RGB, RRGGBB or RRGGBBAA hex")]
    InvalidColor(String),

    #[error("invalid range: min {min} must be finite and below max {max}")]
    InvalidRange { min: f64, max: f64 },
}
