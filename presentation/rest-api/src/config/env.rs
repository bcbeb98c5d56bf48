use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
}

/// Reads a variable that has no sensible default.
pub fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}

/// Reads a numeric variable, falling back to `default` when it is unset or
/// cannot be parsed.
pub fn parse_or<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    parse_value(name, std::env::var(name).ok(), default)
}

fn parse_value<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display + Copy,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid value '{}' for {}, using default {}",
                raw,
                name,
                default
            );
            default
        }),
    }
}
