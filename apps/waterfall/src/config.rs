use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Demo host configuration loaded from environment variables.
/// Every variable has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub column_count: usize,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub demo_items: usize,
    pub demo_seed: u64,
    /// JSON scene to lay out instead of the generated demo scene.
    pub scene_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            column_count: parse_env("WATERFALL_COLUMN_COUNT", 2)?,
            viewport_width: parse_env("WATERFALL_VIEWPORT_WIDTH", 375.0)?,
            viewport_height: parse_env("WATERFALL_VIEWPORT_HEIGHT", 667.0)?,
            demo_items: parse_env("WATERFALL_DEMO_ITEMS", 101)?,
            demo_seed: parse_env("WATERFALL_DEMO_SEED", 42)?,
            scene_path: std::env::var("WATERFALL_SCENE_PATH").ok().map(PathBuf::from),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_padded_numbers() {
        let columns: usize = parse_value("WATERFALL_COLUMN_COUNT", " 3 ").unwrap();
        assert_eq!(columns, 3);
        let width: f32 = parse_value("WATERFALL_VIEWPORT_WIDTH", "414.5").unwrap();
        assert_eq!(width, 414.5);
    }

    #[test]
    fn test_parse_value_error_names_variable() {
        let err = parse_value::<usize>("WATERFALL_COLUMN_COUNT", "two").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("WATERFALL_COLUMN_COUNT"), "got: {message}");
        assert!(message.contains("two"), "got: {message}");
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let seed: u64 = parse_env("WATERFALL_TEST_UNSET_VARIABLE_FOR_DEFAULTS", 9).unwrap();
        assert_eq!(seed, 9);
    }
}
