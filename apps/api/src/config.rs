use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::ats::analysis::AnalysisSettings;
use crate::ats::frequency::DEFAULT_TOP_KEYWORDS;
use crate::ats::scoring::ScoreThresholds;

/// Application configuration loaded from environment variables.
/// Every variable is optional; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How many job keywords the frequency comparison returns.
    pub top_keywords: usize,
    pub high_score: f64,
    pub medium_score: f64,
    /// Request body limit, covers JSON bodies and multipart uploads.
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = ScoreThresholds::default();
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            top_keywords: DEFAULT_TOP_KEYWORDS,
            high_score: thresholds.high,
            medium_score: thresholds.medium,
            max_upload_bytes: 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_or("PORT", read_env("PORT"), defaults.port)?,
            rust_log: read_env("RUST_LOG").unwrap_or(defaults.rust_log),
            top_keywords: parse_or(
                "ATS_TOP_KEYWORDS",
                read_env("ATS_TOP_KEYWORDS"),
                defaults.top_keywords,
            )?,
            high_score: parse_or("ATS_HIGH_SCORE", read_env("ATS_HIGH_SCORE"), defaults.high_score)?,
            medium_score: parse_or(
                "ATS_MEDIUM_SCORE",
                read_env("ATS_MEDIUM_SCORE"),
                defaults.medium_score,
            )?,
            max_upload_bytes: parse_or(
                "MAX_UPLOAD_BYTES",
                read_env("MAX_UPLOAD_BYTES"),
                defaults.max_upload_bytes,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.medium_score > self.high_score {
            bail!(
                "ATS_MEDIUM_SCORE ({}) must not exceed ATS_HIGH_SCORE ({})",
                self.medium_score,
                self.high_score
            );
        }
        if self.top_keywords == 0 {
            bail!("ATS_TOP_KEYWORDS must be at least 1");
        }
        Ok(())
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            top_keywords: self.top_keywords,
            thresholds: ScoreThresholds {
                high: self.high_score,
                medium: self.medium_score,
            },
        }
    }
}

fn read_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        assert_eq!(parse_or::<u16>("PORT", None, 8080).unwrap(), 8080);
    }

    #[test]
    fn test_parse_or_parses_value() {
        assert_eq!(parse_or::<u16>("PORT", Some(" 3000 ".to_string()), 8080).unwrap(), 3000);
        assert_eq!(parse_or::<f64>("ATS_HIGH_SCORE", Some("85.5".to_string()), 80.0).unwrap(), 85.5);
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        let err = parse_or::<u16>("PORT", Some("eighty".to_string()), 8080).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis_settings(), AnalysisSettings::default());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = Config {
            high_score: 50.0,
            medium_score: 70.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_top_keywords_rejected() {
        let config = Config {
            top_keywords: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
