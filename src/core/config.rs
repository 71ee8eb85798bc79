//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address and output paths come from `[package.metadata.leptos]` instead.

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default `max-age` for compiled assets under `/pkg`
pub const DEFAULT_ASSET_CACHE_SECS: u64 = 3600;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0/yes/no), got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("RUST_LOG is not a valid tracing filter ({reason}), got {value:?}")]
    InvalidLogFilter { value: String, reason: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, e.g. `info,cyberfolio=debug`
    pub log_filter: String,

    /// Compress responses with brotli/gzip
    pub compression: bool,

    /// `Cache-Control: max-age` for compiled assets
    pub asset_cache_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Invalid values are reported alongside a config that keeps the default
    /// for each offending variable.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Config::default();
        let mut errors = Vec::new();

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            match tracing_subscriber::EnvFilter::try_new(&filter) {
                Ok(_) => config.log_filter = filter,
                Err(e) => errors.push(ConfigError::InvalidLogFilter {
                    value: filter,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(value) = lookup("PORTFOLIO_COMPRESSION") {
            match parse_bool("PORTFOLIO_COMPRESSION", &value) {
                Ok(flag) => config.compression = flag,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = lookup("PORTFOLIO_ASSET_CACHE_SECS") {
            match value.trim().parse::<u64>() {
                Ok(secs) => config.asset_cache_secs = secs,
                Err(_) => errors.push(ConfigError::InvalidNumber {
                    name: "PORTFOLIO_ASSET_CACHE_SECS",
                    value,
                }),
            }
        }

        (config, errors)
    }

    /// `Cache-Control` header value for compiled assets
    pub fn asset_cache_control(&self) -> String {
        if self.asset_cache_secs == 0 {
            "no-cache".to_string()
        } else {
            format!("public, max-age={}", self.asset_cache_secs)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            asset_cache_secs: DEFAULT_ASSET_CACHE_SECS,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no process env mutation - thread safe)
    // ========================================================================

    fn load(vars: &[(&str, &str)]) -> (Config, Vec<ConfigError>) {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let (config, errors) = load(&[]);
        assert!(errors.is_empty());
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
        assert_eq!(config.asset_cache_secs, 3600);
    }

    #[test]
    fn test_all_fields_set() {
        let (config, errors) = load(&[
            ("RUST_LOG", "debug,hyper=warn"),
            ("PORTFOLIO_COMPRESSION", "off"),
            ("PORTFOLIO_ASSET_CACHE_SECS", "86400"),
        ]);
        assert!(errors.is_empty());
        assert_eq!(config.log_filter, "debug,hyper=warn");
        assert!(!config.compression);
        assert_eq!(config.asset_cache_secs, 86400);
    }

    #[test]
    fn test_blank_log_filter_keeps_default() {
        let (config, _) = load(&[("RUST_LOG", "   ")]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let (config, errors) = load(&[
            ("PORTFOLIO_COMPRESSION", "maybe"),
            ("PORTFOLIO_ASSET_CACHE_SECS", "-5"),
        ]);
        assert!(config.compression);
        assert_eq!(config.asset_cache_secs, DEFAULT_ASSET_CACHE_SECS);
        assert_eq!(
            errors,
            vec![
                ConfigError::InvalidBool {
                    name: "PORTFOLIO_COMPRESSION",
                    value: "maybe".to_string(),
                },
                ConfigError::InvalidNumber {
                    name: "PORTFOLIO_ASSET_CACHE_SECS",
                    value: "-5".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_invalid_log_filter_keeps_default() {
        let (config, errors) = load(&[("RUST_LOG", "cyberfolio=loud")]);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ConfigError::InvalidLogFilter { value, .. } if value == "cyberfolio=loud"
        ));
        assert!(errors[0].to_string().starts_with("RUST_LOG is not a valid tracing filter"));
    }

    #[test]
    fn test_bool_spellings() {
        for value in ["1", "TRUE", " yes ", "on"] {
            assert_eq!(parse_bool("X", value), Ok(true));
        }
        for value in ["0", "False", "no", "OFF"] {
            assert_eq!(parse_bool("X", value), Ok(false));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = parse_bool("PORTFOLIO_COMPRESSION", "maybe").unwrap_err();
        assert_eq!(
            err.to_string(),
            "PORTFOLIO_COMPRESSION must be a boolean (true/false/1/0/yes/no), got \"maybe\""
        );
    }

    #[test]
    fn test_asset_cache_control() {
        let mut config = Config::default();
        assert_eq!(config.asset_cache_control(), "public, max-age=3600");
        config.asset_cache_secs = 0;
        assert_eq!(config.asset_cache_control(), "no-cache");
    }
}
