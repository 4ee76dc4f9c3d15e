/// Filter used when neither `FOOTBALL_WAGER_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "football_wager=warn";

/// Runtime settings for the binary, read from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from key/value pairs. `FOOTBALL_WAGER_LOG` wins over `RUST_LOG`.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut own_filter = None;
        let mut rust_log = None;
        let mut log_json = false;

        for (key, value) in vars {
            match key.as_ref() {
                "FOOTBALL_WAGER_LOG" => own_filter = Some(value.into()),
                "RUST_LOG" => rust_log = Some(value.into()),
                "FOOTBALL_WAGER_LOG_JSON" => log_json = true,
                _ => {}
            }
        }

        let non_blank = |f: &String| !f.trim().is_empty();
        let log_filter = own_filter
            .filter(non_blank)
            .or(rust_log.filter(non_blank))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        AppConfig {
            log_filter,
            log_json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_own_filter_wins() {
        let cfg = AppConfig::from_vars([
            ("RUST_LOG", "info"),
            ("FOOTBALL_WAGER_LOG", "football_wager=trace"),
        ]);
        assert_eq!(cfg.log_filter, "football_wager=trace");
    }

    #[test]
    fn test_rust_log_fallback() {
        let cfg = AppConfig::from_vars([("RUST_LOG", "debug"), ("HOME", "/root")]);
        assert_eq!(cfg.log_filter, "debug");
        assert!(!cfg.log_json);
    }

    #[test]
    fn test_blank_filter_uses_default() {
        let cfg = AppConfig::from_vars([("FOOTBALL_WAGER_LOG", "  ")]);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);

        let cfg = AppConfig::from_vars([("FOOTBALL_WAGER_LOG", ""), ("RUST_LOG", "info")]);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_json_flag() {
        let cfg = AppConfig::from_vars([("FOOTBALL_WAGER_LOG_JSON", "1")]);
        assert!(cfg.log_json);
    }
}
