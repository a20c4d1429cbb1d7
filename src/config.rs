use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
    pub catalog_path: Option<PathBuf>,
    pub dashboard_providers: Vec<String>,
    pub submission_webhook_url: Option<String>,
    pub submission_rate_limit: u32,
    pub submission_rate_window_secs: u64,
}

const DEFAULT_DASHBOARD_PROVIDERS: &str = "0x1234...5678,0xabcd...efgh";

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let env_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = env_or("FURO_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid FURO_HOST: {e}"))?;

        let port: u16 = env_or("FURO_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid FURO_PORT: {e}"))?;

        let max_body_size: usize = env_or("FURO_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid FURO_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("FURO_LOG_LEVEL", "info");

        let catalog_path = env_optional("FURO_CATALOG_PATH").map(PathBuf::from);

        let dashboard_providers = split_list(&env_or(
            "FURO_DASHBOARD_PROVIDERS",
            DEFAULT_DASHBOARD_PROVIDERS,
        ));

        let submission_webhook_url = env_optional("FURO_SUBMISSION_WEBHOOK_URL");
        if let Some(url) = &submission_webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("Invalid FURO_SUBMISSION_WEBHOOK_URL: {url}"));
            }
        }

        let submission_rate_limit: u32 = env_or("FURO_SUBMISSION_RATE_LIMIT", "10")
            .parse()
            .map_err(|e| format!("Invalid FURO_SUBMISSION_RATE_LIMIT: {e}"))?;

        let submission_rate_window_secs: u64 = env_or("FURO_SUBMISSION_RATE_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid FURO_SUBMISSION_RATE_WINDOW_SECS: {e}"))?;

        Ok(Config {
            host,
            port,
            max_body_size,
            log_level,
            catalog_path,
            dashboard_providers,
            submission_webhook_url,
            submission_rate_limit,
            submission_rate_window_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            max_body_size: 65536,
            log_level: "info".to_string(),
            catalog_path: None,
            dashboard_providers: split_list(DEFAULT_DASHBOARD_PROVIDERS),
            submission_webhook_url: None,
            submission_rate_limit: 10,
            submission_rate_window_secs: 60,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_size, 65536);
        assert!(config.catalog_path.is_none());
        assert!(config.submission_webhook_url.is_none());
        assert_eq!(config.submission_rate_limit, 10);
        assert_eq!(config.submission_rate_window_secs, 60);
    }

    #[test]
    fn reads_overrides() {
        let config = parse(&[
            ("FURO_PORT", "8080"),
            ("FURO_CATALOG_PATH", "./catalog.json"),
            ("FURO_DASHBOARD_PROVIDERS", "0xa,0xb,0xc"),
            ("FURO_SUBMISSION_WEBHOOK_URL", "https://review.example.com/in"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.catalog_path, Some(PathBuf::from("./catalog.json")));
        assert_eq!(config.dashboard_providers.len(), 3);
        assert_eq!(
            config.submission_webhook_url.as_deref(),
            Some("https://review.example.com/in")
        );
    }

    #[test]
    fn rejects_bad_port() {
        let err = parse(&[("FURO_PORT", "not-a-port")]).unwrap_err();
        assert!(err.starts_with("Invalid FURO_PORT"), "{err}");

        let err = parse(&[("FURO_PORT", "70000")]).unwrap_err();
        assert!(err.starts_with("Invalid FURO_PORT"), "{err}");
    }

    #[test]
    fn rejects_non_http_webhook_url() {
        let err = parse(&[("FURO_SUBMISSION_WEBHOOK_URL", "ftp://review.example.com")]).unwrap_err();
        assert_eq!(err, "Invalid FURO_SUBMISSION_WEBHOOK_URL: ftp://review.example.com");
    }

    #[test]
    fn blank_webhook_url_means_unset() {
        let config = parse(&[("FURO_SUBMISSION_WEBHOOK_URL", "  ")]).unwrap();
        assert!(config.submission_webhook_url.is_none());
    }

    #[test]
    fn splits_provider_list() {
        assert_eq!(
            split_list(" 0xa , ,0xb,"),
            vec!["0xa".to_string(), "0xb".to_string()]
        );
        assert!(split_list("").is_empty());
    }

    #[test]
    fn default_dashboard_covers_two_providers() {
        assert_eq!(Config::default().dashboard_providers.len(), 2);
    }
}
