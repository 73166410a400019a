use std::path::PathBuf;
use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "HealthLocker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default classifier endpoint when no environment override is present.
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:8000";

/// Default bound on a single classifier call.
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 8;

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/HealthLocker/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HealthLocker")
}

/// Path of the SQLite database file.
pub fn database_path() -> PathBuf {
    app_data_dir().join("healthlocker.db")
}

/// Address the API server binds to.
pub fn api_bind_addr() -> String {
    std::env::var("HEALTHLOCKER_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string())
}

/// Configuration for the external intent-prediction service.
///
/// Injected into the classifier adapter at construction time; nothing in
/// the chat core reads the endpoint from ambient state.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClassifierConfig {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Read endpoint configuration from the environment:
    /// `HEALTHLOCKER_CLASSIFIER_URL` and `HEALTHLOCKER_CLASSIFIER_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("HEALTHLOCKER_CLASSIFIER_URL")
            .unwrap_or_else(|_| DEFAULT_CLASSIFIER_URL.to_string());
        let timeout_secs = std::env::var("HEALTHLOCKER_CLASSIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CLASSIFIER_TIMEOUT_SECS);
        Self::new(&base_url, timeout_secs)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLASSIFIER_URL, DEFAULT_CLASSIFIER_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("HealthLocker"));
    }

    #[test]
    fn database_path_under_app_data() {
        let db = database_path();
        assert!(db.starts_with(app_data_dir()));
    }

    #[test]
    fn classifier_config_trims_trailing_slash() {
        let config = ClassifierConfig::new("http://localhost:8000/", 5);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn classifier_config_default_values() {
        let config = ClassifierConfig::default();
        assert_eq!(config.base_url, DEFAULT_CLASSIFIER_URL);
        assert_eq!(
            config.timeout,
            Duration::from_secs(DEFAULT_CLASSIFIER_TIMEOUT_SECS)
        );
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
