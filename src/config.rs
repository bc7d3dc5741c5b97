use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "sensor-dashboard";
const CONFIG_FILE: &str = "dashboard_config.json";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_poll_interval() -> u64 {
    5
}

fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the hand-edited config file, falling back to defaults when it is
/// missing or malformed.
pub fn load_config() -> AppConfig {
    if let Some(config_path) = get_config_path() {
        if let Ok(contents) = fs::read_to_string(config_path) {
            match serde_json::from_str::<AppConfig>(&contents) {
                Ok(config) => return config,
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed config file");
                }
            }
        }
    }
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base_url":"http://10.0.0.2:9000","poll_interval_secs":30}"#)
                .unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000");
        assert_eq!(config.poll_interval_secs, 30);
    }
}
