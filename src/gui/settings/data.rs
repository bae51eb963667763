use std::time::Duration;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    api::DEFAULT_API_URL,
    core::http::DEFAULT_TIMEOUT_SECS,
};

pub const SETTINGS_FILE: &str = "settings.json";
pub const API_URL_ENV: &str = "TALENTMATCH_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_url: String,
    pub dark_mode: bool,
    pub request_timeout_secs: u64,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dark_mode: false,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SettingsData {
    /// Environment override first, then the saved value, then the loopback default.
    pub fn resolved_api_url(&self, env_override: Option<&str>) -> String {
        [env_override, Some(self.api_url.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_resolution_order() {
        let mut settings = SettingsData::default();
        assert_eq!(settings.resolved_api_url(None), "http://localhost:8000");

        settings.api_url = "http://recruiting.internal:9000".to_string();
        assert_eq!(settings.resolved_api_url(None), "http://recruiting.internal:9000");
        assert_eq!(
            settings.resolved_api_url(Some("http://staging:8000")),
            "http://staging:8000"
        );

        // Blank values do not count as set.
        assert_eq!(settings.resolved_api_url(Some("  ")), "http://recruiting.internal:9000");
        settings.api_url.clear();
        assert_eq!(settings.resolved_api_url(None), "http://localhost:8000");
    }

    #[test]
    fn test_partial_settings_file_uses_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{ "dark_mode": true }"#).unwrap();
        assert!(settings.dark_mode);
        assert_eq!(settings.api_url, DEFAULT_API_URL);
        assert_eq!(settings.request_timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let settings = SettingsData { request_timeout_secs: 0, ..Default::default() };
        assert_eq!(settings.request_timeout(), Duration::from_secs(1));
    }
}
