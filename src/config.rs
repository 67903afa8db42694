// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! The API base URL is derived from the Codespace name the same way the
//! forwarded-port hostname is built (`https://{name}-8000.app.github.dev`).
//! A missing name is not a startup error: the resulting URL is malformed and
//! every view reports the failed fetch through its error state instead.

use std::env;
use std::path::PathBuf;

/// File name of the optional logo inside the static directory.
pub const LOGO_FILE: &str = "octofitapp-small.png";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Codespace / workspace identifier used to build the API host
    pub codespace_name: Option<String>,
    /// Explicit API base URL, overrides the Codespace-derived one
    pub api_url_override: Option<String>,
    /// Server port
    pub port: u16,
    /// Directory holding static assets (logo)
    pub static_dir: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            codespace_name: Some("test-codespace".to_string()),
            api_url_override: None,
            port: 3000,
            static_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port: u16 = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
            })?,
            Err(_) => 3000,
        };

        Ok(Self {
            codespace_name: non_empty_var("CODESPACE_NAME")
                .or_else(|| non_empty_var("REACT_APP_CODESPACE_NAME")),
            api_url_override: non_empty_var("OCTOFIT_API_URL"),
            port,
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        })
    }

    /// Base URL of the fitness REST API, without a trailing slash.
    pub fn api_base_url(&self) -> String {
        if let Some(url) = &self.api_url_override {
            return url.trim_end_matches('/').to_string();
        }

        let name = self.codespace_name.as_deref().unwrap_or_default();
        format!("https://{}-8000.app.github.dev", name)
    }

    /// Path of the logo asset.
    pub fn logo_path(&self) -> PathBuf {
        self.static_dir.join(LOGO_FILE)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("CODESPACE_NAME", "  fuzzy-octo-42 ");
        env::set_var("PORT", "8081");
        env::remove_var("OCTOFIT_API_URL");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.codespace_name.as_deref(), Some("fuzzy-octo-42"));
        assert_eq!(config.port, 8081);
        assert_eq!(
            config.api_base_url(),
            "https://fuzzy-octo-42-8000.app.github.dev"
        );

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));

        env::remove_var("CODESPACE_NAME");
        env::remove_var("PORT");
    }

    #[test]
    fn test_override_wins_and_trailing_slash_is_trimmed() {
        let config = Config {
            api_url_override: Some("http://127.0.0.1:8000/".to_string()),
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_missing_codespace_name_yields_malformed_host() {
        let config = Config {
            codespace_name: None,
            ..Config::default()
        };
        assert_eq!(config.api_base_url(), "https://-8000.app.github.dev");
    }
}
