//! Configuration module for Mojo.

use serde::Deserialize;
use std::path::Path;

use crate::{MojoError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins (empty = same-origin only).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/mojo.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Mail delivery configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Transactional email API endpoint.
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    /// API key for the mail provider.
    #[serde(default)]
    pub api_key: String,
    /// Sender address for registration mails.
    #[serde(default = "default_register_from")]
    pub register_from: String,
    /// Sender address for message notifications.
    #[serde(default = "default_notify_from")]
    pub notify_from: String,
    /// Sender address for contact form forwards.
    #[serde(default = "default_contact_from")]
    pub contact_from: String,
    /// Inbox that receives contact form submissions.
    #[serde(default = "default_contact_inbox")]
    pub contact_inbox: String,
}

fn default_mail_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_register_from() -> String {
    "Mojo <noreply@mojo.spot>".to_string()
}

fn default_notify_from() -> String {
    "Mojo <hello@mojo.spot>".to_string()
}

fn default_contact_from() -> String {
    "Mojo Contact <hello@mojo.spot>".to_string()
}

fn default_contact_inbox() -> String {
    "hello@mojo.spot".to_string()
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: default_mail_api_url(),
            api_key: String::new(),
            register_from: default_register_from(),
            notify_from: default_notify_from(),
            contact_from: default_contact_from(),
            contact_inbox: default_contact_inbox(),
        }
    }
}

/// Site URLs used in mails and redirects.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL for confirmation links (token is appended as a query parameter).
    #[serde(default = "default_confirm_url")]
    pub confirm_url: String,
    /// Page shown after a successful confirmation.
    #[serde(default = "default_confirm_page")]
    pub confirm_page: String,
    /// Page shown for an invalid or expired confirmation link.
    #[serde(default = "default_invalid_page")]
    pub invalid_page: String,
}

fn default_confirm_url() -> String {
    "https://mojo.spot/api/confirm".to_string()
}

fn default_confirm_page() -> String {
    "/confirm.html".to_string()
}

fn default_invalid_page() -> String {
    "/invalid.html".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            confirm_url: default_confirm_url(),
            confirm_page: default_confirm_page(),
            invalid_page: default_invalid_page(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/mojo.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Mail delivery settings.
    #[serde(default)]
    pub mail: MailConfig,
    /// Site URL settings.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MojoError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "data/mojo.db");
        assert_eq!(config.mail.api_url, "https://api.resend.com/emails");
        assert_eq!(config.site.invalid_page, "/invalid.html");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
port = 3000

[mail]
api_key = "re_test_key"
contact_inbox = "team@example.com"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        // Unspecified fields fall back to defaults
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.mail.api_key, "re_test_key");
        assert_eq!(config.mail.contact_inbox, "team@example.com");
        assert_eq!(config.database.path, "data/mojo.db");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("does/not/exist.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "this is not toml [[[").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(MojoError::Config(_))));
    }
}
