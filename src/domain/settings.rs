//! Provisioning settings loaded from `n8n-provision.toml`.
//!
//! Every field is optional; an absent file yields the stock Zeabur/n8n defaults.

use serde::Deserialize;

use super::AppError;
use super::app_url::derive_app_url;
use super::secrets::{DEFAULT_PASSWORD_LENGTH, DEFAULT_TOKEN_BYTES};
use super::validation::{MIN_PASSWORD_LENGTH, validate_app_name};

/// Settings file looked up in the output directory when `--config` is absent.
pub const SETTINGS_FILE: &str = "n8n-provision.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProvisionSettings {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub secrets: SecretSettings,
    #[serde(default)]
    pub runtime: RuntimeSettings,
}

/// Hosting app naming.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppSettings {
    /// Hosting provider domain the app name is prefixed to.
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_app_name")]
    pub default_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { domain: default_domain(), default_name: default_app_name() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AdminSettings {
    #[serde(default = "default_admin_user")]
    pub default_user: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self { default_user: default_admin_user() }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SecretSettings {
    /// Length of generated passwords and the JWT secret.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    /// Random bytes behind the hex encryption key.
    #[serde(default = "default_token_bytes")]
    pub encryption_key_bytes: usize,
    /// Environment variable consulted by the reuse strategy.
    #[serde(default = "default_db_password_env")]
    pub db_password_env: String,
}

impl Default for SecretSettings {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            encryption_key_bytes: default_token_bytes(),
            db_password_env: default_db_password_env(),
        }
    }
}

/// Fixed operational values written to the environment file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuntimeSettings {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_executions_process")]
    pub executions_process: String,
    #[serde(default = "default_true")]
    pub metrics: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            executions_process: default_executions_process(),
            metrics: default_true(),
            log_level: default_log_level(),
        }
    }
}

fn default_domain() -> String {
    "zeabur.app".to_string()
}

fn default_app_name() -> String {
    "n8n-app".to_string()
}

fn default_admin_user() -> String {
    "admin".to_string()
}

fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}

fn default_db_password_env() -> String {
    "DB_PASSWORD".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_executions_process() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ProvisionSettings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let settings: ProvisionSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.secrets.password_length < MIN_PASSWORD_LENGTH {
            return Err(AppError::config_error(format!(
                "secrets.password_length must be at least {}, got {}",
                MIN_PASSWORD_LENGTH, self.secrets.password_length
            )));
        }
        if self.secrets.encryption_key_bytes == 0 {
            return Err(AppError::config_error("secrets.encryption_key_bytes must be positive"));
        }
        if self.secrets.db_password_env.trim().is_empty() {
            return Err(AppError::config_error("secrets.db_password_env cannot be empty"));
        }
        let domain = self.app.domain.trim_matches('.');
        if domain.is_empty() || domain.contains('/') || domain.contains(char::is_whitespace) {
            return Err(AppError::config_error(format!(
                "app.domain '{}' is not a valid host name",
                self.app.domain
            )));
        }
        if let Err(reason) = validate_app_name(&self.app.default_name) {
            return Err(AppError::config_error(format!(
                "app.default_name '{}' is invalid: {}",
                self.app.default_name, reason
            )));
        }
        derive_app_url(&self.app.default_name, &self.app.domain).map_err(|err| {
            AppError::config_error(format!("app.default_name is invalid: {}", err))
        })?;
        if self.admin.default_user.is_empty() {
            return Err(AppError::config_error("admin.default_user cannot be empty"));
        }

        // These land unquoted in the environment file.
        for (field, value) in [
            ("admin.default_user", &self.admin.default_user),
            ("runtime.timezone", &self.runtime.timezone),
            ("runtime.executions_process", &self.runtime.executions_process),
            ("runtime.log_level", &self.runtime.log_level),
        ] {
            if value.chars().any(char::is_control) {
                return Err(AppError::config_error(format!(
                    "{} cannot contain control characters",
                    field
                )));
            }
        }
        Ok(())
    }
}
