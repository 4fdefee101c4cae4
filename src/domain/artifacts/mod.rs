//! Environment-file and deployment-script rendering.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::app_url::with_trailing_slash;
use super::deployment::{Configuration, Setting};
use super::settings::RuntimeSettings;
use super::AppError;

/// Environment file written next to the deployment script.
pub const ENV_FILE: &str = ".env";
/// Executable script that pushes settings to Zeabur and deploys.
pub const DEPLOY_SCRIPT: &str = "deploy.sh";

pub const ENV_TEMPLATE: &str = include_str!("templates/env.j2");
pub const DEPLOY_TEMPLATE: &str = include_str!("templates/deploy.sh.j2");

/// Trait for rendering the embedded artifact templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render the named template with the given context.
    fn render(&self, template_name: &str, context: &ArtifactContext) -> Result<String, AppError>;
}

/// Secrets minted at render time, independent of anything the operator chose.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderSecrets {
    pub jwt_secret: String,
    pub encryption_key: String,
}

impl std::fmt::Debug for RenderSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderSecrets")
            .field("jwt_secret", &"<redacted>")
            .field("encryption_key", &"<redacted>")
            .finish()
    }
}

/// Values available to both templates.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactContext {
    pub generated_at: String,
    pub db_password: String,
    pub admin_user: String,
    pub admin_password: String,
    pub app_name: String,
    pub app_url: String,
    pub public_url: String,
    pub jwt_secret: String,
    pub encryption_key: String,
    pub timezone: String,
    pub executions_process: String,
    pub metrics: bool,
    pub log_level: String,
    pub env_file: &'static str,
}

impl ArtifactContext {
    pub fn build(
        config: &Configuration,
        secrets: &RenderSecrets,
        runtime: &RuntimeSettings,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let app_url = config.require(Setting::AppUrl)?.to_string();
        Ok(Self {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            db_password: config.require(Setting::DbPassword)?.to_string(),
            admin_user: config.require(Setting::AdminUser)?.to_string(),
            admin_password: config.require(Setting::AdminPassword)?.to_string(),
            app_name: config.require(Setting::AppName)?.to_string(),
            public_url: with_trailing_slash(&app_url),
            app_url,
            jwt_secret: secrets.jwt_secret.clone(),
            encryption_key: secrets.encryption_key.clone(),
            timezone: runtime.timezone.clone(),
            executions_process: runtime.executions_process.clone(),
            metrics: runtime.metrics,
            log_level: runtime.log_level.clone(),
            env_file: ENV_FILE,
        })
    }
}

/// Rendered text of both artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub env_file: String,
    pub deploy_script: String,
}

impl ArtifactSet {
    pub fn render<T: TemplateRenderer>(
        renderer: &T,
        context: &ArtifactContext,
    ) -> Result<Self, AppError> {
        Ok(Self {
            env_file: renderer.render(ENV_FILE, context)?,
            deploy_script: renderer.render(DEPLOY_SCRIPT, context)?,
        })
    }
}

/// Single-quote a value for POSIX shells, escaping embedded quotes as `'\''`.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
