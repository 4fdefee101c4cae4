//! Provision command: prompt, validate, generate.

mod emit;
mod stages;

use chrono::Utc;
use rand::RngCore;
use tracing::info;

use crate::app::context::AppContext;
use crate::domain::artifacts::{DEPLOY_SCRIPT, ENV_FILE};
use crate::domain::{AppError, Configuration, Setting};
use crate::ports::{ArtifactStore, Environment, Terminal};

pub use emit::EmittedArtifacts;

/// Result of a completed provisioning run.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    pub config: Configuration,
    pub artifacts: EmittedArtifacts,
}

/// Execute the full flow: database password, admin credentials, app
/// configuration, then artifact generation and the closing summary.
pub fn execute<T, E, S, R>(ctx: &mut AppContext<T, E, S, R>) -> Result<ProvisionOutcome, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let prompter = ctx.prompter_mut();
    prompter.say("🚀 n8n Zeabur Deployment Setup")?;
    prompter.say("================================")?;

    let mut config = Configuration::new();
    config.merge(stages::database_password(ctx)?);
    config.merge(stages::admin_credentials(ctx)?);
    config.merge(stages::app_configuration(ctx)?);
    debug_assert!(config.is_complete());

    let artifacts = emit::emit(ctx, &config, Utc::now())?;
    print_summary(ctx, &config)?;

    info!(?config, "provisioning complete");
    Ok(ProvisionOutcome { config, artifacts })
}

fn print_summary<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
    config: &Configuration,
) -> Result<(), AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let prompter = ctx.prompter_mut();
    prompter.say("\n📋 Deployment Summary:")?;
    prompter.say(&format!("- App Name: {}", config.require(Setting::AppName)?))?;
    prompter.say(&format!("- App URL: {}", config.require(Setting::AppUrl)?))?;
    prompter.say(&format!("- Admin User: {}", config.require(Setting::AdminUser)?))?;
    prompter.say(&format!("- Passwords: Stored securely in {} file", ENV_FILE))?;

    prompter.say("\n🚀 Next Steps:")?;
    prompter.say(&format!("1. Run: ./{} (if you have Zeabur CLI installed)", DEPLOY_SCRIPT))?;
    prompter.say("2. Or manually set environment variables in Zeabur dashboard")?;
    prompter.say("3. Push your code and deploy")?;

    prompter.say("\n🔒 Security Reminder:")?;
    prompter.say(&format!("- Keep your {} file secure", ENV_FILE))?;
    prompter.say(&format!("- Add {} to .gitignore", ENV_FILE))?;
    prompter.say("- Use strong passwords")?;
    Ok(())
}
