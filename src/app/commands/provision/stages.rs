//! The three prompting stages, run in order.

use rand::RngCore;
use tracing::{info, warn};

use crate::app::context::AppContext;
use crate::app::prompter::PromptSpec;
use crate::domain::validation::{
    MIN_PASSWORD_LENGTH, confirm_password, validate_app_name, validate_password,
};
use crate::domain::{AppError, Configuration, DbPasswordStrategy, Setting, derive_app_url};
use crate::ports::{ArtifactStore, Environment, Terminal};

/// Database password: generate, type twice, or reuse from the environment.
pub fn database_password<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
) -> Result<Configuration, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let prompter = ctx.prompter_mut();
    prompter.say("\n🔐 PostgreSQL Database Password Setup")?;
    prompter.say("1. Generate random secure password (recommended)")?;
    prompter.say("2. Enter custom password")?;
    prompter.say("3. Use existing environment variable")?;
    let answer = prompter.ask(PromptSpec::new("Choose option (1-3)").default("1"))?;

    let choice = DbPasswordStrategy::choose(&answer);
    let length = ctx.settings().secrets.password_length;
    let password = match choice.strategy {
        DbPasswordStrategy::Generate => {
            let password = ctx.generator_mut().generate_password(length);
            if choice.fallback {
                warn!(answer = %answer, "unrecognised database password option, generating");
                ctx.prompter_mut().say("✅ Using generated password (invalid choice)")?;
            } else {
                ctx.prompter_mut().say("✅ Generated secure password")?;
            }
            password
        }
        DbPasswordStrategy::Manual => {
            let password = confirmed_password(
                ctx,
                "Enter PostgreSQL password",
                "Confirm password",
            )?;
            ctx.prompter_mut().say("✅ Password accepted")?;
            password
        }
        DbPasswordStrategy::ReuseEnvironment => {
            let var_name = ctx.settings().secrets.db_password_env.clone();
            match ctx.environment().var(&var_name) {
                Some(existing) => {
                    if let Err(err) = validate_password(&existing) {
                        warn!(variable = %var_name, reason = %err, "reused password is weak");
                        ctx.prompter_mut()
                            .say(&format!("⚠️  {} does not meet the password rules: {}", var_name, err))?;
                    }
                    ctx.prompter_mut()
                        .say(&format!("✅ Using existing {} from environment", var_name))?;
                    existing
                }
                None => {
                    let password = ctx.generator_mut().generate_password(length);
                    ctx.prompter_mut().say(&format!(
                        "✅ Generated new password ({} not found in environment)",
                        var_name
                    ))?;
                    password
                }
            }
        }
    };

    info!(strategy = ?choice.strategy, fallback = choice.fallback, "database password resolved");
    let mut config = Configuration::new();
    config.set(Setting::DbPassword, password);
    Ok(config)
}

/// Admin username and password.
pub fn admin_credentials<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
) -> Result<Configuration, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let default_user = ctx.settings().admin.default_user.clone();
    let prompter = ctx.prompter_mut();
    prompter.say("\n👤 n8n Admin Credentials Setup")?;
    let user = prompter.ask(PromptSpec::new("Enter n8n admin username").default(&default_user))?;

    let password = confirmed_password(ctx, "Enter n8n admin password", "Confirm n8n password")?;
    ctx.prompter_mut().say("✅ n8n credentials accepted")?;

    info!(user = %user, "admin credentials resolved");
    let mut config = Configuration::new();
    config.set(Setting::AdminUser, user);
    config.set(Setting::AdminPassword, password);
    Ok(config)
}

/// App name and the URL derived from it.
pub fn app_configuration<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
) -> Result<Configuration, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let domain = ctx.settings().app.domain.clone();
    let default_name = ctx.settings().app.default_name.clone();
    let validate = |answer: &str| -> Result<(), String> {
        if answer.is_empty() {
            return Ok(());
        }
        validate_app_name(answer)?;
        derive_app_url(answer, &domain).map(|_| ()).map_err(|err| err.to_string())
    };

    let prompter = ctx.prompter_mut();
    prompter.say("\n🚀 App Configuration")?;
    let name = prompter.ask(
        PromptSpec::new("Enter your Zeabur app name").default(&default_name).validate(&validate),
    )?;
    let url = derive_app_url(&name, &domain)?;
    prompter.say(&format!("✅ App URL will be: {}", url))?;

    info!(app = %name, url = %url, "app configuration resolved");
    let mut config = Configuration::new();
    config.set(Setting::AppName, name);
    config.set(Setting::AppUrl, url);
    Ok(config)
}

/// Ask for a password and its confirmation until both match and pass the rules.
///
/// A mismatch or rule failure discards both entries.
fn confirmed_password<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
    question: &str,
    confirm_question: &str,
) -> Result<String, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    let prompter = ctx.prompter_mut();
    prompter.say(&format!(
        "Use at least {} characters with uppercase, lowercase, and a number.",
        MIN_PASSWORD_LENGTH
    ))?;

    loop {
        let password = prompter.ask(PromptSpec::new(question).masked())?;
        let confirmation = prompter.ask(PromptSpec::new(confirm_question).masked())?;

        if let Err(mismatch) = confirm_password(&password, &confirmation) {
            prompter.complain(&mismatch.to_string())?;
            continue;
        }
        if let Err(err) = validate_password(&password) {
            prompter.complain(&err.to_string())?;
            continue;
        }
        return Ok(password);
    }
}
