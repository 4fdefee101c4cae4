//! Render and write `.env` and `deploy.sh`.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::RngCore;
use tracing::info;

use crate::app::context::AppContext;
use crate::domain::artifacts::{
    ArtifactContext, ArtifactSet, DEPLOY_SCRIPT, ENV_FILE, RenderSecrets,
};
use crate::domain::secrets::generate_hex_token;
use crate::domain::{AppError, Configuration};
use crate::ports::{ArtifactStore, Environment, Terminal};

/// Where the artifacts were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifacts {
    pub env_file: PathBuf,
    pub deploy_script: PathBuf,
}

/// Render both artifacts from `config` and write them through the artifact store.
///
/// The JWT secret and encryption key are minted here, on every call.
pub fn emit<T, E, S, R>(
    ctx: &mut AppContext<T, E, S, R>,
    config: &Configuration,
    generated_at: DateTime<Utc>,
) -> Result<EmittedArtifacts, AppError>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    ctx.prompter_mut().say("\n📝 Generating configuration files...")?;

    let password_length = ctx.settings().secrets.password_length;
    let key_bytes = ctx.settings().secrets.encryption_key_bytes;
    let secrets = RenderSecrets {
        jwt_secret: ctx.generator_mut().generate_password(password_length),
        encryption_key: generate_hex_token(key_bytes),
    };

    let context = ArtifactContext::build(config, &secrets, &ctx.settings().runtime, generated_at)?;
    let rendered = ArtifactSet::render(ctx.renderer(), &context)?;

    let env_file = ctx.store_mut().write_artifact(ENV_FILE, &rendered.env_file, false)?;
    let deploy_script = ctx.store_mut().write_artifact(DEPLOY_SCRIPT, &rendered.deploy_script, true)?;
    info!(env_file = %env_file.display(), deploy_script = %deploy_script.display(), "artifacts written");

    let prompter = ctx.prompter_mut();
    prompter.say("✅ Generated files:")?;
    prompter.say(&format!("  - {} (environment variables)", ENV_FILE))?;
    prompter.say(&format!("  - {} (deployment script)", DEPLOY_SCRIPT))?;

    Ok(EmittedArtifacts { env_file, deploy_script })
}
