use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::AppError;
use crate::domain::artifacts::{
    ArtifactContext, DEPLOY_SCRIPT, DEPLOY_TEMPLATE, ENV_FILE, ENV_TEMPLATE, TemplateRenderer,
    shell_quote,
};

/// Artifact renderer using Minijinja over the embedded templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, template_name: &str, context: &ArtifactContext) -> Result<String, AppError> {
        let env = environment()?;
        let template =
            env.get_template(template_name).map_err(|err| template_render_error(template_name, err))?;
        template.render(context).map_err(|err| template_render_error(template_name, err))
    }
}

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>, AppError> {
    ENV.get_or_init(build_environment).as_ref().map_err(|reason| AppError::TemplateRender {
        template: "embedded templates".to_string(),
        reason: reason.clone(),
    })
}

fn build_environment() -> Result<Environment<'static>, String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.add_filter("shell_quote", shell_quote_filter);
    env.add_template(ENV_FILE, ENV_TEMPLATE).map_err(|err| err.to_string())?;
    env.add_template(DEPLOY_SCRIPT, DEPLOY_TEMPLATE).map_err(|err| err.to_string())?;
    Ok(env)
}

fn shell_quote_filter(value: String) -> String {
    shell_quote(&value)
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
