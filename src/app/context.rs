use rand::RngCore;
use rand::rngs::ThreadRng;

use crate::adapters::MinijinjaTemplateRenderer;
use crate::app::prompter::Prompter;
use crate::domain::ProvisionSettings;
use crate::domain::secrets::SecretGenerator;
use crate::ports::{ArtifactStore, Environment, Terminal};

/// Application context holding dependencies for a provisioning run.
pub struct AppContext<T, E, S, R = ThreadRng>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    prompter: Prompter<T>,
    environment: E,
    store: S,
    generator: SecretGenerator<R>,
    renderer: MinijinjaTemplateRenderer,
    settings: ProvisionSettings,
}

impl<T, E, S, R> AppContext<T, E, S, R>
where
    T: Terminal,
    E: Environment,
    S: ArtifactStore,
    R: RngCore,
{
    /// Create a new application context.
    pub fn new(
        terminal: T,
        environment: E,
        store: S,
        generator: SecretGenerator<R>,
        settings: ProvisionSettings,
    ) -> Self {
        Self {
            prompter: Prompter::new(terminal),
            environment,
            store,
            generator,
            renderer: MinijinjaTemplateRenderer::new(),
            settings,
        }
    }

    pub fn prompter(&self) -> &Prompter<T> {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut Prompter<T> {
        &mut self.prompter
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn generator_mut(&mut self) -> &mut SecretGenerator<R> {
        &mut self.generator
    }

    pub fn renderer(&self) -> &MinijinjaTemplateRenderer {
        &self.renderer
    }

    pub fn settings(&self) -> &ProvisionSettings {
        &self.settings
    }
}
