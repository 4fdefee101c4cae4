//! Test doubles for driving the provisioning flow in memory.

use std::collections::HashMap;
use std::io::Cursor;

use rand::rngs::StdRng;

use crate::adapters::{MemoryArtifactStore, StreamTerminal};
use crate::app::AppContext;
use crate::domain::ProvisionSettings;
use crate::domain::secrets::SecretGenerator;

/// Seed used by scripted contexts so generated passwords are reproducible.
pub const TEST_SEED: u64 = 0x5eed;

pub type ScriptedTerminal = StreamTerminal<Cursor<Vec<u8>>, Vec<u8>>;

pub type ScriptedContext =
    AppContext<ScriptedTerminal, HashMap<String, String>, MemoryArtifactStore, StdRng>;

/// Context answering prompts from `script`, with an in-memory artifact store.
pub fn scripted_context(script: &str, env: HashMap<String, String>) -> ScriptedContext {
    scripted_context_with_store(script, env, MemoryArtifactStore::new())
}

/// Like [`scripted_context`], writing into a caller-held store.
pub fn scripted_context_with_store(
    script: &str,
    env: HashMap<String, String>,
    store: MemoryArtifactStore,
) -> ScriptedContext {
    AppContext::new(
        StreamTerminal::scripted(script),
        env,
        store,
        SecretGenerator::seeded(TEST_SEED),
        ProvisionSettings::default(),
    )
}
