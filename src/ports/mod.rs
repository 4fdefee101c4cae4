mod artifact_store;
mod environment;
mod terminal;

pub use artifact_store::ArtifactStore;
pub use environment::Environment;
pub use terminal::{Keystroke, Terminal};
