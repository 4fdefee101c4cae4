mod artifact_filesystem;
mod artifact_memory;
mod console_terminal;
mod process_environment;
mod stream_terminal;
mod template;

pub use artifact_filesystem::FilesystemArtifactStore;
pub use artifact_memory::{MemoryArtifactStore, StoredArtifact};
pub use console_terminal::ConsoleTerminal;
pub use process_environment::ProcessEnvironment;
pub use stream_terminal::StreamTerminal;
pub use template::MinijinjaTemplateRenderer;
