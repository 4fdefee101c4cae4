mod app_url;
pub mod artifacts;
mod deployment;
pub mod error;
pub mod secrets;
pub mod settings;
mod strategy;
pub mod validation;

pub use app_url::{derive_app_url, with_trailing_slash};
pub use deployment::{Configuration, Setting};
pub use error::AppError;
pub use settings::{ProvisionSettings, SETTINGS_FILE};
pub use strategy::{DbPasswordStrategy, StrategyChoice};
