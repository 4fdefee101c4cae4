//! n8n-provision: interactive credential provisioning for n8n on Zeabur.
//!
//! Asks for a database password strategy, admin credentials, and an app name,
//! then writes `.env` and an executable `deploy.sh` that pushes the settings
//! with the Zeabur CLI.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{EmittedArtifacts, ProvisionOptions, ProvisionOutcome, provision};
pub use domain::{AppError, Configuration, Setting};
