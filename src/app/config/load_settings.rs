use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, ProvisionSettings, SETTINGS_FILE};

/// Load provisioning settings.
///
/// An explicit path must exist. Without one, `n8n-provision.toml` in the
/// output directory is used when present, otherwise the defaults.
pub fn load_settings(
    explicit: Option<&Path>,
    output_dir: &Path,
) -> Result<ProvisionSettings, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = output_dir.join(SETTINGS_FILE);
            if !candidate.is_file() {
                debug!("no settings file, using defaults");
                return Ok(ProvisionSettings::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading settings");
    let content = std::fs::read_to_string(&path)?;
    ProvisionSettings::from_toml_str(&content).map_err(|err| match err {
        AppError::TomlParseError(parse) => {
            AppError::config_error(format!("Invalid {}: {}", path.display(), parse))
        }
        other => other,
    })
}
