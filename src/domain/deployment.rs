//! Resolved deployment configuration accumulated across the setup stages.

use std::collections::BTreeMap;
use std::fmt;

use super::AppError;

/// A setting resolved by one of the prompting stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Setting {
    DbPassword,
    AdminUser,
    AdminPassword,
    AppName,
    AppUrl,
}

impl Setting {
    pub const ALL: [Setting; 5] = [
        Setting::DbPassword,
        Setting::AdminUser,
        Setting::AdminPassword,
        Setting::AppName,
        Setting::AppUrl,
    ];

    /// Environment-file key under which the setting is primarily written.
    pub fn key(&self) -> &'static str {
        match self {
            Setting::DbPassword => "DB_PASSWORD",
            Setting::AdminUser => "N8N_BASIC_AUTH_USER",
            Setting::AdminPassword => "N8N_BASIC_AUTH_PASSWORD",
            Setting::AppName => "APP_NAME",
            Setting::AppUrl => "ZEABUR_WEB_URL",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Setting::DbPassword | Setting::AdminPassword)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mapping from setting to resolved value.
///
/// Stages merge their outputs in; the file emitter only reads.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: BTreeMap<Setting, String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, setting: Setting, value: impl Into<String>) {
        self.values.insert(setting, value.into());
    }

    /// Merge every value of `other` into this configuration.
    pub fn merge(&mut self, other: Configuration) {
        self.values.extend(other.values);
    }

    pub fn get(&self, setting: Setting) -> Option<&str> {
        self.values.get(&setting).map(String::as_str)
    }

    /// Value of a setting that must already be resolved.
    pub fn require(&self, setting: Setting) -> Result<&str, AppError> {
        self.get(setting).ok_or(AppError::MissingSetting(setting))
    }

    pub fn contains(&self, setting: Setting) -> bool {
        self.values.contains_key(&setting)
    }

    pub fn is_complete(&self) -> bool {
        Setting::ALL.iter().all(|setting| self.contains(*setting))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Setting, &str)> {
        self.values.iter().map(|(setting, value)| (*setting, value.as_str()))
    }
}

// Secrets stay out of debug output and logs.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (setting, value) in self.iter() {
            if setting.is_secret() {
                map.entry(&setting.key(), &format_args!("<{} chars>", value.chars().count()));
            } else {
                map.entry(&setting.key(), &value);
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlays_values() {
        let mut config = Configuration::new();
        config.set(Setting::AdminUser, "admin");

        let mut stage = Configuration::new();
        stage.set(Setting::AdminUser, "ops");
        stage.set(Setting::AdminPassword, "Abcdef12");
        config.merge(stage);

        assert_eq!(config.get(Setting::AdminUser), Some("ops"));
        assert_eq!(config.get(Setting::AdminPassword), Some("Abcdef12"));
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn require_reports_missing_setting() {
        let config = Configuration::new();
        let err = config.require(Setting::AppUrl).unwrap_err();
        assert!(matches!(err, AppError::MissingSetting(Setting::AppUrl)));
    }

    #[test]
    fn complete_only_when_all_settings_present() {
        let mut config = Configuration::new();
        for setting in &Setting::ALL[..4] {
            config.set(*setting, "x");
        }
        assert!(!config.is_complete());
        config.set(Setting::AppUrl, "https://x.zeabur.app");
        assert!(config.is_complete());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut config = Configuration::new();
        config.set(Setting::DbPassword, "hunter2hunter2");
        config.set(Setting::AdminUser, "ops");

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<14 chars>"));
        assert!(rendered.contains("ops"));
    }
}
