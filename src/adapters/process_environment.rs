use crate::ports::Environment;

/// Reads variables from the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvVarGuard {
        key: &'static str,
        original: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let original = std::env::var_os(key);
            unsafe { std::env::set_var(key, value) };
            Self { key, original }
        }

        fn remove(key: &'static str) -> Self {
            let original = std::env::var_os(key);
            unsafe { std::env::remove_var(key) };
            Self { key, original }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            if let Some(original) = self.original.as_ref() {
                unsafe { std::env::set_var(self.key, original) };
            } else {
                unsafe { std::env::remove_var(self.key) };
            }
        }
    }

    #[test]
    #[serial]
    fn reads_database_password_from_process() {
        let _guard = EnvVarGuard::set("DB_PASSWORD", "Existing1Aa");
        assert_eq!(ProcessEnvironment.var("DB_PASSWORD").as_deref(), Some("Existing1Aa"));
    }

    #[test]
    #[serial]
    fn empty_variable_counts_as_unset() {
        let _guard = EnvVarGuard::set("DB_PASSWORD", "");
        assert_eq!(ProcessEnvironment.var("DB_PASSWORD"), None);
    }

    #[test]
    #[serial]
    fn missing_variable_is_none() {
        let _guard = EnvVarGuard::remove("DB_PASSWORD");
        assert_eq!(ProcessEnvironment.var("DB_PASSWORD"), None);
    }
}
