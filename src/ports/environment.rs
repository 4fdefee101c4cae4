use std::collections::HashMap;

/// Port for reading process environment variables.
pub trait Environment {
    /// Value of `name`, or `None` when unset or empty.
    fn var(&self, name: &str) -> Option<String>;
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty()).cloned()
    }
}
