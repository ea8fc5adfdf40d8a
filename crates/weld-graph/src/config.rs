//! Walk-wide configuration.

/// Settings fixed for the duration of one walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    default_extension: String,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            default_extension: ".js".to_string(),
        }
    }
}

impl WalkConfig {
    /// Configuration with the conventional `.js` default extension.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a custom default extension. A leading dot is
    /// added if missing, so `"txt"` and `".txt"` are equivalent.
    pub fn with_extension(extension: &str) -> Self {
        let default_extension = if extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
        Self { default_extension }
    }

    /// Extension appended to extensionless import targets and entries.
    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }
}
