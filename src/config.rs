//! Configuration for venv
//!
//! There is no config file. Settings come from:
//! 1. CLI flags (handled by the binary)
//! 2. Environment variables (`VENV_*`)
//! 3. Built-in defaults

/// Environment variable that turns on debug diagnostics when non-empty
pub const DEBUG_ENV: &str = "VENV_DEBUG";

/// Runtime configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit debug-level diagnostics to stderr
    pub debug: bool,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (`VENV_*` prefix)
    pub fn with_env_overrides(self) -> Self {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_env_lookup(mut self, get_env: impl Fn(&str) -> Option<String>) -> Self {
        // VENV_DEBUG: any non-empty value
        if let Some(val) = get_env(DEBUG_ENV) {
            self.debug = !val.is_empty();
        }

        self
    }
}
