// Environment-driven application settings
//
// Settings are read once at startup into an immutable value and passed to
// the container. Nothing reads the environment after that.
//
// Environment Variables:
// - TYP_TMPL_APP_NAME (optional): reported name, defaults to "typ-tmpl"
// - TYP_TMPL_USE_MOCK_GREETING (optional): inject MockGreetingService
// - TYP_TMPL_USE_MOCK_STORAGE (optional): inject MemoryStorage
// - TYP_TMPL_DATA_DIR (optional): item directory, defaults to
//   <user config dir>/typ-tmpl/items

use crate::error::{AppError, Result};
use crate::services::FileStorage;
use std::path::PathBuf;

pub const DEFAULT_APP_NAME: &str = "typ-tmpl";

const APP_NAME: &str = "TYP_TMPL_APP_NAME";
const USE_MOCK_GREETING: &str = "TYP_TMPL_USE_MOCK_GREETING";
const USE_MOCK_STORAGE: &str = "TYP_TMPL_USE_MOCK_STORAGE";
const DATA_DIR: &str = "TYP_TMPL_DATA_DIR";

/// Immutable snapshot of application configuration
///
/// Usage:
///     let settings = Settings::load()?;
///     let ctx = AppBuilder::new(settings).build()?;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Public-facing application name reported in outputs and logs
    pub app_name: String,

    /// Resolve GreetingService to the mock provider
    pub use_mock_greeting: bool,

    /// Resolve Storage to the in-memory store
    pub use_mock_storage: bool,

    /// Item directory override for the filesystem store
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            use_mock_greeting: false,
            use_mock_storage: false,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    ///
    /// A `.env` file in the working directory is read first if present;
    /// variables already set in the environment win over it.
    ///
    /// # Errors
    /// - `Config` if a toggle holds something other than a boolean
    pub fn load() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup
    ///
    /// Tests use this to supply variables without touching process state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(name) = lookup(APP_NAME).filter(|n| !n.trim().is_empty()) {
            settings.app_name = name;
        }
        if let Some(value) = lookup(USE_MOCK_GREETING) {
            settings.use_mock_greeting = parse_bool(USE_MOCK_GREETING, &value)?;
        }
        if let Some(value) = lookup(USE_MOCK_STORAGE) {
            settings.use_mock_storage = parse_bool(USE_MOCK_STORAGE, &value)?;
        }
        settings.data_dir = lookup(DATA_DIR)
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        Ok(settings)
    }

    /// Directory the filesystem store should use
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(FileStorage::default_base_dir)
    }

    pub fn with_mock_greeting(mut self, enabled: bool) -> Self {
        self.use_mock_greeting = enabled;
        self
    }

    pub fn with_mock_storage(mut self, enabled: bool) -> Self {
        self.use_mock_storage = enabled;
        self
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
