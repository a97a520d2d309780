//! Settings persistence behind a narrow load/save contract.
//!
//! Settings live as JSON in the platform config directory:
//! - Linux: `~/.config/liahona/settings.json`
//! - macOS: `~/Library/Application Support/org.liahona.Liahona/settings.json`
//! - Windows: `%APPDATA%\liahona\Liahona\config\settings.json`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{CoreError, CoreResult};
use crate::settings::{LanguageSet, Settings};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "liahona";
const APP_NAME: &str = "Liahona";
const SETTINGS_FILENAME: &str = "settings.json";

/// Load/save contract for the settings record.
///
/// `load` never fails: missing or malformed data yields defaults.
/// `save` is best-effort; callers report the error and carry on.
pub trait SettingsStore {
    /// Load settings, substituting defaults for anything unusable.
    fn load(&self) -> Settings;

    /// Persist settings.
    fn save(&mut self, settings: &Settings) -> CoreResult<()>;
}

/// Default location of the settings file, if the platform has one.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Settings stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    language_set: LanguageSet,
}

impl JsonFileStore {
    /// A store at an explicit path.
    pub fn new(path: impl Into<PathBuf>, language_set: LanguageSet) -> Self {
        Self {
            path: path.into(),
            language_set,
        }
    }

    /// A store at the platform default path.
    pub fn at_default_path(language_set: LanguageSet) -> CoreResult<Self> {
        let path = default_settings_path().ok_or(CoreError::NoConfigDir)?;
        Ok(Self::new(path, language_set))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Settings {
        let defaults = Settings::defaults(self.language_set);
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                tracing::debug!(path = %self.path.display(), "loaded settings");
                Settings::from_json(&content, defaults)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                defaults
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read settings, using defaults");
                defaults
            }
        }
    }

    fn save(&mut self, settings: &Settings) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content).map_err(|source| CoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// In-memory store holding the raw stored text, for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Raw stored JSON, if anything was saved.
    pub raw: Option<String>,
    /// Language set used for defaults.
    pub language_set: LanguageSet,
    /// When set, every save fails.
    pub fail_saves: bool,
}

impl MemoryStore {
    /// A store pre-filled with raw text.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Settings {
        let defaults = Settings::defaults(self.language_set);
        self.raw
            .as_deref()
            .map_or(defaults, |raw| Settings::from_json(raw, defaults))
    }

    fn save(&mut self, settings: &Settings) -> CoreResult<()> {
        if self.fail_saves {
            return Err(CoreError::Io {
                path: PathBuf::from("<memory>"),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "saves disabled"),
            });
        }
        self.raw = Some(serde_json::to_string(settings)?);
        Ok(())
    }
}
