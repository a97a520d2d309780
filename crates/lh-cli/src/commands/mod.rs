pub mod books;
pub mod draw;
pub mod link;
pub mod settings;

use std::path::Path;

use lh_core::{JsonFileStore, LanguageSet};
use miette::{IntoDiagnostic, Result};

/// Open the settings store at `path`, or at the platform default.
fn open_store(path: Option<&Path>) -> Result<JsonFileStore> {
    let language_set = LanguageSet::from_env();
    match path {
        Some(path) => Ok(JsonFileStore::new(path, language_set)),
        None => JsonFileStore::at_default_path(language_set).into_diagnostic(),
    }
}
