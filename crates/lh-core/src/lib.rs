//! Core data for Liahona: verse tables, catalog building, settings, and
//! reference selection.
//!
//! Everything here is synchronous and infallible on the interactive path.
//! The only fallible operation is persisting settings.

/// Book descriptors, languages, and collections.
pub mod book;
/// The filtered, never-empty list of selectable books.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Native deep-link and web URL construction.
pub mod link;
/// Turning gesture measurements into a reference.
pub mod selection;
/// The user settings record and its defaults.
pub mod settings;
/// Settings persistence.
pub mod store;
/// Interface text for status lines and labels.
pub mod strings;
/// Static verse-count tables.
pub mod tables;

/// Re-export book types.
pub use book::{Book, Collection, Language};
/// Re-export catalog type.
pub use catalog::Catalog;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export link type.
pub use link::Links;
/// Re-export selection types.
pub use selection::{GestureReading, Selection, select};
/// Re-export settings types.
pub use settings::{BookFlags, ContentSelection, LanguageFlags, LanguageSet, Settings};
/// Re-export store types.
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
/// Re-export string types.
pub use strings::{Label, StatusKey, UiLanguage};
