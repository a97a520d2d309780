//! User settings: UI language and the content selection.
//!
//! Stored settings are merged over built-in defaults flag by flag, so a file
//! written by an older build (or edited by hand) only overrides the keys it
//! actually contains.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::strings::UiLanguage;

/// Environment variable hosts read to pick the [`LanguageSet`].
pub const LANGUAGE_SET_ENV: &str = "LIAHONA_LANGUAGE_SET";

/// Which languages a build ships by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageSet {
    /// German Book of Mormon only.
    DeOnly,
    /// English scriptures only.
    EnOnly,
    /// Everything.
    #[default]
    All,
}

impl LanguageSet {
    /// Read the set from [`LANGUAGE_SET_ENV`], falling back to [`LanguageSet::All`].
    pub fn from_env() -> Self {
        std::env::var(LANGUAGE_SET_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// The content selection a fresh install starts with.
    pub fn default_content(self) -> ContentSelection {
        match self {
            Self::DeOnly => ContentSelection {
                books: BookFlags {
                    bom: true,
                    ot: false,
                    nt: false,
                },
                languages: LanguageFlags {
                    de: true,
                    en: false,
                },
            },
            Self::EnOnly => ContentSelection {
                books: BookFlags::all(),
                languages: LanguageFlags {
                    de: false,
                    en: true,
                },
            },
            Self::All => ContentSelection {
                books: BookFlags::all(),
                languages: LanguageFlags { de: true, en: true },
            },
        }
    }
}

impl FromStr for LanguageSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "de-only" | "de" => Ok(Self::DeOnly),
            "en-only" | "en" => Ok(Self::EnOnly),
            "all" => Ok(Self::All),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Which book kinds are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFlags {
    /// Book of Mormon.
    pub bom: bool,
    /// Old Testament.
    pub ot: bool,
    /// New Testament.
    pub nt: bool,
}

impl BookFlags {
    fn all() -> Self {
        Self {
            bom: true,
            ot: true,
            nt: true,
        }
    }
}

/// Which content languages are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFlags {
    /// German.
    pub de: bool,
    /// English.
    pub en: bool,
}

/// Boolean flags over book kinds × languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSelection {
    /// Enabled book kinds.
    pub books: BookFlags,
    /// Enabled languages.
    pub languages: LanguageFlags,
}

impl ContentSelection {
    /// Set a flag by its short name (`bom`, `ot`, `nt`, `de`, `en`).
    pub fn set_flag(&mut self, name: &str, value: bool) -> Result<(), CoreError> {
        let slot = match name.trim().to_lowercase().as_str() {
            "bom" => &mut self.books.bom,
            "ot" => &mut self.books.ot,
            "nt" => &mut self.books.nt,
            "de" => &mut self.languages.de,
            "en" => &mut self.languages.en,
            other => return Err(CoreError::UnknownFlag(other.to_string())),
        };
        *slot = value;
        Ok(())
    }
}

/// The persisted settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Language of the interface text.
    pub ui_language: UiLanguage,
    /// Enabled content.
    pub content: ContentSelection,
}

impl Settings {
    /// Built-in defaults for a language set.
    pub fn defaults(set: LanguageSet) -> Self {
        Self {
            ui_language: UiLanguage::default(),
            content: set.default_content(),
        }
    }

    /// Parse stored JSON, merging every present key over `defaults`.
    ///
    /// Never fails: each key is read on its own, so a missing or mistyped
    /// value only falls back for that key. Unparseable input yields
    /// `defaults` unchanged.
    pub fn from_json(json: &str, defaults: Settings) -> Self {
        let stored = match serde_json::from_str::<Value>(json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "stored settings unreadable, using defaults");
                return defaults;
            }
        };

        let ui_language = stored
            .get("ui_language")
            .and_then(Value::as_str)
            .and_then(|code| code.parse().ok())
            .unwrap_or(defaults.ui_language);

        let content = stored.get("content");
        let books = content.and_then(|c| c.get("books"));
        let languages = content.and_then(|c| c.get("languages"));
        let base = defaults.content;

        Self {
            ui_language,
            content: ContentSelection {
                books: BookFlags {
                    bom: flag(books, "bom", base.books.bom),
                    ot: flag(books, "ot", base.books.ot),
                    nt: flag(books, "nt", base.books.nt),
                },
                languages: LanguageFlags {
                    de: flag(languages, "de", base.languages.de),
                    en: flag(languages, "en", base.languages.en),
                },
            },
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults(LanguageSet::default())
    }
}

fn flag(section: Option<&Value>, key: &str, fallback: bool) -> bool {
    section
        .and_then(|s| s.get(key))
        .and_then(Value::as_bool)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_set_defaults() {
        let de = LanguageSet::DeOnly.default_content();
        assert!(de.books.bom && !de.books.ot && !de.books.nt);
        assert!(de.languages.de && !de.languages.en);

        let en = LanguageSet::EnOnly.default_content();
        assert!(en.books.bom && en.books.ot && en.books.nt);
        assert!(!en.languages.de && en.languages.en);

        let all = LanguageSet::All.default_content();
        assert!(all.languages.de && all.languages.en);
    }

    #[test]
    fn language_set_parse() {
        assert_eq!("DE_ONLY".parse::<LanguageSet>().unwrap(), LanguageSet::DeOnly);
        assert_eq!("en-only".parse::<LanguageSet>().unwrap(), LanguageSet::EnOnly);
        assert_eq!("all".parse::<LanguageSet>().unwrap(), LanguageSet::All);
        assert!("klingon".parse::<LanguageSet>().is_err());
    }

    #[test]
    fn default_ui_language_is_german() {
        assert_eq!(Settings::default().ui_language, UiLanguage::De);
    }

    #[test]
    fn empty_object_yields_defaults() {
        let defaults = Settings::defaults(LanguageSet::DeOnly);
        assert_eq!(Settings::from_json("{}", defaults), defaults);
    }

    #[test]
    fn garbage_yields_defaults() {
        let defaults = Settings::defaults(LanguageSet::All);
        assert_eq!(Settings::from_json("not json {", defaults), defaults);
        assert_eq!(Settings::from_json("", defaults), defaults);
        assert_eq!(
            Settings::from_json(r#"{"content":{"books":"yes"}}"#, defaults),
            defaults
        );
    }

    #[test]
    fn partial_flags_merge_over_defaults() {
        let defaults = Settings::defaults(LanguageSet::All);
        let json = r#"{"ui_language":"en","content":{"books":{"ot":false}}}"#;
        let merged = Settings::from_json(json, defaults);
        assert_eq!(merged.ui_language, UiLanguage::En);
        assert!(merged.content.books.bom);
        assert!(!merged.content.books.ot);
        assert!(merged.content.books.nt);
        assert_eq!(merged.content.languages, defaults.content.languages);
    }

    #[test]
    fn mistyped_key_keeps_its_valid_neighbours() {
        let defaults = Settings::defaults(LanguageSet::All);

        let json = r#"{"ui_language":"en","content":{"books":{"bom":false,"ot":"x"}}}"#;
        let merged = Settings::from_json(json, defaults);
        assert_eq!(merged.ui_language, UiLanguage::En);
        assert!(!merged.content.books.bom);
        assert!(merged.content.books.ot);
        assert!(merged.content.books.nt);

        let json = r#"{"ui_language":5,"content":{"languages":{"de":false}}}"#;
        let merged = Settings::from_json(json, defaults);
        assert_eq!(merged.ui_language, UiLanguage::De);
        assert!(!merged.content.languages.de);
        assert!(merged.content.languages.en);
        assert_eq!(merged.content.books, defaults.content.books);
    }

    #[test]
    fn unknown_ui_language_falls_back() {
        let defaults = Settings::defaults(LanguageSet::All);
        let merged = Settings::from_json(r#"{"ui_language":"fr"}"#, defaults);
        assert_eq!(merged.ui_language, UiLanguage::De);
    }

    #[test]
    fn serialized_settings_read_back() {
        let mut settings = Settings::defaults(LanguageSet::EnOnly);
        settings.ui_language = UiLanguage::En;
        settings.content.books.nt = false;
        let json = serde_json::to_string(&settings).unwrap();
        let back = Settings::from_json(&json, Settings::defaults(LanguageSet::All));
        assert_eq!(back, settings);
    }

    #[test]
    fn set_flag_by_name() {
        let mut content = LanguageSet::All.default_content();
        content.set_flag("OT", false).unwrap();
        content.set_flag("de", false).unwrap();
        assert!(!content.books.ot);
        assert!(!content.languages.de);
        assert!(matches!(
            content.set_flag("pgp", true),
            Err(CoreError::UnknownFlag(_))
        ));
    }
}
