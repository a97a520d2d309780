//! Interface strings for the two supported UI languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Language of the interface text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiLanguage {
    /// German.
    #[default]
    #[serde(rename = "de")]
    De,
    /// English.
    #[serde(rename = "en")]
    En,
}

impl UiLanguage {
    /// Two-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }
}

impl fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UiLanguage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            other => Err(CoreError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Status line shown under the orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKey {
    /// Idle prompt.
    Focus,
    /// Shown while holding and until the result appears.
    Receiving,
    /// Shown briefly after a too-short press.
    HoldLonger,
}

/// Every other label a host draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AppTitle,
    Read,
    Reset,
    SettingsTitle,
    SectionUi,
    SectionContent,
    ContentBooks,
    ContentLanguages,
    BookOfMormon,
    OldTestament,
    NewTestament,
    German,
    English,
    Save,
    Close,
}

/// Text for a status key.
pub fn status_text(lang: UiLanguage, key: StatusKey) -> &'static str {
    match (lang, key) {
        (UiLanguage::De, StatusKey::Focus) => "Fokussieren",
        (UiLanguage::De, StatusKey::Receiving) => "Empfange...",
        (UiLanguage::De, StatusKey::HoldLonger) => "Länger fokussieren",
        (UiLanguage::En, StatusKey::Focus) => "Focus",
        (UiLanguage::En, StatusKey::Receiving) => "Receiving...",
        (UiLanguage::En, StatusKey::HoldLonger) => "Hold longer",
    }
}

/// Text for a label.
pub fn label_text(lang: UiLanguage, label: Label) -> &'static str {
    match lang {
        UiLanguage::De => match label {
            Label::AppTitle => "Liahona",
            Label::Read => "Lesen",
            Label::Reset => "Neue Stelle ziehen",
            Label::SettingsTitle => "Einstellungen",
            Label::SectionUi => "App Sprache",
            Label::SectionContent => "Inhalte wählen",
            Label::ContentBooks => "Bücher",
            Label::ContentLanguages => "Sprachen",
            Label::BookOfMormon => "Buch Mormon",
            Label::OldTestament => "Altes Testament",
            Label::NewTestament => "Neues Testament",
            Label::German => "Deutsch",
            Label::English => "Englisch",
            Label::Save => "Speichern",
            Label::Close => "Schließen",
        },
        UiLanguage::En => match label {
            Label::AppTitle => "Liahona",
            Label::Read => "Read",
            Label::Reset => "Pull new verse",
            Label::SettingsTitle => "Settings",
            Label::SectionUi => "App Language",
            Label::SectionContent => "Select Content",
            Label::ContentBooks => "Books",
            Label::ContentLanguages => "Languages",
            Label::BookOfMormon => "Book of Mormon",
            Label::OldTestament => "Old Testament",
            Label::NewTestament => "New Testament",
            Label::German => "German",
            Label::English => "English",
            Label::Save => "Save",
            Label::Close => "Close",
        },
    }
}
