//! Book descriptors: name, short code, verse counts, language, collection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content language of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// German (`de`).
    #[serde(rename = "de")]
    German,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Three-letter code used by the web study pages (`deu`, `eng`).
    pub fn iso639_3(self) -> &'static str {
        match self {
            Self::German => "deu",
            Self::English => "eng",
        }
    }

    /// Two-letter code used in settings (`de`, `en`).
    pub fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Scripture collection a book belongs to, as used in link paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    /// `bofm`
    BookOfMormon,
    /// `ot`
    OldTestament,
    /// `nt`
    NewTestament,
}

impl Collection {
    /// Path segment for this collection.
    pub fn slug(self) -> &'static str {
        match self {
            Self::BookOfMormon => "bofm",
            Self::OldTestament => "ot",
            Self::NewTestament => "nt",
        }
    }
}

/// An immutable book descriptor from one of the static tables.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Display name in the book's own language.
    pub name: &'static str,
    /// Short code used in link paths (e.g. `1-ne`, `matt`).
    pub code: &'static str,
    /// Verse count of every chapter, in order.
    pub verses: &'static [u16],
    /// Language, fixed by table membership.
    pub language: Language,
    /// Collection tag; untagged books link under `bofm`.
    pub collection: Option<Collection>,
}

impl Book {
    /// Build a descriptor. Used by the static tables.
    pub const fn new(
        name: &'static str,
        code: &'static str,
        verses: &'static [u16],
        language: Language,
        collection: Option<Collection>,
    ) -> Self {
        Self {
            name,
            code,
            verses,
            language,
            collection,
        }
    }

    /// Number of chapters.
    pub fn chapter_count(&self) -> usize {
        self.verses.len()
    }

    /// Verse count of the chapter at a 0-based index, if it exists.
    pub fn verses_in(&self, chapter_index: usize) -> Option<u16> {
        self.verses.get(chapter_index).copied()
    }

    /// The collection slug used when building links.
    pub fn collection_slug(&self) -> &'static str {
        self.collection.unwrap_or(Collection::BookOfMormon).slug()
    }
}
