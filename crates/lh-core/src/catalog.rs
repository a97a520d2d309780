//! The active, filtered sequence of books eligible for selection.

use crate::book::{Book, Language};
use crate::settings::ContentSelection;
use crate::tables::{BOM_DE, BOM_EN, NT_EN, OT_EN};

/// Ordered, never-empty list of books.
///
/// Every book in a catalog has at least one chapter and every chapter at
/// least one verse, so selection over it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<&'static Book>,
}

impl Catalog {
    /// Build the catalog for a content selection.
    ///
    /// Tables are appended in a fixed order: German Book of Mormon, English
    /// Book of Mormon, Old Testament, New Testament. A selection that
    /// enables nothing usable falls back to [`Catalog::fallback`].
    pub fn build(content: &ContentSelection) -> Self {
        let books = &content.books;
        let langs = &content.languages;

        let mut selected: Vec<&'static Book> = Vec::new();
        if books.bom && langs.de {
            selected.extend(BOM_DE);
        }
        if books.bom && langs.en {
            selected.extend(BOM_EN);
        }
        if books.ot && langs.en {
            selected.extend(OT_EN);
        }
        if books.nt && langs.en {
            selected.extend(NT_EN);
        }

        if selected.is_empty() {
            tracing::debug!("content selection matched no books, using fallback catalog");
            return Self::fallback();
        }
        Self { books: selected }
    }

    /// The guaranteed non-empty default: the German Book of Mormon.
    pub fn fallback() -> Self {
        Self {
            books: BOM_DE.iter().collect(),
        }
    }

    /// A catalog over arbitrary books.
    ///
    /// Returns `None` if the list is empty or any book has no chapters or an
    /// empty chapter.
    pub fn from_books(books: Vec<&'static Book>) -> Option<Self> {
        let usable = !books.is_empty()
            && books
                .iter()
                .all(|b| b.chapter_count() > 0 && b.verses.iter().all(|&v| v > 0));
        usable.then_some(Self { books })
    }

    /// Books in order.
    pub fn books(&self) -> &[&'static Book] {
        &self.books
    }

    /// Number of books (always at least one).
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// The book at an index.
    pub fn get(&self, index: usize) -> Option<&'static Book> {
        self.books.get(index).copied()
    }

    /// Find a book by its short code, preferring `language` when given.
    pub fn find(&self, code: &str, language: Option<Language>) -> Option<&'static Book> {
        let mut matches = self.books.iter().copied().filter(|b| b.code == code);
        match language {
            Some(lang) => matches.find(|b| b.language == lang),
            None => matches.next(),
        }
    }
}

/// Look a book up across every table regardless of the content selection.
pub fn lookup(code: &str, language: Language) -> Option<&'static Book> {
    BOM_DE
        .iter()
        .chain(BOM_EN)
        .chain(OT_EN)
        .chain(NT_EN)
        .find(|b| b.code == code && b.language == language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{BookFlags, LanguageFlags, LanguageSet};

    fn content(bom: bool, ot: bool, nt: bool, de: bool, en: bool) -> ContentSelection {
        ContentSelection {
            books: BookFlags { bom, ot, nt },
            languages: LanguageFlags { de, en },
        }
    }

    #[test]
    fn everything_enabled_in_table_order() {
        let catalog = Catalog::build(&LanguageSet::All.default_content());
        assert_eq!(catalog.len(), 15 + 15 + 39 + 27);
        assert_eq!(catalog.books()[0].language, Language::German);
        assert_eq!(catalog.books()[15].language, Language::English);
        assert_eq!(catalog.books()[30].code, "gen");
        assert_eq!(catalog.books()[69].code, "matt");
    }

    #[test]
    fn empty_selection_falls_back() {
        let catalog = Catalog::build(&content(false, false, false, false, false));
        assert_eq!(catalog, Catalog::fallback());
        assert!(!catalog.is_empty());
        for book in catalog.books() {
            assert!(book.chapter_count() >= 1);
            assert!(book.verses.iter().all(|&v| v >= 1));
        }
    }

    #[test]
    fn bible_without_english_falls_back() {
        let catalog = Catalog::build(&content(false, true, true, true, false));
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn books_without_language_fall_back() {
        let catalog = Catalog::build(&content(true, true, true, false, false));
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn english_new_testament_only() {
        let catalog = Catalog::build(&content(false, false, true, true, true));
        assert_eq!(catalog.len(), 27);
        assert!(catalog.books().iter().all(|b| b.language == Language::English));
    }

    #[test]
    fn rebuild_replaces_rather_than_appends() {
        let first = Catalog::build(&content(true, false, false, true, false));
        let second = Catalog::build(&content(true, false, false, true, false));
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn from_books_rejects_unusable() {
        static EMPTY: Book = Book::new("Empty", "empty", &[], Language::English, None);
        static HOLE: Book = Book::new("Hole", "hole", &[3, 0], Language::English, None);
        assert!(Catalog::from_books(vec![]).is_none());
        assert!(Catalog::from_books(vec![&EMPTY]).is_none());
        assert!(Catalog::from_books(vec![&HOLE]).is_none());
    }

    #[test]
    fn find_by_code_and_language() {
        let catalog = Catalog::build(&LanguageSet::All.default_content());
        let de = catalog.find("alma", Some(Language::German)).unwrap();
        assert_eq!(de.name, "Alma");
        assert_eq!(de.language, Language::German);
        assert_eq!(
            catalog.find("alma", Some(Language::English)).unwrap().language,
            Language::English
        );
        assert!(catalog.find("nope", None).is_none());
    }

    #[test]
    fn lookup_across_tables() {
        assert_eq!(lookup("w-of-m", Language::German).unwrap().name, "Worte Mormons");
        assert!(lookup("gen", Language::German).is_none());
    }
}
