//! Reference selection: turns a gesture and a clock reading into a verse.
//!
//! This is an engagement randomizer, not a fair sampler. The only hard
//! guarantee is determinism: identical inputs always give the same verse.
//! The wall-clock reading folded into the seed is what keeps two similar
//! gestures from landing on the same reference.

use std::fmt;

use serde::Serialize;

use crate::book::Book;
use crate::catalog::Catalog;
use crate::link::Links;

/// Multiplier mixing the seed into a chapter index.
const CHAPTER_MIX: u128 = 17;
/// Divisor mixing the seed into a verse index.
const VERSE_MIX: u64 = 7;

/// Measurements a qualifying gesture hands to the selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureReading {
    /// Hold duration in milliseconds.
    pub duration: f64,
    /// Accumulated pointer travel in pixels.
    pub path_distance: f64,
    /// Clock reading (milliseconds) at evaluation time.
    pub now: f64,
}

impl GestureReading {
    /// `floor(duration + path_distance + now)`; negative or non-finite sums give 0.
    pub fn seed(&self) -> u64 {
        (self.duration + self.path_distance + self.now).floor() as u64
    }
}

/// A concrete (book, chapter, verse) result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The selected book.
    pub book: &'static Book,
    /// 1-based chapter.
    pub chapter: u16,
    /// 1-based verse.
    pub verse: u16,
}

impl Selection {
    /// `chapter:verse`, as shown under the book name.
    pub fn reference(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }

    /// Native and web links for this reference.
    pub fn links(&self) -> Links {
        Links::new(self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book.name, self.chapter, self.verse)
    }
}

/// Pick a reference from the catalog for a gesture reading.
pub fn select(catalog: &Catalog, reading: GestureReading) -> Selection {
    select_with_seed(catalog, reading.seed())
}

/// Pick a reference from the catalog for a precomputed seed.
pub fn select_with_seed(catalog: &Catalog, seed: u64) -> Selection {
    let books = catalog.books();
    let book = books[(seed % books.len() as u64) as usize];

    let chapter_count = book.chapter_count().max(1) as u128;
    let chapter_index = ((u128::from(seed) * CHAPTER_MIX) % chapter_count) as usize;

    let verse_count = book.verses_in(chapter_index).map_or(1, u64::from).max(1);
    let verse = (seed / VERSE_MIX) % verse_count + 1;

    Selection {
        book,
        chapter: (chapter_index + 1) as u16,
        verse: verse as u16,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::book::Language;
    use crate::settings::LanguageSet;

    static TWO_CHAPTERS: Book = Book::new("Sample", "sample", &[3, 5], Language::English, None);

    fn single_book() -> Catalog {
        Catalog::from_books(vec![&TWO_CHAPTERS]).unwrap()
    }

    #[test]
    fn documented_scenario() {
        let reading = GestureReading {
            duration: 650.0,
            path_distance: 120.0,
            now: 1000.0,
        };
        assert_eq!(reading.seed(), 1770);
        let selection = select(&single_book(), reading);
        assert_eq!(selection.book, &TWO_CHAPTERS);
        assert_eq!(selection.chapter, 1);
        assert_eq!(selection.verse, 1);
    }

    #[test]
    fn fractional_inputs_are_floored_once() {
        let reading = GestureReading {
            duration: 600.4,
            path_distance: 0.4,
            now: 0.3,
        };
        assert_eq!(reading.seed(), 601);
    }

    #[test]
    fn negative_and_nan_saturate_to_zero() {
        let negative = GestureReading {
            duration: -5.0,
            path_distance: 0.0,
            now: 0.0,
        };
        assert_eq!(negative.seed(), 0);
        let nan = GestureReading {
            duration: f64::NAN,
            path_distance: 1.0,
            now: 1.0,
        };
        assert_eq!(nan.seed(), 0);
    }

    #[test]
    fn book_chosen_by_seed_modulo() {
        let catalog = Catalog::build(&LanguageSet::DeOnly.default_content());
        assert_eq!(select_with_seed(&catalog, 0).book.code, "1-ne");
        assert_eq!(select_with_seed(&catalog, 8).book.code, "alma");
        assert_eq!(select_with_seed(&catalog, 15 + 8).book.code, "alma");
    }

    #[test]
    fn huge_seed_does_not_overflow() {
        let selection = select_with_seed(&single_book(), u64::MAX);
        assert!((1..=2).contains(&selection.chapter));
    }

    #[test]
    fn reference_and_display() {
        let selection = select_with_seed(&single_book(), 1770);
        assert_eq!(selection.reference(), "1:1");
        assert_eq!(selection.to_string(), "Sample 1:1");
    }

    proptest! {
        #[test]
        fn always_in_range(
            duration in 0.0f64..1.0e7,
            distance in 0.0f64..1.0e6,
            now in 0.0f64..1.0e13,
            set in prop_oneof![
                Just(LanguageSet::DeOnly),
                Just(LanguageSet::EnOnly),
                Just(LanguageSet::All),
            ],
        ) {
            let catalog = Catalog::build(&set.default_content());
            let reading = GestureReading { duration, path_distance: distance, now };
            let s = select(&catalog, reading);
            let chapters = s.book.chapter_count() as u16;
            prop_assert!((1..=chapters).contains(&s.chapter));
            let verses = s.book.verses_in(usize::from(s.chapter - 1)).unwrap();
            prop_assert!((1..=verses).contains(&s.verse));
        }

        #[test]
        fn deterministic(seed in any::<u64>()) {
            let catalog = Catalog::build(&LanguageSet::All.default_content());
            prop_assert_eq!(select_with_seed(&catalog, seed), select_with_seed(&catalog, seed));
        }
    }
}
