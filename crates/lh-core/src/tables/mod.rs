//! Static verse-count tables, one per (book kind, language).
//!
//! A book's language is fixed by the table it lives in.

mod bom;
mod bom_de;
mod bom_en;
mod nt_en;
mod ot_en;

pub use bom_de::BOM_DE;
pub use bom_en::BOM_EN;
pub use nt_en::NT_EN;
pub use ot_en::OT_EN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_has_books() {
        for table in [BOM_DE, BOM_EN, OT_EN, NT_EN] {
            assert!(!table.is_empty());
        }
    }

    #[test]
    fn every_chapter_has_verses() {
        for book in BOM_DE.iter().chain(BOM_EN).chain(OT_EN).chain(NT_EN) {
            assert!(book.chapter_count() > 0, "{} has no chapters", book.name);
            assert!(
                book.verses.iter().all(|&v| v > 0),
                "{} has an empty chapter",
                book.name
            );
        }
    }

    #[test]
    fn table_sizes() {
        assert_eq!(BOM_DE.len(), 15);
        assert_eq!(BOM_EN.len(), 15);
        assert_eq!(OT_EN.len(), 39);
        assert_eq!(NT_EN.len(), 27);
    }

    #[test]
    fn total_verse_counts() {
        let total = |table: &[crate::Book]| -> u32 {
            table
                .iter()
                .flat_map(|b| b.verses.iter())
                .map(|&v| u32::from(v))
                .sum()
        };
        assert_eq!(total(BOM_EN), 6604);
        assert_eq!(total(BOM_DE), 6604);
        assert_eq!(total(OT_EN) + total(NT_EN), 31102);
    }

    #[test]
    fn german_and_english_share_codes() {
        for (de, en) in BOM_DE.iter().zip(BOM_EN) {
            assert_eq!(de.code, en.code);
            assert_eq!(de.verses, en.verses);
        }
    }
}
