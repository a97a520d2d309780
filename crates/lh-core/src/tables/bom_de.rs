//! Book of Mormon, German names.

use crate::book::{Book, Language};

const fn de(name: &'static str, code: &'static str, verses: &'static [u16]) -> Book {
    Book::new(name, code, verses, Language::German, None)
}

/// The fifteen books of the Book of Mormon with German names.
pub static BOM_DE: &[Book] = &[
    de("1 Nephi", "1-ne", super::bom::FIRST_NEPHI),
    de("2 Nephi", "2-ne", super::bom::SECOND_NEPHI),
    de("Jakob", "jacob", super::bom::JACOB),
    de("Enos", "enos", super::bom::ENOS),
    de("Jarom", "jarom", super::bom::JAROM),
    de("Omni", "omni", super::bom::OMNI),
    de("Worte Mormons", "w-of-m", super::bom::WORDS_OF_MORMON),
    de("Mosia", "mosiah", super::bom::MOSIAH),
    de("Alma", "alma", super::bom::ALMA),
    de("Helaman", "hel", super::bom::HELAMAN),
    de("3 Nephi", "3-ne", super::bom::THIRD_NEPHI),
    de("4 Nephi", "4-ne", super::bom::FOURTH_NEPHI),
    de("Mormon", "morm", super::bom::MORMON),
    de("Ether", "ether", super::bom::ETHER),
    de("Moroni", "moro", super::bom::MORONI),
];
