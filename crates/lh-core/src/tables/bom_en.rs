//! Book of Mormon, English names.

use crate::book::{Book, Language};

const fn en(name: &'static str, code: &'static str, verses: &'static [u16]) -> Book {
    Book::new(name, code, verses, Language::English, None)
}

/// The fifteen books of the Book of Mormon with English names.
pub static BOM_EN: &[Book] = &[
    en("1 Nephi", "1-ne", super::bom::FIRST_NEPHI),
    en("2 Nephi", "2-ne", super::bom::SECOND_NEPHI),
    en("Jacob", "jacob", super::bom::JACOB),
    en("Enos", "enos", super::bom::ENOS),
    en("Jarom", "jarom", super::bom::JAROM),
    en("Omni", "omni", super::bom::OMNI),
    en("Words of Mormon", "w-of-m", super::bom::WORDS_OF_MORMON),
    en("Mosiah", "mosiah", super::bom::MOSIAH),
    en("Alma", "alma", super::bom::ALMA),
    en("Helaman", "hel", super::bom::HELAMAN),
    en("3 Nephi", "3-ne", super::bom::THIRD_NEPHI),
    en("4 Nephi", "4-ne", super::bom::FOURTH_NEPHI),
    en("Mormon", "morm", super::bom::MORMON),
    en("Ether", "ether", super::bom::ETHER),
    en("Moroni", "moro", super::bom::MORONI),
];
