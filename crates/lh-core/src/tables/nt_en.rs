//! New Testament (King James Version), English names.

use crate::book::{Book, Collection, Language};

const fn nt(name: &'static str, code: &'static str, verses: &'static [u16]) -> Book {
    Book::new(
        name,
        code,
        verses,
        Language::English,
        Some(Collection::NewTestament),
    )
}

/// The twenty-seven books of the New Testament.
pub static NT_EN: &[Book] = &[
    nt("Matthew", "matt", &[
        25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46, 46,
        39, 51, 46, 75, 66, 20,
    ]),
    nt("Mark", "mark", &[
        45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20,
    ]),
    nt("Luke", "luke", &[
        80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38, 71,
        56, 53,
    ]),
    nt("John", "john", &[
        51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
    ]),
    nt("Acts", "acts", &[
        26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40, 30,
        35, 27, 27, 32, 44, 31,
    ]),
    nt("Romans", "rom", &[
        32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27,
    ]),
    nt("1 Corinthians", "1-cor", &[
        31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24,
    ]),
    nt("2 Corinthians", "2-cor", &[
        24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14,
    ]),
    nt("Galatians", "gal", &[24, 21, 29, 31, 26, 18]),
    nt("Ephesians", "eph", &[23, 22, 21, 32, 33, 24]),
    nt("Philippians", "philip", &[30, 30, 21, 23]),
    nt("Colossians", "col", &[29, 23, 25, 18]),
    nt("1 Thessalonians", "1-thes", &[10, 20, 13, 18, 28]),
    nt("2 Thessalonians", "2-thes", &[12, 17, 18]),
    nt("1 Timothy", "1-tim", &[20, 15, 16, 16, 25, 21]),
    nt("2 Timothy", "2-tim", &[18, 26, 17, 22]),
    nt("Titus", "titus", &[16, 15, 15]),
    nt("Philemon", "philem", &[25]),
    nt("Hebrews", "heb", &[
        14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25,
    ]),
    nt("James", "james", &[27, 26, 18, 17, 20]),
    nt("1 Peter", "1-pet", &[25, 25, 22, 19, 14]),
    nt("2 Peter", "2-pet", &[21, 22, 18]),
    nt("1 John", "1-jn", &[10, 29, 24, 21, 21]),
    nt("2 John", "2-jn", &[13]),
    nt("3 John", "3-jn", &[14]),
    nt("Jude", "jude", &[25]),
    nt("Revelation", "rev", &[
        20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21,
    ]),
];
