//! Verse counts per chapter for the Book of Mormon, shared by every language.

pub const FIRST_NEPHI: &[u16] = &[
    20, 24, 31, 38, 22, 6, 22, 38, 6, 22, 36, 23, 42, 30, 36, 39, 55, 25, 24, 22, 26, 31,
];
pub const SECOND_NEPHI: &[u16] = &[
    32, 30, 25, 35, 34, 18, 11, 25, 54, 25, 8, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32,
    30, 33, 35, 32, 14, 18, 21, 9, 15,
];
pub const JACOB: &[u16] = &[19, 35, 14, 18, 77, 13, 27];
pub const ENOS: &[u16] = &[27];
pub const JAROM: &[u16] = &[15];
pub const OMNI: &[u16] = &[30];
pub const WORDS_OF_MORMON: &[u16] = &[18];
pub const MOSIAH: &[u16] = &[
    18, 41, 27, 30, 15, 7, 33, 21, 19, 22, 29, 37, 35, 12, 31, 15, 20, 35, 29, 26, 36, 16, 39,
    25, 24, 39, 37, 20, 47,
];
pub const ALMA: &[u16] = &[
    33, 38, 27, 20, 62, 8, 27, 32, 34, 32, 46, 37, 31, 29, 19, 21, 39, 43, 36, 30, 23, 35, 18,
    30, 17, 37, 30, 14, 17, 60, 38, 43, 23, 41, 16, 30, 47, 15, 19, 26, 15, 31, 54, 24, 24, 41,
    36, 25, 30, 40, 37, 40, 23, 24, 39, 57, 36, 41, 13, 36, 21, 52, 17,
];
pub const HELAMAN: &[u16] = &[
    34, 14, 37, 26, 52, 41, 29, 28, 41, 19, 38, 26, 39, 31, 17, 25,
];
pub const THIRD_NEPHI: &[u16] = &[
    30, 19, 26, 33, 26, 30, 26, 25, 22, 19, 41, 48, 34, 22, 24, 20, 25, 39, 36, 46, 29, 17, 14,
    18, 6, 21, 33, 40, 9, 2,
];
pub const FOURTH_NEPHI: &[u16] = &[49];
pub const MORMON: &[u16] = &[19, 29, 22, 23, 24, 22, 10, 41, 37];
pub const ETHER: &[u16] = &[
    43, 25, 28, 19, 6, 30, 27, 26, 35, 34, 23, 41, 31, 31, 34,
];
pub const MORONI: &[u16] = &[4, 3, 4, 3, 3, 9, 48, 30, 26, 34];
