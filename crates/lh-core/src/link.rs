//! Deep-link and web URL construction for a reference.

use crate::book::Book;

/// Scheme of the native scripture app.
pub const NATIVE_SCHEME: &str = "gospellibrary";
/// Host serving the web study pages.
pub const WEB_HOST: &str = "www.churchofjesuschrist.org";

/// Native deep link and its web equivalent for one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    /// `gospellibrary://content/scriptures/...`
    pub native: String,
    /// `https://www.churchofjesuschrist.org/study/scriptures/...`
    pub web: String,
}

impl Links {
    /// Build both links for a reference.
    pub fn new(book: &Book, chapter: u16, verse: u16) -> Self {
        Self {
            native: native_uri(book, chapter, verse),
            web: web_url(book, chapter, verse),
        }
    }
}

/// `<scheme>://content/scriptures/<collection>/<code>/<chapter>?verse=<verse>#p<verse>`
pub fn native_uri(book: &Book, chapter: u16, verse: u16) -> String {
    format!(
        "{NATIVE_SCHEME}://content/scriptures/{}/{}/{chapter}?verse={verse}#p{verse}",
        book.collection_slug(),
        book.code,
    )
}

/// `https://<host>/study/scriptures/<collection>/<code>/<chapter>.<verse>?lang=<lang>#p<verse>`
pub fn web_url(book: &Book, chapter: u16, verse: u16) -> String {
    format!(
        "https://{WEB_HOST}/study/scriptures/{}/{}/{chapter}.{verse}?lang={}#p{verse}",
        book.collection_slug(),
        book.code,
        book.language.iso639_3(),
    )
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::book::Language;
    use crate::catalog::lookup;

    #[test]
    fn book_of_mormon_german() {
        let book = lookup("alma", Language::German).unwrap();
        let links = Links::new(book, 32, 21);
        assert_snapshot!(links.native, @"gospellibrary://content/scriptures/bofm/alma/32?verse=21#p21");
        assert_snapshot!(links.web, @"https://www.churchofjesuschrist.org/study/scriptures/bofm/alma/32.21?lang=deu#p21");
    }

    #[test]
    fn new_testament_english() {
        let book = lookup("john", Language::English).unwrap();
        let links = Links::new(book, 3, 16);
        assert_snapshot!(links.native, @"gospellibrary://content/scriptures/nt/john/3?verse=16#p16");
        assert_snapshot!(links.web, @"https://www.churchofjesuschrist.org/study/scriptures/nt/john/3.16?lang=eng#p16");
    }

    #[test]
    fn old_testament_collection() {
        let book = lookup("ps", Language::English).unwrap();
        assert!(native_uri(book, 23, 1).contains("/scriptures/ot/ps/23?"));
    }
}
