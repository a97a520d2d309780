use lh_core::{CoreError, Language, Links, catalog};
use miette::{IntoDiagnostic, Result, bail};

pub fn run(code: &str, chapter: u16, verse: u16, language: Language) -> Result<()> {
    let book = catalog::lookup(code, language)
        .ok_or_else(|| CoreError::NotFound {
            code: code.to_string(),
        })
        .into_diagnostic()?;

    let chapters = book.chapter_count();
    let Some(verses) = usize::from(chapter)
        .checked_sub(1)
        .and_then(|index| book.verses_in(index))
    else {
        bail!("{} has chapters 1-{chapters}, not {chapter}", book.name);
    };
    if !(1..=verses).contains(&verse) {
        bail!("{} {chapter} has verses 1-{verses}, not {verse}", book.name);
    }

    let links = Links::new(book, chapter, verse);
    println!("{}", links.native);
    println!("{}", links.web);

    Ok(())
}
