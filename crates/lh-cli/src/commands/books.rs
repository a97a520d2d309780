use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use lh_core::{Catalog, SettingsStore};
use miette::Result;

pub fn run(settings: Option<&Path>) -> Result<()> {
    let store = super::open_store(settings)?;
    let catalog = Catalog::build(&store.load().content);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Book", "Code", "Lang", "Collection", "Chapters", "Verses"]);

    for (index, book) in catalog.books().iter().enumerate() {
        let verses: u32 = book.verses.iter().map(|&v| u32::from(v)).sum();
        table.add_row(vec![
            (index + 1).to_string(),
            book.name.to_string(),
            book.code.to_string(),
            book.language.to_string(),
            book.collection_slug().to_string(),
            book.chapter_count().to_string(),
            verses.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} books", catalog.len());

    Ok(())
}
