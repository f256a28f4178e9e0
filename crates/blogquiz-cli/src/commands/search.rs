//! The `blogquiz search` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use blogquiz_core::search::search;
use blogquiz_core::store::PostStore;

pub fn execute(store: &PostStore, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        anyhow::bail!("inserisci un termine di ricerca");
    }

    let results = search(store, query);
    if results.is_empty() {
        println!("Nessun articolo trovato per \"{query}\".");
        return Ok(());
    }

    println!("Trovati {} articoli per \"{}\":\n", results.len(), query);

    let mut table = Table::new();
    table.set_header(vec!["#", "Titolo", "Data", "Categorie", "Autore"]);
    for (rank, post) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&post.title),
            Cell::new(&post.date),
            Cell::new(post.categories.join(", ")),
            Cell::new(&post.author),
        ]);
    }
    println!("{table}");

    Ok(())
}
