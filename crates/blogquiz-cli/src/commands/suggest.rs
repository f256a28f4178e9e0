//! The `blogquiz suggest` command.

use anyhow::Result;

use blogquiz_core::search::suggestions;
use blogquiz_core::store::PostStore;

pub fn execute(store: &PostStore, query: &str) -> Result<()> {
    let matches = suggestions(store, query);
    if matches.is_empty() {
        println!("Nessun suggerimento per \"{query}\".");
        return Ok(());
    }

    for suggestion in matches {
        println!("{suggestion}");
    }
    Ok(())
}
