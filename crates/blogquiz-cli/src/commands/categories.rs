//! The `blogquiz categories` command.

use anyhow::Result;

use blogquiz_core::store::PostStore;

pub fn execute(store: &PostStore) -> Result<()> {
    for category in store.categories() {
        println!("{category}");
    }
    Ok(())
}
