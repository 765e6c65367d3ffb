//! Catalog Listing Example
//!
//! Fetches the full roster and prints one line per entry, marking the
//! creatures that are selectable out of the box.

use anyhow::Result;
use dexter_client::{BattleSession, Presenter, RosterEntry};

struct ConsoleView;

impl Presenter for ConsoleView {
    fn on_catalog(&mut self, entries: &[RosterEntry]) {
        for entry in entries {
            let marker = if entry.known() { "*" } else { " " };
            println!("{marker} {:<12} {}", entry.name, entry.sprite_url());
        }
        println!("{} creatures ({} selectable)", entries.len(),
            entries.iter().filter(|e| e.known()).count());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut session = BattleSession::new();
    let mut view = ConsoleView;

    session.load_catalog(&mut view).await?;
    Ok(())
}
