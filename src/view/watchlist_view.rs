use anyhow::Result;
use async_trait::async_trait;

use crate::entity::DisplayItem;
use crate::view::table;

#[async_trait]
pub trait WatchlistView: Send + Sync {
    async fn display_loading(&self, message: &str) -> Result<()>;
    async fn display_watchlist(&self, watchlist: Vec<DisplayItem>) -> Result<()>;
    async fn display_empty_watchlist(&self) -> Result<()>;
    async fn display_item_added(&self, item_id: i64, watchlist: Vec<DisplayItem>) -> Result<()>;
    async fn display_item_removed(&self, item_id: i64) -> Result<()>;
    async fn display_not_watched(&self, item_id: i64) -> Result<()>;
    async fn display_unavailable(&self, reason: String) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct ConsoleWatchlistView;

impl ConsoleWatchlistView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleWatchlistView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WatchlistView for ConsoleWatchlistView {
    async fn display_loading(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    async fn display_watchlist(&self, watchlist: Vec<DisplayItem>) -> Result<()> {
        if watchlist.is_empty() {
            return self.display_empty_watchlist().await;
        }

        println!("Your watchlist:");
        println!("{}", table::render(&watchlist, None));
        Ok(())
    }

    async fn display_empty_watchlist(&self) -> Result<()> {
        println!("Your watchlist is empty. Use `watch <id>` to track an item.");
        Ok(())
    }

    async fn display_item_added(&self, item_id: i64, watchlist: Vec<DisplayItem>) -> Result<()> {
        match watchlist.iter().find(|item| item.id == item_id) {
            Some(item) => println!(
                "Watching {} (margin {})",
                item.name, item.margin_coins
            ),
            None => println!("Watching item {}", item_id),
        }
        println!("{} items on your watchlist", watchlist.len());
        Ok(())
    }

    async fn display_item_removed(&self, item_id: i64) -> Result<()> {
        println!("Removed item {} from your watchlist", item_id);
        Ok(())
    }

    async fn display_not_watched(&self, item_id: i64) -> Result<()> {
        println!("Item {} is not on your watchlist", item_id);
        Ok(())
    }

    async fn display_unavailable(&self, reason: String) -> Result<()> {
        println!("Could not reach the price index ({}). Your watchlist is unchanged.", reason);
        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        println!("Error: {}", error_message);
        Ok(())
    }
}
