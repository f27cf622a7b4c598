use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{DisplayItem, ItemType, Rarity, SortColumn, SortDirection, Subtype};
use crate::view::table;

#[async_trait]
pub trait SearchView: Send + Sync {
    async fn display_loading(&self, message: &str) -> Result<()>;
    async fn display_types(&self, types: Vec<ItemType>) -> Result<()>;
    async fn display_subtypes(&self, subtypes: Vec<Subtype>) -> Result<()>;
    async fn display_rarities(&self, rarities: Vec<Rarity>) -> Result<()>;
    async fn display_filter_updated(&self, message: String) -> Result<()>;
    async fn display_results(
        &self,
        items: Vec<DisplayItem>,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> Result<()>;
    async fn display_unavailable(&self, reason: String) -> Result<()>;
    async fn display_error(&self, error_message: String) -> Result<()>;
}

pub struct ConsoleSearchView;

impl ConsoleSearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSearchView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchView for ConsoleSearchView {
    async fn display_loading(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    async fn display_types(&self, types: Vec<ItemType>) -> Result<()> {
        println!("Item types (use `type <id>` or `type any`):");
        for item_type in types {
            println!(
                "  {:>3}  {} ({} subtypes)",
                item_type.id,
                item_type.name,
                item_type.subtypes.len()
            );
        }
        Ok(())
    }

    async fn display_subtypes(&self, subtypes: Vec<Subtype>) -> Result<()> {
        if subtypes.is_empty() {
            println!("No subtypes. Select an item type first.");
            return Ok(());
        }

        println!("Subtypes (use `subtype <id>` or `subtype any`):");
        for subtype in subtypes {
            println!("  {:>3}  {}", subtype.id, subtype.name);
        }
        Ok(())
    }

    async fn display_rarities(&self, rarities: Vec<Rarity>) -> Result<()> {
        println!("Rarities (use `rarity <id>` or `rarity any`):");
        for rarity in rarities {
            println!("  {:>3}  {} [{}]", rarity.id, rarity.name, rarity.color);
        }
        Ok(())
    }

    async fn display_filter_updated(&self, message: String) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    async fn display_results(
        &self,
        items: Vec<DisplayItem>,
        sort: Option<(SortColumn, SortDirection)>,
    ) -> Result<()> {
        if items.is_empty() {
            println!("No items match the current filters.");
            return Ok(());
        }

        println!("{}", table::render(&items, sort));
        println!("{} items", items.len());
        Ok(())
    }

    async fn display_unavailable(&self, reason: String) -> Result<()> {
        println!("Search failed, nothing to display. The price index is unavailable ({}).", reason);
        Ok(())
    }

    async fn display_error(&self, error_message: String) -> Result<()> {
        println!("Error: {}", error_message);
        Ok(())
    }
}
