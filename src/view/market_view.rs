use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{Coins, GemPrice, ItemListing, ListingSide};

#[async_trait]
pub trait MarketView: Send + Sync {
    async fn display_loading(&self, message: &str) -> Result<()>;
    async fn display_gem_price(&self, gem_price: GemPrice) -> Result<()>;
    async fn display_listings(
        &self,
        item_id: i64,
        side: ListingSide,
        listings: Vec<ItemListing>,
    ) -> Result<()>;
    async fn display_unavailable(&self, reason: String) -> Result<()>;
}

pub struct ConsoleMarketView;

impl ConsoleMarketView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleMarketView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketView for ConsoleMarketView {
    async fn display_loading(&self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    async fn display_gem_price(&self, gem_price: GemPrice) -> Result<()> {
        println!(
            "100 gems sell for {}\n100 gems cost {}",
            Coins::from_copper(gem_price.gem_to_gold),
            Coins::from_copper(gem_price.gold_to_gem)
        );
        Ok(())
    }

    async fn display_listings(
        &self,
        item_id: i64,
        side: ListingSide,
        listings: Vec<ItemListing>,
    ) -> Result<()> {
        if listings.is_empty() {
            println!("No {} listings for item {}", side, item_id);
            return Ok(());
        }

        println!("{} listings for item {}:", side, item_id);
        println!("  {:>14}  {:>9}  {:>8}  {}", "unit price", "quantity", "listings", "listed");
        for listing in listings {
            let listed = listing
                .listed_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!(
                "  {:>14}  {:>9}  {:>8}  {}",
                Coins::from_copper(listing.unit_price).to_string(),
                listing.quantity,
                listing.listings,
                listed
            );
        }
        Ok(())
    }

    async fn display_unavailable(&self, reason: String) -> Result<()> {
        println!("Market data unavailable ({}).", reason);
        Ok(())
    }
}
