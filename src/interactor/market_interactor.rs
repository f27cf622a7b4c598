use crate::entity::{CatalogError, GemPrice, ItemListing, ListingSide};
use crate::spidy::CatalogService;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait MarketInteractor: Send + Sync {
    async fn get_gem_price(&self) -> Result<GemPrice, CatalogError>;
    async fn get_listings(
        &self,
        item_id: i64,
        side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError>;
}

pub struct MarketInteractorImpl {
    catalog: Arc<dyn CatalogService + Send + Sync>,
}

impl MarketInteractorImpl {
    pub fn new(catalog: Arc<dyn CatalogService + Send + Sync>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MarketInteractor for MarketInteractorImpl {
    async fn get_gem_price(&self) -> Result<GemPrice, CatalogError> {
        self.catalog.fetch_gem_price().await
    }

    async fn get_listings(
        &self,
        item_id: i64,
        side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError> {
        let mut listings = self.catalog.fetch_listings(item_id, side).await?;
        // Best price first: lowest sell listing, highest buy order
        match side {
            ListingSide::Sell => listings.sort_by_key(|l| l.unit_price),
            ListingSide::Buy => listings.sort_by(|a, b| b.unit_price.cmp(&a.unit_price)),
        }
        Ok(listings)
    }
}
