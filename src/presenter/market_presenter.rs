use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::{CatalogError, ListingSide};
use crate::facade::TraderFacade;
use crate::view::market_view::MarketView;

#[async_trait]
pub trait MarketPresenter: Send + Sync {
    async fn show_gem_price(&self) -> Result<()>;
    async fn show_listings(&self, item_id: i64, side: ListingSide) -> Result<()>;
}

pub struct MarketPresenterImpl<V> {
    facade: Arc<TraderFacade>,
    view: Arc<V>,
}

impl<V> MarketPresenterImpl<V>
where
    V: MarketView,
{
    pub fn new(facade: Arc<TraderFacade>, view: Arc<V>) -> Self {
        Self { facade, view }
    }
}

#[async_trait]
impl<V> MarketPresenter for MarketPresenterImpl<V>
where
    V: MarketView + Send + Sync,
{
    async fn show_gem_price(&self) -> Result<()> {
        self.view.display_loading("Fetching gem exchange rates...").await?;
        match self.facade.gem_price().await {
            Ok(gem_price) => self.view.display_gem_price(gem_price).await,
            Err(e) => self.view.display_unavailable(reason_of(e)).await,
        }
    }

    async fn show_listings(&self, item_id: i64, side: ListingSide) -> Result<()> {
        self.view
            .display_loading(&format!("Fetching {} listings for item {}...", side, item_id))
            .await?;
        match self.facade.listings(item_id, side).await {
            Ok(listings) => self.view.display_listings(item_id, side, listings).await,
            Err(e) => self.view.display_unavailable(reason_of(e)).await,
        }
    }
}

fn reason_of(error: CatalogError) -> String {
    match error {
        CatalogError::Unavailable { reason } => reason,
        other => other.to_string(),
    }
}
