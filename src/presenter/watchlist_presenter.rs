use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::entity::CatalogError;
use crate::facade::TraderFacade;
use crate::view::watchlist_view::WatchlistView;

#[async_trait]
pub trait WatchlistPresenter: Send + Sync {
    async fn show_watchlist(&self) -> Result<()>;
    async fn add_to_watchlist(&self, item_id: i64) -> Result<()>;
    async fn remove_from_watchlist(&self, item_id: i64) -> Result<()>;
    async fn refresh_watchlist(&self) -> Result<()>;
}

pub struct WatchlistPresenterImpl<V> {
    facade: Arc<TraderFacade>,
    view: Arc<V>,
}

impl<V> WatchlistPresenterImpl<V>
where
    V: WatchlistView,
{
    pub fn new(facade: Arc<TraderFacade>, view: Arc<V>) -> Self {
        Self { facade, view }
    }

    async fn report(&self, error: CatalogError) -> Result<()> {
        match error {
            CatalogError::Unavailable { reason } => self.view.display_unavailable(reason).await,
            other => self.view.display_error(other.to_string()).await,
        }
    }
}

#[async_trait]
impl<V> WatchlistPresenter for WatchlistPresenterImpl<V>
where
    V: WatchlistView + Send + Sync,
{
    async fn show_watchlist(&self) -> Result<()> {
        self.view.display_watchlist(self.facade.favorites()).await
    }

    async fn add_to_watchlist(&self, item_id: i64) -> Result<()> {
        match self.facade.add_favorite(item_id).await {
            Ok(watchlist) => self.view.display_item_added(item_id, watchlist).await,
            Err(e) => self.report(e).await,
        }
    }

    async fn remove_from_watchlist(&self, item_id: i64) -> Result<()> {
        if self.facade.remove_favorite(item_id) {
            self.view.display_item_removed(item_id).await
        } else {
            self.view.display_not_watched(item_id).await
        }
    }

    async fn refresh_watchlist(&self) -> Result<()> {
        if self.facade.favorites().is_empty() {
            return self.view.display_empty_watchlist().await;
        }

        self.view.display_loading("Refreshing watchlist prices...").await?;
        match self.facade.refresh_favorites().await {
            Ok(watchlist) => self.view.display_watchlist(watchlist).await,
            Err(e) => self.report(e).await,
        }
    }
}
