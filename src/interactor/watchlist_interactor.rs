use async_trait::async_trait;
use log::info;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::entity::{CatalogError, DisplayItem, Item, WatchState};
use crate::spidy::CatalogService;

#[async_trait]
pub trait WatchlistInteractor: Send + Sync {
    fn get_watchlist(&self) -> Vec<DisplayItem>;
    fn add_to_watchlist(&self, item: Item) -> Vec<DisplayItem>;
    async fn add_by_id(&self, item_id: i64) -> Result<Vec<DisplayItem>, CatalogError>;
    fn remove_from_watchlist(&self, item_id: i64) -> bool;
    fn contains(&self, item_id: i64) -> bool;
    async fn refresh_watchlist_prices(&self) -> Result<Vec<DisplayItem>, CatalogError>;
}

pub struct WatchlistInteractorImpl {
    catalog: Arc<dyn CatalogService + Send + Sync>,
    state: Mutex<WatchState>,
}

impl WatchlistInteractorImpl {
    pub fn new(catalog: Arc<dyn CatalogService + Send + Sync>) -> Self {
        Self {
            catalog,
            state: Mutex::new(WatchState::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, WatchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WatchlistInteractor for WatchlistInteractorImpl {
    fn get_watchlist(&self) -> Vec<DisplayItem> {
        self.state().display_items()
    }

    fn add_to_watchlist(&self, item: Item) -> Vec<DisplayItem> {
        let mut state = self.state();
        let item_id = item.id;
        if state.add(item) {
            info!("Added item {} to watchlist", item_id);
        } else {
            info!("Refreshed watched item {}", item_id);
        }
        state.display_items()
    }

    async fn add_by_id(&self, item_id: i64) -> Result<Vec<DisplayItem>, CatalogError> {
        let item = self.catalog.fetch_item(item_id).await?;
        Ok(self.add_to_watchlist(item))
    }

    fn remove_from_watchlist(&self, item_id: i64) -> bool {
        let removed = self.state().remove(item_id);
        if removed {
            info!("Removed item {} from watchlist", item_id);
        }
        removed
    }

    fn contains(&self, item_id: i64) -> bool {
        self.state().contains(item_id)
    }

    async fn refresh_watchlist_prices(&self) -> Result<Vec<DisplayItem>, CatalogError> {
        let ids = {
            let state = self.state();
            if state.is_empty() {
                return Ok(Vec::new());
            }
            state.ids()
        };

        // Every favorite must refresh before any snapshot is replaced
        let mut fresh = Vec::with_capacity(ids.len());
        for item_id in ids {
            fresh.push(self.catalog.fetch_item(item_id).await?);
        }

        let mut state = self.state();
        state.replace_snapshots(fresh);
        info!("Refreshed prices for {} watched items", state.len());
        Ok(state.display_items())
    }
}
