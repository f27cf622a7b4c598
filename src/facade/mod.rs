//! Flat operations consumed by the presentation layer.
//!
//! Every [`DisplayItem`] handed out here is marked `watched` when its id is on
//! the watch list.

use log::debug;
use std::sync::Arc;

use crate::entity::{
    CatalogError, DisplayItem, GemPrice, ItemListing, ItemType, ListingSide, Rarity, SortColumn,
    SortDirection, Subtype,
};
use crate::interactor::{MarketInteractor, SearchInteractor, WatchlistInteractor};

pub struct TraderFacade {
    search: Arc<dyn SearchInteractor + Send + Sync>,
    watchlist: Arc<dyn WatchlistInteractor + Send + Sync>,
    market: Arc<dyn MarketInteractor + Send + Sync>,
}

impl TraderFacade {
    pub fn new(
        search: Arc<dyn SearchInteractor + Send + Sync>,
        watchlist: Arc<dyn WatchlistInteractor + Send + Sync>,
        market: Arc<dyn MarketInteractor + Send + Sync>,
    ) -> Self {
        Self {
            search,
            watchlist,
            market,
        }
    }

    fn mark_watched(&self, items: Vec<DisplayItem>) -> Vec<DisplayItem> {
        items
            .into_iter()
            .map(|item| {
                let watched = self.watchlist.contains(item.id);
                item.with_watched(watched)
            })
            .collect()
    }

    pub fn types(&self) -> Vec<ItemType> {
        self.search.types()
    }

    pub fn type_names(&self) -> Vec<String> {
        self.search.types().into_iter().map(|t| t.name).collect()
    }

    /// Subtypes of the selected type; empty while the type is "Any".
    pub fn subtypes(&self) -> Vec<Subtype> {
        self.search.subtypes()
    }

    pub fn subtype_names(&self) -> Vec<String> {
        self.search.subtypes().into_iter().map(|s| s.name).collect()
    }

    /// All rarities, starting with the synthetic "Any" entry.
    pub fn rarities(&self) -> Vec<Rarity> {
        self.search.rarities()
    }

    pub fn set_type(&self, type_id: Option<i32>) -> Result<(), CatalogError> {
        self.search.set_type(type_id)
    }

    pub fn set_subtype(&self, subtype_id: Option<i32>) -> Result<(), CatalogError> {
        self.search.set_subtype(subtype_id)
    }

    pub fn set_rarity(&self, rarity_id: Option<i32>) -> Result<(), CatalogError> {
        self.search.set_rarity(rarity_id)
    }

    /// Returns the clamped `(min, max)` range.
    pub fn set_min_level(&self, level: i32) -> (i32, i32) {
        self.search.set_min_level(level)
    }

    /// Returns the clamped `(min, max)` range.
    pub fn set_max_level(&self, level: i32) -> (i32, i32) {
        self.search.set_max_level(level)
    }

    pub fn level_range(&self) -> (i32, i32) {
        self.search.level_range()
    }

    /// Search by name, or browse the selected type when `name` is `None`.
    pub async fn search(&self, name: Option<&str>) -> Result<Vec<DisplayItem>, CatalogError> {
        let items = self.search.search(name).await?;
        Ok(self.mark_watched(items))
    }

    pub fn sort_by_column(&self, column: SortColumn) -> Vec<DisplayItem> {
        let items = self.search.change_sort_column(column);
        debug!("Sorted results by {:?}", self.search.sort());
        self.mark_watched(items)
    }

    pub fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.search.sort()
    }

    pub fn current_results(&self) -> Vec<DisplayItem> {
        self.mark_watched(self.search.display_items())
    }

    /// Watch an item, taken from the current results when present and
    /// fetched otherwise. Re-adding refreshes the stored snapshot.
    pub async fn add_favorite(&self, item_id: i64) -> Result<Vec<DisplayItem>, CatalogError> {
        match self.search.find_result(item_id) {
            Some(item) => Ok(self.watchlist.add_to_watchlist(item)),
            None => self.watchlist.add_by_id(item_id).await,
        }
    }

    /// Returns whether the item was being watched.
    pub fn remove_favorite(&self, item_id: i64) -> bool {
        self.watchlist.remove_from_watchlist(item_id)
    }

    pub fn favorites(&self) -> Vec<DisplayItem> {
        self.watchlist.get_watchlist()
    }

    pub fn is_favorite(&self, item_id: i64) -> bool {
        self.watchlist.contains(item_id)
    }

    pub async fn refresh_favorites(&self) -> Result<Vec<DisplayItem>, CatalogError> {
        self.watchlist.refresh_watchlist_prices().await
    }

    pub async fn gem_price(&self) -> Result<GemPrice, CatalogError> {
        self.market.get_gem_price().await
    }

    pub async fn listings(
        &self,
        item_id: i64,
        side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError> {
        self.market.get_listings(item_id, side).await
    }
}
