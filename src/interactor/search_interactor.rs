use async_trait::async_trait;
use log::{debug, info};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::entity::{
    CatalogError, DisplayItem, Item, ItemType, Rarity, ReferenceData, SearchState, SortColumn,
    SortDirection, Subtype,
};
use crate::spidy::CatalogService;

#[async_trait]
pub trait SearchInteractor: Send + Sync {
    fn types(&self) -> Vec<ItemType>;
    fn subtypes(&self) -> Vec<Subtype>;
    fn rarities(&self) -> Vec<Rarity>;
    fn set_type(&self, type_id: Option<i32>) -> Result<(), CatalogError>;
    fn set_subtype(&self, subtype_id: Option<i32>) -> Result<(), CatalogError>;
    fn set_rarity(&self, rarity_id: Option<i32>) -> Result<(), CatalogError>;
    fn set_min_level(&self, level: i32) -> (i32, i32);
    fn set_max_level(&self, level: i32) -> (i32, i32);
    fn level_range(&self) -> (i32, i32);
    async fn search(&self, name: Option<&str>) -> Result<Vec<DisplayItem>, CatalogError>;
    fn change_sort_column(&self, column: SortColumn) -> Vec<DisplayItem>;
    fn sort(&self) -> Option<(SortColumn, SortDirection)>;
    fn display_items(&self) -> Vec<DisplayItem>;
    fn find_result(&self, item_id: i64) -> Option<Item>;
}

pub struct SearchInteractorImpl {
    catalog: Arc<dyn CatalogService + Send + Sync>,
    reference: Arc<ReferenceData>,
    state: Mutex<SearchState>,
}

impl SearchInteractorImpl {
    pub fn new(
        catalog: Arc<dyn CatalogService + Send + Sync>,
        reference: Arc<ReferenceData>,
    ) -> Self {
        Self {
            catalog,
            reference,
            state: Mutex::new(SearchState::new()),
        }
    }

    // Never held across an await
    fn state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn selected_type_id(&self) -> Option<i32> {
        self.state().filter().item_type().map(|t| t.id)
    }
}

#[async_trait]
impl SearchInteractor for SearchInteractorImpl {
    fn types(&self) -> Vec<ItemType> {
        self.reference.types().to_vec()
    }

    fn subtypes(&self) -> Vec<Subtype> {
        self.state().filter().subtypes().to_vec()
    }

    fn rarities(&self) -> Vec<Rarity> {
        self.reference.rarities().to_vec()
    }

    fn set_type(&self, type_id: Option<i32>) -> Result<(), CatalogError> {
        debug!("Selecting type {:?}", type_id);
        self.state()
            .filter_mut()
            .select_type(&self.reference, type_id)
    }

    fn set_subtype(&self, subtype_id: Option<i32>) -> Result<(), CatalogError> {
        debug!("Selecting subtype {:?}", subtype_id);
        self.state().filter_mut().select_subtype(subtype_id)
    }

    fn set_rarity(&self, rarity_id: Option<i32>) -> Result<(), CatalogError> {
        debug!("Selecting rarity {:?}", rarity_id);
        self.state()
            .filter_mut()
            .select_rarity(&self.reference, rarity_id)
    }

    fn set_min_level(&self, level: i32) -> (i32, i32) {
        let mut state = self.state();
        state.filter_mut().set_min_level(level);
        (state.filter().min_level(), state.filter().max_level())
    }

    fn set_max_level(&self, level: i32) -> (i32, i32) {
        let mut state = self.state();
        state.filter_mut().set_max_level(level);
        (state.filter().min_level(), state.filter().max_level())
    }

    fn level_range(&self) -> (i32, i32) {
        let state = self.state();
        (state.filter().min_level(), state.filter().max_level())
    }

    async fn search(&self, name: Option<&str>) -> Result<Vec<DisplayItem>, CatalogError> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        // The previous results stay in place until the whole fetch succeeds.
        let fetched = match name {
            Some(name) => self.catalog.search_items(name).await?,
            None => {
                let type_id = self
                    .selected_type_id()
                    .ok_or(CatalogError::NoTypeSelected)?;
                self.catalog.fetch_items_by_type(type_id).await?
            }
        };

        let fetched_count = fetched.len();
        let mut state = self.state();
        state.replace_results(fetched);
        info!(
            "Search {:?} kept {} of {} fetched items",
            name,
            state.results().len(),
            fetched_count
        );

        Ok(state.display_items())
    }

    fn change_sort_column(&self, column: SortColumn) -> Vec<DisplayItem> {
        let mut state = self.state();
        state.change_sort_column(column);
        state.display_items()
    }

    fn sort(&self) -> Option<(SortColumn, SortDirection)> {
        self.state().sort()
    }

    fn display_items(&self) -> Vec<DisplayItem> {
        self.state().display_items()
    }

    fn find_result(&self, item_id: i64) -> Option<Item> {
        self.state().find_result(item_id).cloned()
    }
}
