use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

use crate::entity::{CatalogError, SortColumn};
use crate::facade::TraderFacade;
use crate::view::search_view::SearchView;

#[async_trait]
pub trait SearchPresenter: Send + Sync {
    async fn show_types(&self) -> Result<()>;
    async fn show_subtypes(&self) -> Result<()>;
    async fn show_rarities(&self) -> Result<()>;
    async fn select_type(&self, type_id: Option<i32>) -> Result<()>;
    async fn select_subtype(&self, subtype_id: Option<i32>) -> Result<()>;
    async fn select_rarity(&self, rarity_id: Option<i32>) -> Result<()>;
    async fn set_min_level(&self, level: i32) -> Result<()>;
    async fn set_max_level(&self, level: i32) -> Result<()>;
    async fn search(&self, name: Option<String>) -> Result<()>;
    async fn sort_by(&self, column: SortColumn) -> Result<()>;
    async fn show_results(&self) -> Result<()>;
}

pub struct SearchPresenterImpl<V> {
    facade: Arc<TraderFacade>,
    view: Arc<V>,
}

impl<V> SearchPresenterImpl<V>
where
    V: SearchView,
{
    pub fn new(facade: Arc<TraderFacade>, view: Arc<V>) -> Self {
        Self { facade, view }
    }

    async fn report(&self, error: CatalogError) -> Result<()> {
        match error {
            CatalogError::Unavailable { reason } => {
                warn!("Price index unavailable: {}", reason);
                self.view.display_unavailable(reason).await
            }
            other => self.view.display_error(other.to_string()).await,
        }
    }

    async fn filter_updated(&self, result: Result<(), CatalogError>, message: String) -> Result<()> {
        match result {
            Ok(()) => self.view.display_filter_updated(message).await,
            Err(e) => self.report(e).await,
        }
    }

    async fn level_updated(&self, (min, max): (i32, i32)) -> Result<()> {
        self.view
            .display_filter_updated(format!("Level range is now {}-{}", min, max))
            .await
    }
}

fn describe(id: Option<i32>, name: Option<String>) -> String {
    match (id, name) {
        (Some(id), Some(name)) => format!("{} ({})", name, id),
        _ => "Any".to_string(),
    }
}

#[async_trait]
impl<V> SearchPresenter for SearchPresenterImpl<V>
where
    V: SearchView + Send + Sync,
{
    async fn show_types(&self) -> Result<()> {
        self.view.display_types(self.facade.types()).await
    }

    async fn show_subtypes(&self) -> Result<()> {
        self.view.display_subtypes(self.facade.subtypes()).await
    }

    async fn show_rarities(&self) -> Result<()> {
        self.view.display_rarities(self.facade.rarities()).await
    }

    async fn select_type(&self, type_id: Option<i32>) -> Result<()> {
        let result = self.facade.set_type(type_id);
        let name = type_id.and_then(|id| {
            self.facade
                .types()
                .into_iter()
                .find(|t| t.id == id)
                .map(|t| t.name)
        });
        self.filter_updated(result, format!("Item type: {}", describe(type_id, name)))
            .await
    }

    async fn select_subtype(&self, subtype_id: Option<i32>) -> Result<()> {
        let result = self.facade.set_subtype(subtype_id);
        let name = subtype_id.and_then(|id| {
            self.facade
                .subtypes()
                .into_iter()
                .find(|s| s.id == id)
                .map(|s| s.name)
        });
        self.filter_updated(result, format!("Subtype: {}", describe(subtype_id, name)))
            .await
    }

    async fn select_rarity(&self, rarity_id: Option<i32>) -> Result<()> {
        let result = self.facade.set_rarity(rarity_id);
        let name = rarity_id.and_then(|id| {
            self.facade
                .rarities()
                .into_iter()
                .find(|r| r.id == id && !r.is_any())
                .map(|r| r.name)
        });
        self.filter_updated(result, format!("Rarity: {}", describe(rarity_id, name)))
            .await
    }

    async fn set_min_level(&self, level: i32) -> Result<()> {
        let range = self.facade.set_min_level(level);
        self.level_updated(range).await
    }

    async fn set_max_level(&self, level: i32) -> Result<()> {
        let range = self.facade.set_max_level(level);
        self.level_updated(range).await
    }

    async fn search(&self, name: Option<String>) -> Result<()> {
        let loading = match name.as_deref() {
            Some(name) if !name.trim().is_empty() => format!("Searching for \"{}\"...", name.trim()),
            _ => "Browsing the selected item type...".to_string(),
        };
        self.view.display_loading(&loading).await?;

        match self.facade.search(name.as_deref()).await {
            Ok(items) => self.view.display_results(items, self.facade.sort()).await,
            Err(e) => self.report(e).await,
        }
    }

    async fn sort_by(&self, column: SortColumn) -> Result<()> {
        let items = self.facade.sort_by_column(column);
        self.view.display_results(items, self.facade.sort()).await
    }

    async fn show_results(&self) -> Result<()> {
        self.view
            .display_results(self.facade.current_results(), self.facade.sort())
            .await
    }
}
