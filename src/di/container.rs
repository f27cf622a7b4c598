use anyhow::Context;
use log::info;
use std::sync::Arc;

use crate::entity::ReferenceData;
use crate::facade::TraderFacade;
use crate::interactor::{MarketInteractorImpl, SearchInteractorImpl, WatchlistInteractorImpl};
use crate::spidy::{CatalogService, Config, SpidyCatalogService};

/// ServiceContainer owns everything built once per process
pub struct ServiceContainer {
    facade: Arc<TraderFacade>,
}

impl ServiceContainer {
    /// Connect to the configured price index and load reference data
    pub async fn initialize(config: Config) -> anyhow::Result<Self> {
        info!("Using price index at {}/{}", config.base_url, config.api_path);

        let catalog = Arc::new(
            SpidyCatalogService::new(config).context("Failed to build HTTP client")?,
        ) as Arc<dyn CatalogService + Send + Sync>;

        Self::with_catalog(catalog).await
    }

    /// Build the container around any catalog implementation
    pub async fn with_catalog(
        catalog: Arc<dyn CatalogService + Send + Sync>,
    ) -> anyhow::Result<Self> {
        info!("Loading item types and rarities...");
        let (types, rarities) = tokio::try_join!(catalog.fetch_types(), catalog.fetch_rarities())
            .context("Failed to load reference data")?;
        let reference = Arc::new(ReferenceData::new(types, rarities));
        info!(
            "Loaded {} item types and {} rarities",
            reference.types().len(),
            reference.rarities().len() - 1
        );

        let search = Arc::new(SearchInteractorImpl::new(catalog.clone(), reference));
        let watchlist = Arc::new(WatchlistInteractorImpl::new(catalog.clone()));
        let market = Arc::new(MarketInteractorImpl::new(catalog));
        let facade = Arc::new(TraderFacade::new(search, watchlist, market));

        Ok(Self { facade })
    }

    pub fn facade(&self) -> Arc<TraderFacade> {
        self.facade.clone()
    }
}
