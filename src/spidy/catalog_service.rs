use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

use crate::entity::{CatalogError, GemPrice, Item, ItemListing, ItemType, ListingSide, Rarity};
use crate::spidy::models::{
    Page, ResultEnvelope, ResultsEnvelope, SpidyGemPrice, SpidyItem, SpidyListing, SpidyRarity,
    SpidyType,
};
use crate::spidy::Config;

/// Read access to the remote price index.
///
/// Every failure, whether transport, status or response shape, comes back as
/// [`CatalogError::Unavailable`].
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// All item types with their subtypes
    async fn fetch_types(&self) -> Result<Vec<ItemType>, CatalogError>;

    /// All rarity tiers
    async fn fetch_rarities(&self) -> Result<Vec<Rarity>, CatalogError>;

    /// A single item by id
    async fn fetch_item(&self, item_id: i64) -> Result<Item, CatalogError>;

    /// Every item whose name contains `name`, across all result pages
    async fn search_items(&self, name: &str) -> Result<Vec<Item>, CatalogError>;

    /// Every item of a type, across all result pages
    async fn fetch_items_by_type(&self, type_id: i32) -> Result<Vec<Item>, CatalogError>;

    /// Current gold/gem exchange rates
    async fn fetch_gem_price(&self) -> Result<GemPrice, CatalogError>;

    /// One side of an item's order book, across all result pages
    async fn fetch_listings(
        &self,
        item_id: i64,
        side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError>;
}

/// Fetch pages starting at 1 until the reported last page (or `max_pages`).
pub async fn collect_pages<T, F, Fut>(max_pages: u32, mut fetch_page: F) -> Result<Vec<T>, CatalogError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, CatalogError>>,
{
    let mut collected = Vec::new();
    let mut page = 1u32;

    loop {
        let current = fetch_page(page).await?;
        let last_page = current.last_page;
        collected.extend(current.results);

        if i64::from(page) >= last_page {
            break;
        }
        if page >= max_pages {
            warn!(
                "Stopping after {} of {} pages; raise SPIDY_MAX_PAGES to fetch more",
                page, last_page
            );
            break;
        }
        page += 1;
    }

    Ok(collected)
}

/// [`CatalogService`] backed by the gw2spidy JSON API
pub struct SpidyCatalogService {
    http_client: Client,
    config: Config,
}

impl SpidyCatalogService {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("black-lion-trader/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// `{base_url}/{api_path}/{segments...}` with each segment percent-encoded.
    pub fn endpoint(&self, segments: &[String]) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.config.base_url).map_err(|e| {
            CatalogError::unavailable(format!("invalid base URL {}: {}", self.config.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                CatalogError::unavailable(format!(
                    "base URL {} cannot carry a path",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(self.config.api_path.split('/').filter(|s| !s.is_empty()))
            .extend(segments);

        Ok(url)
    }

    async fn post_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(url.clone())
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                CatalogError::unavailable(format!("request to {} failed: {}", url, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Price index returned {} for {}", status, url);
            return Err(CatalogError::unavailable(format!(
                "price index returned {} for {}",
                status, url
            )));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Unexpected response shape from {}: {}", url, e);
            CatalogError::unavailable(format!("unexpected response from {}: {}", url, e))
        })
    }

    async fn fetch_paginated<W>(&self, prefix: Vec<String>) -> Result<Vec<W>, CatalogError>
    where
        W: DeserializeOwned + Send,
    {
        collect_pages(self.config.max_pages, |page| {
            let mut segments = prefix.clone();
            segments.push(page.to_string());
            async move {
                let url = self.endpoint(&segments)?;
                self.post_json::<Page<W>>(url).await
            }
        })
        .await
    }
}

#[async_trait]
impl CatalogService for SpidyCatalogService {
    async fn fetch_types(&self) -> Result<Vec<ItemType>, CatalogError> {
        let url = self.endpoint(&["types".to_string()])?;
        let envelope: ResultsEnvelope<SpidyType> = self.post_json(url).await?;

        info!("Fetched {} item types", envelope.results.len());
        Ok(envelope.results.into_iter().map(ItemType::from).collect())
    }

    async fn fetch_rarities(&self) -> Result<Vec<Rarity>, CatalogError> {
        let url = self.endpoint(&["rarities".to_string()])?;
        let envelope: ResultsEnvelope<SpidyRarity> = self.post_json(url).await?;

        info!("Fetched {} rarities", envelope.results.len());
        Ok(envelope.results.into_iter().map(Rarity::from).collect())
    }

    async fn fetch_item(&self, item_id: i64) -> Result<Item, CatalogError> {
        let url = self.endpoint(&["item".to_string(), item_id.to_string()])?;
        let envelope: ResultEnvelope<SpidyItem> = self.post_json(url).await?;

        Ok(Item::from(envelope.result))
    }

    async fn search_items(&self, name: &str) -> Result<Vec<Item>, CatalogError> {
        info!("Searching items by name: {}", name);

        let items: Vec<SpidyItem> = self
            .fetch_paginated(vec!["item-search".to_string(), name.to_string()])
            .await?;

        info!("Search for '{}' returned {} items", name, items.len());
        Ok(items.into_iter().map(Item::from).collect())
    }

    async fn fetch_items_by_type(&self, type_id: i32) -> Result<Vec<Item>, CatalogError> {
        info!("Browsing items of type {}", type_id);

        let items: Vec<SpidyItem> = self
            .fetch_paginated(vec!["items".to_string(), type_id.to_string()])
            .await?;

        info!("Type {} returned {} items", type_id, items.len());
        Ok(items.into_iter().map(Item::from).collect())
    }

    async fn fetch_gem_price(&self) -> Result<GemPrice, CatalogError> {
        let url = self.endpoint(&["gem-price".to_string()])?;
        let envelope: ResultEnvelope<SpidyGemPrice> = self.post_json(url).await?;

        Ok(GemPrice::from(envelope.result))
    }

    async fn fetch_listings(
        &self,
        item_id: i64,
        side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError> {
        let listings: Vec<SpidyListing> = self
            .fetch_paginated(vec![
                "item-listings".to_string(),
                item_id.to_string(),
                side.as_path().to_string(),
            ])
            .await?;

        Ok(listings.into_iter().map(ItemListing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port and return its base URL.
    async fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    fn service_at(base_url: String) -> SpidyCatalogService {
        let config = Config {
            base_url,
            request_timeout_secs: 5,
            ..Config::default()
        };
        SpidyCatalogService::new(config).unwrap()
    }

    fn page(number: i64, last_page: i64, results: Vec<i64>) -> Page<i64> {
        Page {
            page: number,
            last_page,
            total: 0,
            results,
        }
    }

    #[test]
    fn endpoint_encodes_search_terms() {
        let service = SpidyCatalogService::new(Config::default()).unwrap();

        let url = service
            .endpoint(&["item-search".to_string(), "Sigil of Fire/Air".to_string(), "2".to_string()])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://www.gw2spidy.com/api/v0.9/json/item-search/Sigil%20of%20Fire%2FAir/2"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slashes() {
        let config = Config {
            base_url: "http://localhost:8080/".to_string(),
            api_path: "/api/v0.9/json/".to_string(),
            ..Config::default()
        };
        let service = SpidyCatalogService::new(config).unwrap();

        let url = service.endpoint(&["types".to_string()]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v0.9/json/types");
    }

    #[test]
    fn invalid_base_url_is_unavailable() {
        let config = Config {
            base_url: "not a url".to_string(),
            ..Config::default()
        };
        let service = SpidyCatalogService::new(config).unwrap();

        let err = service.endpoint(&["types".to_string()]).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn collects_every_page_until_last() {
        let pages: HashMap<u32, Page<i64>> = HashMap::from([
            (1, page(1, 3, vec![1, 2])),
            (2, page(2, 3, vec![3])),
            (3, page(3, 3, vec![4, 5])),
        ]);
        let mut requested = Vec::new();

        let items = collect_pages(10, |n| {
            requested.push(n);
            let result = pages
                .get(&n)
                .map(|p| page(p.page, p.last_page, p.results.clone()))
                .ok_or_else(|| CatalogError::unavailable("missing page"));
            async move { result }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(requested, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_result_stops_after_first_page() {
        let mut calls = 0;
        let items = collect_pages(10, |_| {
            calls += 1;
            async { Ok(page(1, 0, Vec::<i64>::new())) }
        })
        .await
        .unwrap();

        assert!(items.is_empty());
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn page_cap_bounds_runaway_pagination() {
        let items = collect_pages(2, |n| async move { Ok(page(n as i64, 1000, vec![n as i64])) })
            .await
            .unwrap();

        assert_eq!(items, vec![1, 2]);
    }

    #[tokio::test]
    async fn failure_on_any_page_fails_the_fetch() {
        let result = collect_pages(10, |n| async move {
            if n == 2 {
                Err(CatalogError::unavailable("timeout"))
            } else {
                Ok(page(n as i64, 3, vec![n as i64]))
            }
        })
        .await;

        assert_eq!(result, Err(CatalogError::unavailable("timeout")));
    }

    #[tokio::test]
    async fn well_formed_response_is_decoded() {
        let base_url = serve_once(
            "200 OK",
            r#"{"results": [{"id": 5, "name": "Crafting Material", "subtypes": []}]}"#,
        )
        .await;

        let types = service_at(base_url).fetch_types().await.unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "Crafting Material");
    }

    #[tokio::test]
    async fn error_status_is_unavailable() {
        let base_url = serve_once("500 Internal Server Error", "").await;

        let err = service_at(base_url).fetch_types().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let base_url = serve_once("200 OK", r#"{"results": 5}"#).await;

        let err = service_at(base_url).fetch_types().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn out_of_range_price_is_unavailable() {
        let base_url = serve_once(
            "200 OK",
            r#"{"result": {"data_id": 1, "name": "Odd", "min_sale_unit_price": 1e20}}"#,
        )
        .await;

        let err = service_at(base_url).fetch_item(1).await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn refused_connection_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = service_at(format!("http://{}", addr))
            .fetch_rarities()
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
