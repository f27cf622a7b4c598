use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use black_lion_trader::entity::{
    CatalogError, GemPrice, Item, ItemListing, ItemType, ListingSide, Rarity, Subtype,
};
use black_lion_trader::CatalogService;

pub fn item(id: i64, name: &str, type_id: i32, level: i32, sell: i64, buy: i64) -> Item {
    Item {
        id,
        name: name.to_string(),
        rarity_id: 4,
        restriction_level: level,
        image_url: None,
        type_id,
        subtype_id: Some(0),
        price_last_changed: None,
        max_offer_price: buy,
        min_sale_price: sell,
        offer_availability: 10,
        sale_availability: 10,
        sale_change_pct: 0,
        offer_change_pct: 0,
    }
}

/// In-memory price index. Search results repeat their first item to mimic
/// overlapping pages.
pub struct FakeCatalog {
    items: Mutex<HashMap<i64, Item>>,
    offline: AtomicBool,
    pub item_requests: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().map(|i| (i.id, i)).collect()),
            offline: AtomicBool::new(false),
            item_requests: AtomicUsize::new(0),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn update(&self, item: Item) {
        self.items.lock().unwrap().insert(item.id, item);
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(CatalogError::unavailable("connection refused"))
        } else {
            Ok(())
        }
    }

    fn sorted_items(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.lock().unwrap().values().cloned().collect();
        items.sort_by_key(|i| i.id);
        items
    }
}

#[async_trait]
impl CatalogService for FakeCatalog {
    async fn fetch_types(&self) -> Result<Vec<ItemType>, CatalogError> {
        self.check()?;
        Ok(vec![
            ItemType {
                id: 18,
                name: "Weapon".to_string(),
                subtypes: vec![
                    Subtype {
                        id: 0,
                        name: "Sword".to_string(),
                    },
                    Subtype {
                        id: 1,
                        name: "Axe".to_string(),
                    },
                ],
            },
            ItemType {
                id: 5,
                name: "Crafting Material".to_string(),
                subtypes: Vec::new(),
            },
        ])
    }

    async fn fetch_rarities(&self) -> Result<Vec<Rarity>, CatalogError> {
        self.check()?;
        Ok(vec![Rarity::new(1, "Fine"), Rarity::new(4, "Exotic")])
    }

    async fn fetch_item(&self, item_id: i64) -> Result<Item, CatalogError> {
        self.item_requests.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.items
            .lock()
            .unwrap()
            .get(&item_id)
            .cloned()
            .ok_or_else(|| CatalogError::unavailable(format!("no item {}", item_id)))
    }

    async fn search_items(&self, name: &str) -> Result<Vec<Item>, CatalogError> {
        self.check()?;
        let mut found: Vec<Item> = self
            .sorted_items()
            .into_iter()
            .filter(|i| i.name.contains(name))
            .collect();
        if let Some(first) = found.first().cloned() {
            found.push(first);
        }
        Ok(found)
    }

    async fn fetch_items_by_type(&self, type_id: i32) -> Result<Vec<Item>, CatalogError> {
        self.check()?;
        Ok(self
            .sorted_items()
            .into_iter()
            .filter(|i| i.type_id == type_id)
            .collect())
    }

    async fn fetch_gem_price(&self) -> Result<GemPrice, CatalogError> {
        self.check()?;
        Ok(GemPrice {
            gem_to_gold: 2500,
            gold_to_gem: 3500,
        })
    }

    async fn fetch_listings(
        &self,
        _item_id: i64,
        _side: ListingSide,
    ) -> Result<Vec<ItemListing>, CatalogError> {
        self.check()?;
        Ok([120, 90, 150]
            .into_iter()
            .map(|unit_price| ItemListing {
                listed_at: None,
                unit_price,
                quantity: 5,
                listings: 1,
            })
            .collect())
    }
}
