use chrono::{DateTime, Utc};

use crate::utils::margin;

/// A snapshot of one item's trading post state as reported by the price index.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub rarity_id: i32,
    pub restriction_level: i32,
    pub image_url: Option<String>,
    pub type_id: i32,
    pub subtype_id: Option<i32>,
    pub price_last_changed: Option<DateTime<Utc>>,
    /// Highest buy order, in copper.
    pub max_offer_price: i64,
    /// Lowest sell listing, in copper.
    pub min_sale_price: i64,
    /// Number of buy orders.
    pub offer_availability: i64,
    /// Number of sell listings.
    pub sale_availability: i64,
    pub sale_change_pct: i64,
    pub offer_change_pct: i64,
}

impl Item {
    pub fn margin(&self) -> i64 {
        margin(self.min_sale_price, self.max_offer_price)
    }

    pub fn is_traded(&self) -> bool {
        self.sale_availability > 0 && self.offer_availability > 0
    }
}
