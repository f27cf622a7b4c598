use std::fmt;

use crate::entity::Item;
use crate::utils::{rarity_color, split_coins};

/// A copper amount split into its gold/silver/copper digit groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coins {
    pub gold: String,
    pub silver: String,
    pub copper: String,
}

impl Coins {
    pub fn from_copper(value: i64) -> Self {
        split_coins(value)
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts = [(&self.gold, 'g'), (&self.silver, 's'), (&self.copper, 'c')];
        let mut first = true;
        for (digits, unit) in parts {
            if digits.is_empty() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", digits, unit)?;
            first = false;
        }
        Ok(())
    }
}

/// Read-only, UI-ready projection of an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub level: i32,
    pub rarity_color: &'static str,
    /// Sell listings on the market.
    pub supply: i64,
    /// Buy orders on the market.
    pub demand: i64,
    pub min_sale: i64,
    pub min_sale_coins: Coins,
    pub max_buy: i64,
    pub max_buy_coins: Coins,
    pub margin: i64,
    pub margin_coins: Coins,
    pub last_changed: Option<String>,
    pub watched: bool,
}

impl DisplayItem {
    pub fn with_watched(mut self, watched: bool) -> Self {
        self.watched = watched;
        self
    }
}

impl From<&Item> for DisplayItem {
    fn from(item: &Item) -> Self {
        let margin = item.margin();

        Self {
            id: item.id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            level: item.restriction_level,
            rarity_color: rarity_color(item.rarity_id),
            supply: item.sale_availability,
            demand: item.offer_availability,
            min_sale: item.min_sale_price,
            min_sale_coins: Coins::from_copper(item.min_sale_price),
            max_buy: item.max_offer_price,
            max_buy_coins: Coins::from_copper(item.max_offer_price),
            margin,
            margin_coins: Coins::from_copper(margin),
            last_changed: item
                .price_last_changed
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string()),
            watched: false,
        }
    }
}
