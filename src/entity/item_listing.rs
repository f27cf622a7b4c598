use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Which half of an item's order book to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSide {
    Sell,
    Buy,
}

impl ListingSide {
    pub fn as_path(&self) -> &'static str {
        match self {
            Self::Sell => "sell",
            Self::Buy => "buy",
        }
    }
}

impl FromStr for ListingSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sell" | "sale" => Ok(Self::Sell),
            "buy" | "offer" => Ok(Self::Buy),
            other => Err(format!("expected sell or buy, got '{}'", other)),
        }
    }
}

impl fmt::Display for ListingSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Orders sitting at one price on the trading post.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemListing {
    pub listed_at: Option<DateTime<Utc>>,
    pub unit_price: i64,
    pub quantity: i64,
    pub listings: i64,
}
