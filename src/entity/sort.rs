use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entity::Item;

/// Result table column the search results can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Level,
    Supply,
    Demand,
    MinSale,
    MaxBuy,
    Margin,
}

impl SortColumn {
    /// Ascending order of two items on this column.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Level => a.restriction_level.cmp(&b.restriction_level),
            Self::Supply => a.sale_availability.cmp(&b.sale_availability),
            Self::Demand => a.offer_availability.cmp(&b.offer_availability),
            Self::MinSale => a.min_sale_price.cmp(&b.min_sale_price),
            Self::MaxBuy => a.max_offer_price.cmp(&b.max_offer_price),
            Self::Margin => a.margin().cmp(&b.margin()),
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "level" | "lvl" => Ok(Self::Level),
            "supply" => Ok(Self::Supply),
            "demand" => Ok(Self::Demand),
            "minsale" | "sell" => Ok(Self::MinSale),
            "maxbuy" | "buy" => Ok(Self::MaxBuy),
            "margin" => Ok(Self::Margin),
            other => Err(format!("Unknown sort column '{}'", other)),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Level => "level",
            Self::Supply => "supply",
            Self::Demand => "demand",
            Self::MinSale => "minsale",
            Self::MaxBuy => "maxbuy",
            Self::Margin => "margin",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}
