mod catalog_error;
mod display_item;
mod gem_price;
mod item;
mod item_filter;
mod item_listing;
mod item_type;
mod rarity;
mod reference_data;
mod search_state;
mod sort;
mod watch_state;

pub use catalog_error::CatalogError;
pub use display_item::{Coins, DisplayItem};
pub use gem_price::GemPrice;
pub use item::Item;
pub use item_filter::{ItemFilter, ANY_ID, MAX_LEVEL, MIN_LEVEL};
pub use item_listing::{ItemListing, ListingSide};
pub use item_type::{ItemType, Subtype};
pub use rarity::Rarity;
pub use reference_data::ReferenceData;
pub use search_state::SearchState;
pub use sort::{SortColumn, SortDirection};
pub use watch_state::WatchState;
