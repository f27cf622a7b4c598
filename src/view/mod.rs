pub mod market_view;
pub mod search_view;
pub mod table;
pub mod watchlist_view;

pub use market_view::{ConsoleMarketView, MarketView};
pub use search_view::{ConsoleSearchView, SearchView};
pub use watchlist_view::{ConsoleWatchlistView, WatchlistView};
