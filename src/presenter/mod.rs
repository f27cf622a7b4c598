pub mod market_presenter;
pub mod search_presenter;
pub mod watchlist_presenter;

pub use market_presenter::{MarketPresenter, MarketPresenterImpl};
pub use search_presenter::{SearchPresenter, SearchPresenterImpl};
pub use watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
