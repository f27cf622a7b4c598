pub mod market_interactor;
pub mod search_interactor;
pub mod watchlist_interactor;

pub use market_interactor::{MarketInteractor, MarketInteractorImpl};
pub use search_interactor::{SearchInteractor, SearchInteractorImpl};
pub use watchlist_interactor::{WatchlistInteractor, WatchlistInteractorImpl};
