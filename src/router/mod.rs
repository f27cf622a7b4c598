use anyhow::Result;
use log::{debug, error, info};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{help_text, Command};
use crate::di::ServiceContainer;
use crate::presenter::{
    MarketPresenter, MarketPresenterImpl, SearchPresenter, SearchPresenterImpl,
    WatchlistPresenter, WatchlistPresenterImpl,
};
use crate::view::{ConsoleMarketView, ConsoleSearchView, ConsoleWatchlistView};

/// Reads commands line by line and hands them to the presenters
pub struct ConsoleRouter {
    search: Arc<dyn SearchPresenter>,
    watchlist: Arc<dyn WatchlistPresenter>,
    market: Arc<dyn MarketPresenter>,
}

impl ConsoleRouter {
    pub fn new(services: Arc<ServiceContainer>) -> Self {
        let facade = services.facade();
        Self {
            search: Arc::new(SearchPresenterImpl::new(
                facade.clone(),
                Arc::new(ConsoleSearchView::new()),
            )),
            watchlist: Arc::new(WatchlistPresenterImpl::new(
                facade.clone(),
                Arc::new(ConsoleWatchlistView::new()),
            )),
            market: Arc::new(MarketPresenterImpl::new(
                facade,
                Arc::new(ConsoleMarketView::new()),
            )),
        }
    }

    pub async fn run<R>(&self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        println!("{}", help_text());
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            debug!("Dispatching {:?}", command);
            match self.dispatch(command).await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => error!("Command failed: {:#}", e),
            }
        }

        info!("Leaving");
        Ok(())
    }

    /// Returns false once the user asks to quit.
    async fn dispatch(&self, command: Command) -> Result<bool> {
        match command {
            Command::Types => self.search.show_types().await?,
            Command::Subtypes => self.search.show_subtypes().await?,
            Command::Rarities => self.search.show_rarities().await?,
            Command::Type(id) => self.search.select_type(id).await?,
            Command::Subtype(id) => self.search.select_subtype(id).await?,
            Command::Rarity(id) => self.search.select_rarity(id).await?,
            Command::MinLevel(level) => self.search.set_min_level(level).await?,
            Command::MaxLevel(level) => self.search.set_max_level(level).await?,
            Command::Search(name) => self.search.search(name).await?,
            Command::Results => self.search.show_results().await?,
            Command::Sort(column) => self.search.sort_by(column).await?,
            Command::Watch(item_id) => self.watchlist.add_to_watchlist(item_id).await?,
            Command::Unwatch(item_id) => self.watchlist.remove_from_watchlist(item_id).await?,
            Command::Watchlist => self.watchlist.show_watchlist().await?,
            Command::Refresh => self.watchlist.refresh_watchlist().await?,
            Command::Gems => self.market.show_gem_price().await?,
            Command::Listings(item_id, side) => self.market.show_listings(item_id, side).await?,
            Command::Help => println!("{}", help_text()),
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }
}
