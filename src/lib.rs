//! Trading post companion for the gw2spidy price index.
//!
//! Layers, from the wire up: [`spidy`] talks to the remote catalog,
//! [`entity`] holds the domain model and in-memory state, [`interactor`]
//! and [`facade`] expose operations, and [`presenter`], [`view`] and
//! [`router`] drive the console.

pub mod commands;
pub mod di;
pub mod entity;
pub mod facade;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod spidy;
pub mod utils;
pub mod view;

pub use di::ServiceContainer;
pub use facade::TraderFacade;
pub use router::ConsoleRouter;
pub use spidy::{CatalogService, Config, SpidyCatalogService};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
