pub mod catalog_service;
pub mod config;
pub mod models;

pub use catalog_service::{CatalogService, SpidyCatalogService};
pub use config::Config;
