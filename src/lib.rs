pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::FileConfig;
pub use core::{Catalog, HttpCatalogSource};
pub use domain::model::{Category, Listing, ListingWithOwner, Role, User};
pub use domain::ports::{CatalogSource, ConfigProvider};
pub use utils::error::{CatalogError, Result};
