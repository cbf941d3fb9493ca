pub mod catalog;
pub mod source;

pub use crate::domain::model::{Category, Listing, ListingWithOwner, Role, User};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
pub use catalog::Catalog;
pub use source::HttpCatalogSource;
