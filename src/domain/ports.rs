use crate::domain::model::{Listing, User};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn products_resource(&self) -> &str;
    fn users_resource(&self) -> &str;
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_listings(&self) -> Result<Vec<Listing>>;
    async fn fetch_users(&self) -> Result<Vec<User>>;
}
