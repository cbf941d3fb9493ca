use crate::domain::model::{Listing, User};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

pub struct HttpCatalogSource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpCatalogSource<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn resource_url(&self, resource: &str) -> Result<Url> {
        // base_url 不一定帶結尾斜線,先補齊再 join
        let mut base = self.config.base_url().trim_end_matches('/').to_string();
        base.push('/');
        Ok(Url::parse(&base)?.join(resource)?)
    }

    async fn fetch_resource<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = self.resource_url(resource)?;
        tracing::debug!("Fetching catalog resource: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let items: Vec<T> = response.error_for_status()?.json().await?;
        Ok(items)
    }
}

#[async_trait]
impl<C: ConfigProvider> CatalogSource for HttpCatalogSource<C> {
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        self.fetch_resource(self.config.products_resource()).await
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.fetch_resource(self.config.users_resource()).await
    }
}
