use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_PRODUCTS_RESOURCE: &str = "placeholder-products.json";
const DEFAULT_USERS_RESOURCE: &str = "placeholder-users.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub base_url: String,
    pub products_resource: Option<String>,
    pub users_resource: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }
}

impl ConfigProvider for FileConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn products_resource(&self) -> &str {
        self.source
            .products_resource
            .as_deref()
            .unwrap_or(DEFAULT_PRODUCTS_RESOURCE)
    }

    fn users_resource(&self) -> &str {
        self.source
            .users_resource
            .as_deref()
            .unwrap_or(DEFAULT_USERS_RESOURCE)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.source.base_url)?;
        validate_non_empty_string("source.products_resource", self.products_resource())?;
        validate_non_empty_string("source.users_resource", self.users_resource())?;
        Ok(())
    }
}
