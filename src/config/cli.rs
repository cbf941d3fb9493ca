use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "farm-catalog")]
#[command(about = "Group-buy catalog viewer backed by placeholder JSON data")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8080/data")]
    pub base_url: String,

    #[arg(long, default_value = "placeholder-products.json")]
    pub products_resource: String,

    #[arg(long, default_value = "placeholder-users.json")]
    pub users_resource: String,

    #[arg(long, help = "Load source settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_resource(&self) -> &str {
        &self.products_resource
    }

    fn users_resource(&self) -> &str {
        &self.users_resource
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("products_resource", &self.products_resource)?;
        validate_non_empty_string("users_resource", &self.users_resource)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base_url(base_url: &str) -> CliConfig {
        CliConfig {
            base_url: base_url.to_string(),
            products_resource: "placeholder-products.json".to_string(),
            users_resource: "placeholder-users.json".to_string(),
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_http_base_url() {
        assert!(config_with_base_url("http://localhost:8080/data")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        assert!(config_with_base_url("not-a-url").validate().is_err());
        assert!(config_with_base_url("ftp://example.com").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_resource_names() {
        let mut config = config_with_base_url("http://localhost:8080/data");
        config.products_resource = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
