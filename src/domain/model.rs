use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 商品分類:一般團購或剩食減量專區
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Standard,
    SurplusReduction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Buyer,
    VerifiedHost,
    Grower,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "productId")]
    pub id: String,
    #[serde(rename = "type")]
    pub category: Category,
    #[serde(rename = "farmerId")]
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub moq: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    pub id: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_groups: Option<Vec<String>>,
}

impl User {
    /// 查無農友時使用的替代資料,讓每個商品都有可顯示的擁有者
    pub fn unknown_owner() -> Self {
        Self {
            id: String::new(),
            role: Role::Grower,
            name: "Unknown Farmer".to_string(),
            email: String::new(),
            join_date: NaiveDate::default(),
            avatar: "/images/default-avatar.png".to_string(),
            farm_name: None,
            rating: None,
            verification_tier: None,
            managed_groups: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingWithOwner {
    #[serde(flatten)]
    pub listing: Listing,
    pub owner: User,
}
