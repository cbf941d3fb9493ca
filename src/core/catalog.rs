use crate::domain::model::{Category, Listing, ListingWithOwner, Role, User};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;

/// 快取載入結果:成功時兩個集合都有資料,失敗時兩個都清空
struct LoadState {
    listings: Vec<Listing>,
    users: Vec<User>,
    failure: Option<String>,
}

/// In-memory catalog over the two placeholder resources.
///
/// The load runs at most once per instance. Concurrent callers awaiting the
/// first query share the same in-flight load, so the backing source sees
/// exactly one pair of fetches. A failed load collapses to empty collections
/// and is surfaced as an error only to the first caller that observes it;
/// every later query resolves with empty results.
pub struct Catalog<S: CatalogSource> {
    source: S,
    state: OnceCell<LoadState>,
    load_error_surfaced: AtomicBool,
}

impl<S: CatalogSource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: OnceCell::new(),
            load_error_surfaced: AtomicBool::new(false),
        }
    }

    async fn load(&self) -> Result<(Vec<Listing>, Vec<User>)> {
        let (listings, users) =
            tokio::try_join!(self.source.fetch_listings(), self.source.fetch_users())?;

        tracing::info!(
            "Catalog loaded: {} listings, {} users",
            listings.len(),
            users.len()
        );
        Ok((listings, users))
    }

    async fn ensure_loaded(&self) -> Result<&LoadState> {
        let state = self
            .state
            .get_or_init(|| async {
                match self.load().await {
                    Ok((listings, users)) => LoadState {
                        listings,
                        users,
                        failure: None,
                    },
                    Err(e) => {
                        tracing::error!("Catalog load failed, serving empty catalog: {}", e);
                        LoadState {
                            listings: Vec::new(),
                            users: Vec::new(),
                            failure: Some(e.to_string()),
                        }
                    }
                }
            })
            .await;

        if let Some(message) = &state.failure {
            // 只對第一個查詢回報錯誤,之後一律回空集合
            if !self.load_error_surfaced.swap(true, Ordering::SeqCst) {
                return Err(CatalogError::LoadError {
                    message: message.clone(),
                });
            }
        }

        Ok(state)
    }

    /// Full listing collection, in insertion order.
    pub async fn all_listings(&self) -> Result<Vec<Listing>> {
        let state = self.ensure_loaded().await?;
        Ok(state.listings.clone())
    }

    pub async fn users_by_role(&self, role: Role) -> Result<Vec<User>> {
        let state = self.ensure_loaded().await?;
        Ok(state
            .users
            .iter()
            .filter(|user| user.role == role)
            .cloned()
            .collect())
    }

    pub async fn listings_by_owner(&self, owner_id: &str) -> Result<Vec<Listing>> {
        let state = self.ensure_loaded().await?;

        if owner_id.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(state
            .listings
            .iter()
            .filter(|listing| listing.owner_id == owner_id)
            .cloned()
            .collect())
    }

    pub async fn listings_by_category(&self, category: Category) -> Result<Vec<Listing>> {
        let state = self.ensure_loaded().await?;
        Ok(state
            .listings
            .iter()
            .filter(|listing| listing.category == category)
            .cloned()
            .collect())
    }

    /// Join each listing with its owning user. A dangling `owner_id` is not
    /// an error; it degrades to the fixed placeholder so rendering stays
    /// total.
    pub async fn listings_with_owner(&self) -> Result<Vec<ListingWithOwner>> {
        let state = self.ensure_loaded().await?;

        Ok(state
            .listings
            .iter()
            .map(|listing| {
                let owner = state
                    .users
                    .iter()
                    .find(|user| user.id == listing.owner_id)
                    .cloned()
                    .unwrap_or_else(User::unknown_owner);

                ListingWithOwner {
                    listing: listing.clone(),
                    owner,
                }
            })
            .collect())
    }
}
