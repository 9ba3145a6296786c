//! Professions (`/professions`), with a cached list.

use std::sync::Arc;

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Id, Profession, ProfessionInput, profession};
use herfa_infrastructure::{ApiClient, ReferenceCache};

#[derive(Clone)]
pub struct ProfessionService {
    client: ApiClient,
    cache: Arc<ReferenceCache<Profession>>,
}

impl ProfessionService {
    pub fn new(client: ApiClient, cache: ReferenceCache<Profession>) -> Self {
        Self {
            client,
            cache: Arc::new(cache),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Profession>> {
        self.client.get("/professions").await
    }

    pub async fn get(&self, id: Id) -> Result<Profession> {
        self.client.get(&format!("/professions/{}", id)).await
    }

    pub async fn create(&self, input: &ProfessionInput) -> Result<Profession> {
        self.client.post("/professions", input).await
    }

    pub async fn update(&self, id: Id, input: &ProfessionInput) -> Result<Profession> {
        self.client.patch(&format!("/professions/{}", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/professions/{}", id))
            .await?;
        Ok(())
    }

    /// The full list, served from the local cache while it is fresh.
    pub async fn with_cache(&self, force_refresh: bool) -> Result<Vec<Profession>> {
        self.cache
            .get_with_cache(force_refresh, || self.list_all())
            .await
    }

    pub async fn active(&self) -> Result<Vec<Profession>> {
        Ok(profession::active(&self.list_all().await?))
    }

    /// Case-insensitive substring search over the names.
    pub async fn search(&self, query: &str) -> Result<Vec<Profession>> {
        Ok(profession::search(&self.list_all().await?, query))
    }
}
