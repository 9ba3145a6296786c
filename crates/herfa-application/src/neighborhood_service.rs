//! Neighborhoods (`/neighborhoods`), with a cached list.

use std::sync::Arc;

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Area, Id, Neighborhood, NeighborhoodInput, neighborhood};
use herfa_infrastructure::{ApiClient, ReferenceCache};

#[derive(Clone)]
pub struct NeighborhoodService {
    client: ApiClient,
    cache: Arc<ReferenceCache<Neighborhood>>,
}

impl NeighborhoodService {
    pub fn new(client: ApiClient, cache: ReferenceCache<Neighborhood>) -> Self {
        Self {
            client,
            cache: Arc::new(cache),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Neighborhood>> {
        self.client.get("/neighborhoods").await
    }

    pub async fn get(&self, id: Id) -> Result<Neighborhood> {
        self.client.get(&format!("/neighborhoods/{}", id)).await
    }

    pub async fn create(&self, input: &NeighborhoodInput) -> Result<Neighborhood> {
        self.client.post("/neighborhoods", input).await
    }

    pub async fn update(&self, id: Id, input: &NeighborhoodInput) -> Result<Neighborhood> {
        self.client
            .patch(&format!("/neighborhoods/{}", id), input)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/neighborhoods/{}", id))
            .await?;
        Ok(())
    }

    /// The full list, served from the local cache while it is fresh.
    pub async fn with_cache(&self, force_refresh: bool) -> Result<Vec<Neighborhood>> {
        self.cache
            .get_with_cache(force_refresh, || self.list_all())
            .await
    }

    pub async fn by_area(&self, area: Area) -> Result<Vec<Neighborhood>> {
        Ok(neighborhood::by_area(&self.list_all().await?, area))
    }

    pub async fn right_bank(&self) -> Result<Vec<Neighborhood>> {
        self.by_area(Area::RightBank).await
    }

    pub async fn left_bank(&self) -> Result<Vec<Neighborhood>> {
        self.by_area(Area::LeftBank).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Neighborhood>> {
        Ok(neighborhood::search(&self.list_all().await?, query))
    }
}
