//! Reviews (`/reviews`).

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Id, Review, ReviewInput};
use herfa_infrastructure::ApiClient;

#[derive(Clone)]
pub struct ReviewService {
    client: ApiClient,
}

impl ReviewService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Reviews a completed request (client only).
    pub async fn create(&self, input: &ReviewInput) -> Result<Review> {
        self.client.post("/reviews", input).await
    }

    pub async fn list_all(&self) -> Result<Vec<Review>> {
        self.client.get("/reviews").await
    }

    pub async fn get(&self, id: Id) -> Result<Review> {
        self.client.get(&format!("/reviews/{}", id)).await
    }

    pub async fn for_worker(&self, worker_id: Id) -> Result<Vec<Review>> {
        self.client.get(&format!("/reviews/worker/{}", worker_id)).await
    }

    pub async fn update(&self, id: Id, input: &ReviewInput) -> Result<Review> {
        self.client.patch(&format!("/reviews/{}", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/reviews/{}", id))
            .await?;
        Ok(())
    }
}
