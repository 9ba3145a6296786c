//! Worker portfolio images (`/worker-portfolio`).

use futures::future::try_join_all;
use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Id, PortfolioInput, PortfolioItem};
use herfa_core::upload::UploadFile;
use herfa_infrastructure::ApiClient;

#[derive(Clone)]
pub struct PortfolioService {
    client: ApiClient,
}

impl PortfolioService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_all(&self) -> Result<Vec<PortfolioItem>> {
        self.client.get("/worker-portfolio").await
    }

    pub async fn get(&self, id: Id) -> Result<PortfolioItem> {
        self.client.get(&format!("/worker-portfolio/{}", id)).await
    }

    pub async fn for_worker(&self, worker_id: Id) -> Result<Vec<PortfolioItem>> {
        self.client
            .get(&format!("/worker-portfolio/worker/{}", worker_id))
            .await
    }

    pub async fn create(&self, input: &PortfolioInput) -> Result<PortfolioItem> {
        self.client.post("/worker-portfolio", input).await
    }

    pub async fn update(&self, id: Id, input: &PortfolioInput) -> Result<PortfolioItem> {
        self.client
            .patch(&format!("/worker-portfolio/{}", id), input)
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/worker-portfolio/{}", id))
            .await?;
        Ok(())
    }

    /// Uploads one image (`image` field). An empty description is not sent.
    pub async fn upload_image(
        &self,
        worker_id: Id,
        image: UploadFile,
        description: Option<&str>,
    ) -> Result<PortfolioItem> {
        let fields = description
            .filter(|d| !d.is_empty())
            .map(|d| vec![("description".to_string(), d.to_string())])
            .unwrap_or_default();
        self.client
            .post_multipart(
                &format!("/worker-portfolio/upload/{}", worker_id),
                vec![("image".to_string(), image)],
                fields,
            )
            .await
    }

    /// Uploads all images concurrently; fails if any upload fails.
    ///
    /// `descriptions[i]` belongs to `images[i]`; missing entries send none.
    pub async fn upload_many(
        &self,
        worker_id: Id,
        images: Vec<UploadFile>,
        descriptions: &[String],
    ) -> Result<Vec<PortfolioItem>> {
        let uploads = images.into_iter().enumerate().map(|(i, image)| {
            let description = descriptions.get(i).map(String::as_str);
            self.upload_image(worker_id, image, description)
        });
        try_join_all(uploads).await
    }

    pub fn image_url(&self, path: Option<&str>) -> Option<String> {
        self.client.asset_url(path)
    }
}
