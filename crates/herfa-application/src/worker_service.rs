//! Worker profiles (`/workers`).

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::latest::LatestRequest;
use herfa_core::models::{Area, Id, Paginated, Worker, WorkerInput, WorkerSearchParams};
use herfa_core::upload::UploadFile;
use herfa_infrastructure::ApiClient;

#[derive(Clone)]
pub struct WorkerService {
    client: ApiClient,
}

impl WorkerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /workers` with only the set parameters in the query string.
    pub async fn search(&self, params: &WorkerSearchParams) -> Result<Paginated<Worker>> {
        self.client.get_with_query("/workers", params).await
    }

    /// Search whose result is dropped (`Ok(None)`) when a newer search was
    /// issued through the same `guard` before this one resolved.
    pub async fn search_latest(
        &self,
        guard: &LatestRequest,
        params: &WorkerSearchParams,
    ) -> Result<Option<Paginated<Worker>>> {
        guard.run(self.search(params)).await.transpose()
    }

    pub async fn get(&self, id: Id) -> Result<Worker> {
        self.client.get(&format!("/workers/{}", id)).await
    }

    pub async fn get_by_user(&self, user_id: Id) -> Result<Worker> {
        self.client.get(&format!("/workers/user/{}", user_id)).await
    }

    pub async fn create(&self, input: &WorkerInput) -> Result<Worker> {
        self.client.post("/workers", input).await
    }

    pub async fn update(&self, id: Id, input: &WorkerInput) -> Result<Worker> {
        self.client.patch(&format!("/workers/{}", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/workers/{}", id))
            .await?;
        Ok(())
    }

    /// Multipart upload with the file in the `image` field.
    pub async fn upload_profile_image(&self, worker_id: Id, image: UploadFile) -> Result<Worker> {
        self.client
            .post_multipart(
                &format!("/workers/upload-profile-image/{}", worker_id),
                vec![("image".to_string(), image)],
                Vec::new(),
            )
            .await
    }

    pub async fn available(&self, params: WorkerSearchParams) -> Result<Paginated<Worker>> {
        self.search(&params.available_only()).await
    }

    pub async fn top_rated(&self, limit: u32) -> Result<Paginated<Worker>> {
        self.search(&WorkerSearchParams::top_rated(limit)).await
    }

    pub async fn by_profession(
        &self,
        profession_id: Id,
        params: WorkerSearchParams,
    ) -> Result<Paginated<Worker>> {
        self.search(&params.with_profession(profession_id)).await
    }

    pub async fn by_neighborhood(
        &self,
        neighborhood_id: Id,
        params: WorkerSearchParams,
    ) -> Result<Paginated<Worker>> {
        self.search(&params.with_neighborhood(neighborhood_id)).await
    }

    pub async fn by_area(&self, area: Area, params: WorkerSearchParams) -> Result<Paginated<Worker>> {
        self.search(&params.with_area(area)).await
    }

    /// Absolute URL of a worker's profile image.
    pub fn profile_image_url(&self, path: Option<&str>) -> Option<String> {
        self.client.asset_url(path)
    }
}
