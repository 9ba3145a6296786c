//! User administration (`/users`).

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Id, User, UserInput};
use herfa_infrastructure::ApiClient;

#[derive(Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, input: &UserInput) -> Result<User> {
        self.client.post("/users", input).await
    }

    pub async fn list_all(&self) -> Result<Vec<User>> {
        self.client.get("/users").await
    }

    pub async fn get(&self, id: Id) -> Result<User> {
        self.client.get(&format!("/users/{}", id)).await
    }

    pub async fn update(&self, id: Id, input: &UserInput) -> Result<User> {
        self.client.patch(&format!("/users/{}", id), input).await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/users/{}", id))
            .await?;
        Ok(())
    }
}
