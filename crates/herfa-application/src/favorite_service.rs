//! Saved workers (`/favorites`).

use serde::Serialize;
use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{Favorite, Id, ToggleOutcome};
use herfa_infrastructure::ApiClient;

#[derive(Serialize)]
struct AddFavorite {
    worker_id: Id,
}

#[derive(Clone)]
pub struct FavoriteService {
    client: ApiClient,
}

impl FavoriteService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn add(&self, worker_id: Id) -> Result<Favorite> {
        self.client
            .post("/favorites", &AddFavorite { worker_id })
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<Favorite>> {
        self.client.get("/favorites").await
    }

    pub async fn get(&self, id: Id) -> Result<Favorite> {
        self.client.get(&format!("/favorites/{}", id)).await
    }

    pub async fn for_client(&self, client_id: Id) -> Result<Vec<Favorite>> {
        self.client
            .get(&format!("/favorites/client/{}", client_id))
            .await
    }

    /// The client's favorite for `worker_id`, or `None` when the backend
    /// answers 404.
    pub async fn is_worker_favorited(&self, client_id: Id, worker_id: Id) -> Result<Option<Favorite>> {
        match self
            .client
            .get(&format!("/favorites/client/{}/worker/{}", client_id, worker_id))
            .await
        {
            Ok(favorite) => Ok(Some(favorite)),
            Err(e) if e.is_not_found_error() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn update<B>(&self, id: Id, body: &B) -> Result<Favorite>
    where
        B: Serialize + ?Sized,
    {
        self.client.patch(&format!("/favorites/{}", id), body).await
    }

    pub async fn remove(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/favorites/{}", id))
            .await?;
        Ok(())
    }

    /// Removes the favorite if present, adds it otherwise.
    pub async fn toggle(&self, client_id: Id, worker_id: Id) -> Result<ToggleOutcome> {
        match self.is_worker_favorited(client_id, worker_id).await? {
            Some(favorite) => {
                self.remove(favorite.id).await?;
                Ok(ToggleOutcome::Removed)
            }
            None => Ok(ToggleOutcome::Added(self.add(worker_id).await?)),
        }
    }

    pub async fn favorite_worker_ids(&self, client_id: Id) -> Result<Vec<Id>> {
        let favorites = self.for_client(client_id).await?;
        Ok(favorites.into_iter().map(|f| f.worker_id).collect())
    }
}
