//! Service requests (`/requests`) and status transitions.

use std::time::Duration;

use serde::de::IgnoredAny;

use herfa_core::error::Result;
use herfa_core::models::{CreateServiceRequest, Id, RequestStatus, ServiceRequest, StatusUpdate};
use herfa_infrastructure::ApiClient;

use crate::poller::{self, PollHandle};

/// Partial update body of `PATCH /requests/{id}`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RequestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
}

#[derive(Clone)]
pub struct RequestService {
    client: ApiClient,
    poll_interval: Duration,
}

impl RequestService {
    pub fn new(client: ApiClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    pub async fn create(&self, request: &CreateServiceRequest) -> Result<ServiceRequest> {
        self.client.post("/requests", request).await
    }

    /// Every request (admin only).
    pub async fn list_all(&self) -> Result<Vec<ServiceRequest>> {
        self.client.get("/requests").await
    }

    pub async fn get(&self, id: Id) -> Result<ServiceRequest> {
        self.client.get(&format!("/requests/{}", id)).await
    }

    pub async fn for_client(&self, client_id: Id) -> Result<Vec<ServiceRequest>> {
        self.client.get(&format!("/requests/client/{}", client_id)).await
    }

    pub async fn for_worker(&self, worker_id: Id) -> Result<Vec<ServiceRequest>> {
        self.client.get(&format!("/requests/worker/{}", worker_id)).await
    }

    pub async fn update(&self, id: Id, update: &RequestUpdate) -> Result<ServiceRequest> {
        self.client.patch(&format!("/requests/{}", id), update).await
    }

    pub async fn update_status(&self, id: Id, update: &StatusUpdate) -> Result<ServiceRequest> {
        self.client
            .patch(&format!("/requests/{}/status", id), update)
            .await
    }

    pub async fn accept(&self, id: Id) -> Result<ServiceRequest> {
        self.update_status(id, &StatusUpdate::to(RequestStatus::Accepted))
            .await
    }

    pub async fn reject(&self, id: Id, reason: &str) -> Result<ServiceRequest> {
        self.update_status(id, &StatusUpdate::rejected(reason)).await
    }

    pub async fn complete(&self, id: Id) -> Result<ServiceRequest> {
        self.update_status(id, &StatusUpdate::to(RequestStatus::Completed))
            .await
    }

    pub async fn cancel(&self, id: Id) -> Result<ServiceRequest> {
        self.update_status(id, &StatusUpdate::to(RequestStatus::Cancelled))
            .await
    }

    pub async fn delete(&self, id: Id) -> Result<()> {
        self.client
            .delete::<IgnoredAny>(&format!("/requests/{}", id))
            .await?;
        Ok(())
    }

    /// Polls request `id` at the configured interval until the returned
    /// handle is stopped or dropped.
    pub fn poll_status<F>(&self, id: Id, callback: F) -> PollHandle
    where
        F: Fn(ServiceRequest) + Send + Sync + 'static,
    {
        self.poll_status_every(id, self.poll_interval, callback)
    }

    pub fn poll_status_every<F>(&self, id: Id, interval: Duration, callback: F) -> PollHandle
    where
        F: Fn(ServiceRequest) + Send + Sync + 'static,
    {
        poller::spawn(self.clone(), id, interval, callback)
    }
}
