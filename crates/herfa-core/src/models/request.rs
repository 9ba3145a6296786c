//! Service requests sent by clients to workers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Id;
use super::user::User;
use super::worker::Worker;

/// Lifecycle: pending -> accepted | rejected, accepted -> completed,
/// pending | accepted -> cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub id: Id,
    #[serde(default)]
    pub client_id: Option<Id>,
    #[serde(default)]
    pub worker_id: Option<Id>,
    #[serde(default)]
    pub problem_description: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub rejected_reason: Option<String>,
    #[serde(default)]
    pub client: Option<User>,
    #[serde(default)]
    pub worker: Option<Worker>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// `POST /requests` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateServiceRequest {
    pub worker_id: Id,
    pub problem_description: String,
}

/// `PATCH /requests/{id}/status` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_reason: Option<String>,
}

impl StatusUpdate {
    pub fn to(status: RequestStatus) -> Self {
        Self {
            status,
            rejected_reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            status: RequestStatus::Rejected,
            rejected_reason: Some(reason.into()),
        }
    }
}

/// Requests whose status equals `status`, in their original order.
pub fn filter_by_status(requests: &[ServiceRequest], status: RequestStatus) -> Vec<ServiceRequest> {
    requests
        .iter()
        .filter(|r| r.status == status)
        .cloned()
        .collect()
}

pub fn pending(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    filter_by_status(requests, RequestStatus::Pending)
}

pub fn accepted(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    filter_by_status(requests, RequestStatus::Accepted)
}

pub fn completed(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    filter_by_status(requests, RequestStatus::Completed)
}

pub fn rejected(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    filter_by_status(requests, RequestStatus::Rejected)
}

pub fn cancelled(requests: &[ServiceRequest]) -> Vec<ServiceRequest> {
    filter_by_status(requests, RequestStatus::Cancelled)
}
