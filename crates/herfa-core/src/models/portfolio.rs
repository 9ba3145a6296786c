//! Portfolio images attached to a worker profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Id;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: Id,
    pub worker_id: Id,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update body for `/worker-portfolio`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortfolioInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
