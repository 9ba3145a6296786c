//! Worker profiles and the search parameters of `GET /workers`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder};
use super::neighborhood::{Area, Neighborhood};
use super::profession::Profession;
use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Id,
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub profession_id: Option<Id>,
    #[serde(default)]
    pub neighborhood_id: Option<Id>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub whatsapp_number: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub profession: Option<Profession>,
    #[serde(default)]
    pub neighborhood: Option<Neighborhood>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update body for `/workers`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Sort key accepted by the worker search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerSort {
    Rating,
    Experience,
    Jobs,
    Name,
    Recent,
}

/// Query parameters of `GET /workers`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkerSearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<WorkerSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl WorkerSearchParams {
    pub fn with_profession(mut self, profession_id: Id) -> Self {
        self.profession_id = Some(profession_id);
        self
    }

    pub fn with_neighborhood(mut self, neighborhood_id: Id) -> Self {
        self.neighborhood_id = Some(neighborhood_id);
        self
    }

    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    pub fn available_only(mut self) -> Self {
        self.is_available = Some(true);
        self
    }

    /// Top-rated preset: rating descending, rating >= 4.
    pub fn top_rated(limit: u32) -> Self {
        Self {
            sort: Some(WorkerSort::Rating),
            order: Some(SortOrder::Desc),
            limit: Some(limit),
            min_rating: Some(4.0),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_params_are_not_serialized() {
        let params = WorkerSearchParams {
            profession_id: Some(3),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"profession_id": 3, "page": 2})
        );
    }

    #[test]
    fn test_top_rated_preset() {
        let value = serde_json::to_value(WorkerSearchParams::top_rated(5)).unwrap();
        assert_eq!(
            value,
            json!({"sort": "rating", "order": "DESC", "limit": 5, "min_rating": 4.0})
        );
    }

    #[test]
    fn test_partial_worker_row_loads() {
        let worker: Worker = serde_json::from_str(
            r#"{"id":9,"is_available":true,"average_rating":4.5,"profession":{"id":1,"name":"نجار"}}"#,
        )
        .unwrap();
        assert_eq!(worker.id, 9);
        assert!(worker.is_available);
        assert_eq!(worker.profession.unwrap().name, "نجار");
        assert_eq!(worker.experience_years, 0);
    }
}
