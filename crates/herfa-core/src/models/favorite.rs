//! Workers a client has saved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder, compare_dates};
use super::worker::Worker;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: Id,
    #[serde(default)]
    pub client_id: Option<Id>,
    pub worker_id: Id,
    #[serde(default)]
    pub worker: Option<Worker>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of toggling a favorite.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Added(Favorite),
    Removed,
}

pub fn is_in_favorites(favorites: &[Favorite], worker_id: Id) -> bool {
    favorites.iter().any(|f| f.worker_id == worker_id)
}

pub fn sort_by_date(favorites: &[Favorite], order: SortOrder) -> Vec<Favorite> {
    let mut sorted = favorites.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_dates(a.created_at.as_ref(), b.created_at.as_ref())));
    sorted
}

pub fn filter_by_profession(favorites: &[Favorite], profession_id: Id) -> Vec<Favorite> {
    favorites
        .iter()
        .filter(|f| f.worker.as_ref().and_then(|w| w.profession_id) == Some(profession_id))
        .cloned()
        .collect()
}

pub fn filter_by_min_rating(favorites: &[Favorite], min_rating: f64) -> Vec<Favorite> {
    favorites
        .iter()
        .filter(|f| f.worker.as_ref().is_some_and(|w| w.average_rating >= min_rating))
        .cloned()
        .collect()
}

pub fn available_only(favorites: &[Favorite]) -> Vec<Favorite> {
    favorites
        .iter()
        .filter(|f| f.worker.as_ref().is_some_and(|w| w.is_available))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: Id, worker: serde_json::Value) -> Favorite {
        let worker: Worker = serde_json::from_value(worker).unwrap();
        Favorite {
            id,
            client_id: Some(1),
            worker_id: worker.id,
            worker: Some(worker),
            created_at: None,
        }
    }

    #[test]
    fn test_filters_on_embedded_worker() {
        let favorites = vec![
            favorite(1, serde_json::json!({"id": 10, "profession_id": 2, "average_rating": 4.8, "is_available": true})),
            favorite(2, serde_json::json!({"id": 11, "profession_id": 3, "average_rating": 3.1})),
            Favorite { id: 3, client_id: None, worker_id: 12, worker: None, created_at: None },
        ];
        assert_eq!(filter_by_profession(&favorites, 2)[0].id, 1);
        assert_eq!(filter_by_min_rating(&favorites, 3.0).len(), 2);
        assert_eq!(available_only(&favorites).len(), 1);
        assert!(is_in_favorites(&favorites, 12));
        assert!(!is_in_favorites(&favorites, 99));
    }
}
