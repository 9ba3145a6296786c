//! Reviews left by clients on completed requests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder, compare_dates};
use super::request::{RequestStatus, ServiceRequest};
use super::user::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Id,
    #[serde(default)]
    pub request_id: Option<Id>,
    #[serde(default)]
    pub client_id: Option<Id>,
    #[serde(default)]
    pub worker_id: Option<Id>,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub client: Option<User>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create/update body for `/reviews`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReviewInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Mean rating, `0.0` for an empty slice.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Display form of the mean rating: `"0"` when there are no reviews,
/// otherwise two decimals (`"4.50"`).
pub fn calculate_average_rating(reviews: &[Review]) -> String {
    if reviews.is_empty() {
        return "0".to_string();
    }
    format!("{:.2}", average_rating(reviews))
}

/// Count per star value 1..=5. Out-of-range ratings are ignored.
pub fn group_by_rating(reviews: &[Review]) -> BTreeMap<u8, usize> {
    let mut grouped: BTreeMap<u8, usize> = (1..=5).map(|star| (star, 0)).collect();
    for review in reviews {
        if let Some(count) = grouped.get_mut(&review.rating) {
            *count += 1;
        }
    }
    grouped
}

/// Percentage per star value, rounded to one decimal. All zero when empty.
pub fn rating_distribution(reviews: &[Review]) -> BTreeMap<u8, f64> {
    let total = reviews.len();
    group_by_rating(reviews)
        .into_iter()
        .map(|(star, count)| {
            let pct = if total > 0 {
                (count as f64 / total as f64 * 1000.0).round() / 10.0
            } else {
                0.0
            };
            (star, pct)
        })
        .collect()
}

pub fn filter_by_min_rating(reviews: &[Review], min_rating: u8) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| r.rating >= min_rating)
        .cloned()
        .collect()
}

pub fn sort_by_date(reviews: &[Review], order: SortOrder) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_dates(a.created_at.as_ref(), b.created_at.as_ref())));
    sorted
}

pub fn sort_by_rating(reviews: &[Review], order: SortOrder) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by(|a, b| order.apply(a.rating.cmp(&b.rating)));
    sorted
}

/// Newest `limit` reviews.
pub fn recent(reviews: &[Review], limit: usize) -> Vec<Review> {
    let mut sorted = sort_by_date(reviews, SortOrder::Desc);
    sorted.truncate(limit);
    sorted
}

/// Only completed requests can be reviewed.
pub fn can_review_request(request: &ServiceRequest) -> bool {
    request.status == RequestStatus::Completed
}

/// Star string using `½` for the half star, e.g. `★★★½☆`.
pub fn rating_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5usize.saturating_sub(full + usize::from(half));
    format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    )
}
