//! Users, credentials and the auth payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder, compare_dates, compare_names, name_contains};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Worker,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Worker => "worker",
            Self::Admin => "admin",
        }
    }
}

/// A user account as returned by `/users` and `/auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub neighborhood_id: Option<Id>,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(default)]
    pub is_phone_verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Login body. The variant decides which identifier field is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Credentials {
    Email { email: String, password: String },
    Phone { phone: String, password: String },
}

impl Credentials {
    /// Builds credentials from a free-form identifier: anything containing
    /// `@` is an email, everything else a phone number.
    pub fn from_identifier(identifier: &str, password: impl Into<String>) -> Self {
        let password = password.into();
        if identifier.contains('@') {
            Self::Email {
                email: identifier.to_string(),
                password,
            }
        } else {
            Self::Phone {
                phone: identifier.to_string(),
                password,
            }
        }
    }
}

/// Registration body. Required fields depend on the role; the backend
/// enforces that, the client only forwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<Id>,
}

/// Successful login/registration response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// `PATCH /auth/change-password` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Admin create/update body for `/users`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood_id: Option<Id>,
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserStatistics {
    pub total: usize,
    pub clients: usize,
    pub workers: usize,
    pub admins: usize,
    pub verified: usize,
    pub phone_verified: usize,
}

pub fn filter_by_role(users: &[User], role: Role) -> Vec<User> {
    users.iter().filter(|u| u.role == role).cloned().collect()
}

pub fn clients(users: &[User]) -> Vec<User> {
    filter_by_role(users, Role::Client)
}

pub fn workers(users: &[User]) -> Vec<User> {
    filter_by_role(users, Role::Worker)
}

pub fn admins(users: &[User]) -> Vec<User> {
    filter_by_role(users, Role::Admin)
}

pub fn search_by_name(users: &[User], query: &str) -> Vec<User> {
    users
        .iter()
        .filter(|u| name_contains(&u.name, query))
        .cloned()
        .collect()
}

pub fn filter_by_neighborhood(users: &[User], neighborhood_id: Id) -> Vec<User> {
    users
        .iter()
        .filter(|u| u.neighborhood_id == Some(neighborhood_id))
        .cloned()
        .collect()
}

pub fn sort_by_name(users: &[User], order: SortOrder) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_names(&a.name, &b.name)));
    sorted
}

pub fn sort_by_date(users: &[User], order: SortOrder) -> Vec<User> {
    let mut sorted = users.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_dates(a.created_at.as_ref(), b.created_at.as_ref())));
    sorted
}

pub fn statistics(users: &[User]) -> UserStatistics {
    let count = |role| users.iter().filter(|u| u.role == role).count();
    UserStatistics {
        total: users.len(),
        clients: count(Role::Client),
        workers: count(Role::Worker),
        admins: count(Role::Admin),
        verified: users.iter().filter(|u| u.is_email_verified).count(),
        phone_verified: users.iter().filter(|u| u.is_phone_verified).count(),
    }
}
