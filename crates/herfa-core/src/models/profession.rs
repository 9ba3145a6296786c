//! Trades (professions) offered on the marketplace.

use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder, compare_names, name_contains};

/// Reference list of common trades in Mosul.
pub const COMMON_PROFESSIONS: [&str; 14] = [
    "كهربائي",
    "سباك",
    "نجار",
    "دهان",
    "بناء",
    "ميكانيكي",
    "حداد",
    "لحام",
    "تكييف وتبريد",
    "كهربائي سيارات",
    "ميكانيكي سيارات",
    "نجار ألمنيوم",
    "بلاط وسيراميك",
    "صيانة أجهزة منزلية",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Admin create/update body for `/professions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfessionInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

pub fn active(professions: &[Profession]) -> Vec<Profession> {
    professions.iter().filter(|p| p.is_active).cloned().collect()
}

pub fn search(professions: &[Profession], query: &str) -> Vec<Profession> {
    professions
        .iter()
        .filter(|p| name_contains(&p.name, query))
        .cloned()
        .collect()
}

pub fn sort_by_name(professions: &[Profession], order: SortOrder) -> Vec<Profession> {
    let mut sorted = professions.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_names(&a.name, &b.name)));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profession(id: Id, name: &str, is_active: bool) -> Profession {
        Profession {
            id,
            name: name.to_string(),
            description: None,
            is_active,
        }
    }

    #[test]
    fn test_missing_is_active_defaults_to_true() {
        let p: Profession = serde_json::from_str(r#"{"id":1,"name":"سباك"}"#).unwrap();
        assert!(p.is_active);
    }

    #[test]
    fn test_active_and_search() {
        let list = vec![
            profession(1, "كهربائي", true),
            profession(2, "كهربائي سيارات", false),
            profession(3, "سباك", true),
        ];
        assert_eq!(active(&list).len(), 2);
        let found = search(&list, "كهربائي");
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }
}
