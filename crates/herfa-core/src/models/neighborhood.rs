//! Mosul neighborhoods and the two river banks they belong to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{Id, SortOrder, compare_names, name_contains};

/// Side of the Tigris a neighborhood lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "الساحل الأيمن")]
    RightBank,
    #[serde(rename = "الساحل الأيسر")]
    LeftBank,
}

impl Area {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RightBank => "الساحل الأيمن",
            Self::LeftBank => "الساحل الأيسر",
        }
    }
}

pub const COMMON_RIGHT_BANK: [&str; 10] = [
    "الكرامة",
    "الوحدة",
    "المثنى",
    "الزهراء",
    "الشفاء",
    "الرفاعي",
    "الزنجيلي",
    "المهندسين",
    "الصحة",
    "الجامعة",
];

pub const COMMON_LEFT_BANK: [&str; 10] = [
    "الشورة",
    "باب الطوب",
    "الدواسة",
    "باب البيض",
    "الشفاء",
    "النبي شيت",
    "الميدان",
    "باب لكش",
    "الرسالة",
    "الفاروق",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: Id,
    pub name: String,
    pub area: Area,
}

/// Admin create/update body for `/neighborhoods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NeighborhoodInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
}

pub fn by_area(neighborhoods: &[Neighborhood], area: Area) -> Vec<Neighborhood> {
    neighborhoods
        .iter()
        .filter(|n| n.area == area)
        .cloned()
        .collect()
}

pub fn search(neighborhoods: &[Neighborhood], query: &str) -> Vec<Neighborhood> {
    neighborhoods
        .iter()
        .filter(|n| name_contains(&n.name, query))
        .cloned()
        .collect()
}

pub fn sort_by_name(neighborhoods: &[Neighborhood], order: SortOrder) -> Vec<Neighborhood> {
    let mut sorted = neighborhoods.to_vec();
    sorted.sort_by(|a, b| order.apply(compare_names(&a.name, &b.name)));
    sorted
}

/// Groups by area, keeping the input order inside each group.
pub fn group_by_area(neighborhoods: &[Neighborhood]) -> BTreeMap<Area, Vec<Neighborhood>> {
    let mut grouped: BTreeMap<Area, Vec<Neighborhood>> = BTreeMap::new();
    for neighborhood in neighborhoods {
        grouped
            .entry(neighborhood.area)
            .or_default()
            .push(neighborhood.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_uses_arabic_names() {
        let n: Neighborhood =
            serde_json::from_str(r#"{"id":7,"name":"الدواسة","area":"الساحل الأيسر"}"#).unwrap();
        assert_eq!(n.area, Area::LeftBank);
        assert_eq!(
            serde_json::to_string(&Area::RightBank).unwrap(),
            "\"الساحل الأيمن\""
        );
    }

    #[test]
    fn test_group_by_area_preserves_order() {
        let list = vec![
            Neighborhood { id: 1, name: "الزهراء".into(), area: Area::RightBank },
            Neighborhood { id: 2, name: "الشورة".into(), area: Area::LeftBank },
            Neighborhood { id: 3, name: "الكرامة".into(), area: Area::RightBank },
        ];
        let grouped = group_by_area(&list);
        let right: Vec<Id> = grouped[&Area::RightBank].iter().map(|n| n.id).collect();
        assert_eq!(right, vec![1, 3]);
        assert_eq!(grouped[&Area::LeftBank].len(), 1);
        assert_eq!(by_area(&list, Area::LeftBank)[0].id, 2);
    }
}
