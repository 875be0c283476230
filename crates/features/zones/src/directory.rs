//! Zone-directory model and flattening.
//!
//! The upstream document nests zones under regions; selection UIs want one
//! flat, alphabetically sorted list of zones with their group lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A single selectable group inside a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// A zone as published by the upstream directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ZoneEntry {
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// The full upstream document: region name to zone key to zone entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneDirectory(pub BTreeMap<String, BTreeMap<String, ZoneEntry>>);

/// One entry of the flattened listing, labelled `Region > Zone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FlatZone {
    pub name: String,
    pub groups: Vec<Group>,
}

impl ZoneDirectory {
    /// Flattens the two-level directory into a single list of zones
    /// sorted alphabetically (case-insensitive) by display name.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatZone> {
        let mut flat: Vec<FlatZone> = self
            .0
            .iter()
            .flat_map(|(region, zones)| {
                zones.values().map(move |zone| FlatZone {
                    name: format!("{region} > {}", zone.name),
                    groups: zone.groups.clone(),
                })
            })
            .collect();

        flat.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ZoneDirectory {
        serde_json::from_value(json!({
            "East Region": {
                "alpha": {
                    "name": "Alpha",
                    "groups": [{ "id": "g1", "name": "Group One" }]
                },
                "zulu": { "name": "Zulu", "groups": [] }
            },
            "west region": {
                "bravo": {
                    "name": "bravo",
                    "groups": [
                        { "id": "g2", "name": "Group Two" },
                        { "id": "g3", "name": "Group Three" }
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn flatten_labels_zones_with_their_region() {
        let flat = sample().flatten();
        let names: Vec<&str> = flat.iter().map(|z| z.name.as_str()).collect();
        assert_eq!(names, ["East Region > Alpha", "East Region > Zulu", "west region > bravo"]);
    }

    #[test]
    fn flatten_sorts_case_insensitively() {
        let directory: ZoneDirectory = serde_json::from_value(json!({
            "b region": { "one": { "name": "One", "groups": [] } },
            "A Region": { "two": { "name": "Two", "groups": [] } },
        }))
        .unwrap();

        let names: Vec<String> = directory.flatten().into_iter().map(|z| z.name).collect();
        assert_eq!(names, ["A Region > Two", "b region > One"]);
    }

    #[test]
    fn selected_zone_exposes_exactly_its_groups() {
        let flat = sample().flatten();
        let alpha = flat.iter().find(|z| z.name == "East Region > Alpha").unwrap();
        assert_eq!(alpha.groups, vec![Group { id: "g1".into(), name: "Group One".into() }]);

        let zulu = flat.iter().find(|z| z.name == "East Region > Zulu").unwrap();
        assert!(zulu.groups.is_empty());
    }

    #[test]
    fn missing_groups_field_defaults_to_empty() {
        let directory: ZoneDirectory = serde_json::from_value(json!({
            "Region": { "bare": { "name": "Bare" } },
        }))
        .unwrap();

        assert!(directory.flatten()[0].groups.is_empty());
    }
}
