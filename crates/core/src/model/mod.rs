//! Representative data model.
//!
//! Field names follow the civic information API (camelCase on the wire) so
//! the same types can be decoded straight from an upstream body.

pub mod response;

pub use response::RepresentativeResponse;

use serde::{Deserialize, Serialize};

/// A postal address as returned by the civic information API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub location_name: String,
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// A social media or contact channel for an official.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A government office.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Office {
    pub name: String,
    pub division_id: String,
    pub levels: Vec<String>,
    pub roles: Vec<String>,
    /// Positions in [`LocalReps::officials`] holding this office.
    pub official_indices: Vec<usize>,
}

/// A government official.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Official {
    pub name: String,
    pub address: Vec<Address>,
    pub party: String,
    pub phones: Vec<String>,
    pub photo_url: String,
    pub channels: Vec<Channel>,
}

/// Offices and officials representing an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalReps {
    pub offices: Vec<Office>,
    pub officials: Vec<Official>,
}

impl LocalReps {
    /// Officials holding `office`. Indices outside `officials` are skipped.
    pub fn officials_for<'a>(&'a self, office: &'a Office) -> impl Iterator<Item = &'a Official> + 'a {
        office.official_indices.iter().filter_map(|&idx| self.officials.get(idx))
    }

    /// True when no offices and no officials were found.
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty() && self.officials.is_empty()
    }
}

/// Result of a successful lookup: the representatives plus the canonical
/// form of the address the resolver actually matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    pub reps: LocalReps,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reps() -> LocalReps {
        LocalReps {
            offices: vec![
                Office {
                    name: "Governor".into(),
                    division_id: "ocd-division/country:us/state:ca".into(),
                    levels: vec!["administrativeArea1".into()],
                    roles: vec!["headOfGovernment".into()],
                    official_indices: vec![0],
                },
                Office {
                    name: "U.S. Senator".into(),
                    division_id: "ocd-division/country:us/state:ca".into(),
                    levels: vec!["country".into()],
                    roles: vec!["legislatorUpperBody".into()],
                    official_indices: vec![1, 2, 7],
                },
            ],
            officials: vec![
                Official { name: "Gov".into(), ..Default::default() },
                Official { name: "Senator A".into(), ..Default::default() },
                Official { name: "Senator B".into(), ..Default::default() },
            ],
        }
    }

    #[test]
    fn test_officials_for_office() {
        let reps = sample_reps();
        let names: Vec<&str> = reps.officials_for(&reps.offices[1]).map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Senator A", "Senator B"]);
    }

    #[test]
    fn test_officials_for_single_index() {
        let reps = sample_reps();
        let names: Vec<&str> = reps.officials_for(&reps.offices[0]).map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Gov"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(LocalReps::default().is_empty());
        assert!(!sample_reps().is_empty());
    }

    #[test]
    fn test_channel_type_field() {
        let channel: Channel = serde_json::from_str(r#"{"id": "CAGovernor", "type": "Twitter"}"#).unwrap();
        assert_eq!(channel.kind, "Twitter");

        let json = serde_json::to_value(&channel).unwrap();
        assert_eq!(json["type"], "Twitter");
    }

    #[test]
    fn test_address_missing_fields_default() {
        let addr: Address = serde_json::from_str(r#"{"line1": "1 Main St", "city": "Springfield"}"#).unwrap();
        assert_eq!(addr.line1, "1 Main St");
        assert_eq!(addr.city, "Springfield");
        assert!(addr.zip.is_empty());
    }
}
