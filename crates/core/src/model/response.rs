//! Raw representatives response body and its conversion into [`Lookup`].

use serde::{Deserialize, Serialize};

use super::{Address, LocalReps, Lookup, Office, Official};

/// Body of a representatives-by-address response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepresentativeResponse {
    pub normalized_input: Address,
    pub offices: Vec<Office>,
    pub officials: Vec<Official>,
}

impl From<RepresentativeResponse> for Lookup {
    fn from(raw: RepresentativeResponse) -> Self {
        Lookup {
            reps: LocalReps { offices: raw.offices, officials: raw.officials },
            address: raw.normalized_input,
        }
    }
}
