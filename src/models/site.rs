use serde::{Deserialize, Serialize};

/// Directory record for a work site. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub address: String,
    pub agency_id: String,
}
