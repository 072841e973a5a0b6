use serde::{Deserialize, Serialize};

/// Directory record for a worker. Read-mostly reference data owned by the
/// directory collaborator; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub role: String,
    pub position: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    #[serde(default)]
    pub site_ids: Vec<String>,
}
