//! Display label configuration.
//! The hosting apps hard-code French strings; keeping them here lets a
//! host re-localize without touching engine logic. Engine semantics never
//! depend on these labels.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_unknown_worker")]
    pub unknown_worker: String,
    #[serde(default = "default_missing_value")]
    pub missing_value: String,
    #[serde(default = "default_csv_header")]
    pub csv_header: Vec<String>,
    #[serde(default = "default_week_label_prefix")]
    pub week_label_prefix: String,
    #[serde(default = "default_week_label_infix")]
    pub week_label_infix: String,
}

fn default_unknown_worker() -> String {
    "Inconnu".to_string()
}
fn default_missing_value() -> String {
    "N/A".to_string()
}
fn default_csv_header() -> Vec<String> {
    ["Utilisateur", "Poste", "Chantier", "Date", "Heures", "Statut"]
        .map(String::from)
        .to_vec()
}
fn default_week_label_prefix() -> String {
    "Semaine du".to_string()
}
fn default_week_label_infix() -> String {
    "au".to_string()
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            unknown_worker: default_unknown_worker(),
            missing_value: default_missing_value(),
            csv_header: default_csv_header(),
            week_label_prefix: default_week_label_prefix(),
            week_label_infix: default_week_label_infix(),
        }
    }
}

impl Labels {
    /// Load labels from a YAML file; missing keys keep their defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }
}
