use serde::{Deserialize, Serialize};

/// One option of a fixed lookup list (route / transport codes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupItem {
    pub id: String,
    pub label: String,
}

fn numbered(prefix: &str, count: usize) -> Vec<LookupItem> {
    (1..=count)
        .map(|i| LookupItem {
            id: i.to_string(),
            label: format!("{prefix} {i}"),
        })
        .collect()
}

/// The fixed route option set offered by the timesheet form.
pub fn trajets() -> Vec<LookupItem> {
    numbered("Trajet", 12)
}

/// The fixed transport option set offered by the timesheet form.
pub fn transports() -> Vec<LookupItem> {
    numbered("Transport", 12)
}

/// Resolve a lookup reference; empty id means "unset".
pub fn label_of<'a>(items: &'a [LookupItem], id: &str) -> Option<&'a str> {
    if id.is_empty() {
        return None;
    }
    items.iter().find(|it| it.id == id).map(|it| it.label.as_str())
}
