//! Lookups into the worker and site directories, with explicit fallbacks
//! for dangling references instead of accidental null propagation.

use crate::config::Labels;
use crate::models::site::Site;
use crate::models::worker::Worker;

pub fn find_worker<'a>(workers: &'a [Worker], id: &str) -> Option<&'a Worker> {
    workers.iter().find(|w| w.id == id)
}

pub fn find_site<'a>(sites: &'a [Site], id: &str) -> Option<&'a Site> {
    sites.iter().find(|s| s.id == id)
}

/// Display name of a worker, or the configured unknown label ("Inconnu")
/// for a dangling reference.
pub fn worker_name<'a>(workers: &'a [Worker], id: &str, labels: &'a Labels) -> &'a str {
    find_worker(workers, id)
        .map(|w| w.name.as_str())
        .unwrap_or(labels.unknown_worker.as_str())
}

/// Position of a worker, or the configured placeholder ("N/A").
pub fn worker_position<'a>(workers: &'a [Worker], id: &str, labels: &'a Labels) -> &'a str {
    find_worker(workers, id)
        .map(|w| w.position.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or(labels.missing_value.as_str())
}

/// Site display name; dangling site references fall back to the raw id,
/// which is what the screens historically rendered.
pub fn site_name<'a>(sites: &'a [Site], id: &'a str) -> &'a str {
    find_site(sites, id).map(|s| s.name.as_str()).unwrap_or(id)
}

/// Workers affiliated with an agency, in directory order.
pub fn workers_of_agency<'a>(workers: &'a [Worker], agency_id: &str) -> Vec<&'a Worker> {
    workers
        .iter()
        .filter(|w| w.agency_id.as_deref() == Some(agency_id))
        .collect()
}

/// Sites of an agency, in directory order.
pub fn sites_of_agency<'a>(sites: &'a [Site], agency_id: &str) -> Vec<&'a Site> {
    sites.iter().filter(|s| s.agency_id == agency_id).collect()
}
