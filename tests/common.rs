#![allow(dead_code)]
use chrono::NaiveDate;
use pointage::models::site::Site;
use pointage::models::worker::Worker;
use pointage::{Status, TimesheetEntry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Create a temporary output file path inside tempdir and ensure any
/// stale copy is removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pointage_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn worker(id: &str, name: &str, position: &str, agency_id: Option<&str>) -> Worker {
    Worker {
        id: id.to_string(),
        name: name.to_string(),
        role: String::new(),
        position: position.to_string(),
        contact: String::new(),
        email: String::new(),
        address: String::new(),
        agency_id: agency_id.map(str::to_string),
        site_ids: vec![],
    }
}

/// The usual three-worker directory: two from agency "societe1", one
/// unaffiliated.
pub fn workers() -> Vec<Worker> {
    vec![
        worker("w1", "Alice Dupont", "Électricienne", Some("societe1")),
        worker("w2", "Bob Martin", "Plombier", Some("societe1")),
        worker("w3", "Charlie Durand", "Maçon", None),
    ]
}

pub fn sites() -> Vec<Site> {
    vec![
        Site {
            id: "1".to_string(),
            name: "Chantier Paris Centre".to_string(),
            kind: "Chantier".to_string(),
            address: "123 Rue de Rivoli, 75001 Paris".to_string(),
            agency_id: "societe1".to_string(),
        },
        Site {
            id: "2".to_string(),
            name: "Bureau Lyon".to_string(),
            kind: "Bureau".to_string(),
            address: "45 Avenue Jean Jaurès, 69007 Lyon".to_string(),
            agency_id: "societe1".to_string(),
        },
    ]
}

pub fn entry(
    id: &str,
    worker_id: &str,
    date: &str,
    site_id: &str,
    hours: f64,
    hours_sup: f64,
    status: Status,
) -> TimesheetEntry {
    TimesheetEntry {
        id: id.to_string(),
        worker_id: worker_id.to_string(),
        date: d(date),
        site_id: site_id.to_string(),
        hours,
        hours_sup,
        notes: String::new(),
        status,
        panier: false,
        trajet_id: String::new(),
        transport_id: String::new(),
    }
}

/// A small dataset spanning two weeks of March 2025, useful for many
/// tests: two entries inside the week of the 17th, one the week before.
pub fn march_entries() -> Vec<TimesheetEntry> {
    vec![
        entry("1", "w1", "2025-03-17", "1", 8.0, 1.0, Status::Pending),
        entry("2", "w2", "2025-03-18", "2", 7.5, 0.0, Status::Pending),
        entry("3", "w1", "2025-03-10", "3", 9.0, 2.0, Status::Approved),
    ]
}
