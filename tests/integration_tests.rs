//! End-to-end walk through a validator's session: scope, resolve the
//! week, build the worklist, inspect a worker, decline an entry, export.

mod common;
use common::{d, march_entries, sites, workers};
use pointage::config::Labels;
use pointage::core::filter::scope_visible;
use pointage::export::{csv, model};
use pointage::{
    Aggregator, Approval, AuthContext, Grouping, PeriodFilter, PeriodResolver, Role, Status,
    ViewMode,
};

#[test]
fn test_validator_week_review_flow() {
    let mut collection = march_entries();
    let workers = workers();
    let labels = Labels::default();
    let ctx = AuthContext::new("v1", None, Role::Validator);

    // the validator sees everything
    let visible = scope_visible(&collection, &workers, &ctx);
    assert_eq!(visible.len(), collection.len());

    // current week worklist
    let period = PeriodResolver::resolve(d("2025-03-19"), ViewMode::Week);
    let weekly = PeriodFilter::for_period(period).apply(&visible);
    let worklist = Grouping::by_worker(&weekly, &workers);
    assert_eq!(worklist[0].pending, 1);

    // open Alice's detail view
    let detail = PeriodFilter::for_period(period)
        .with_worker("w1")
        .apply(&visible);
    let agg = Aggregator::aggregate(&detail);
    assert_eq!(agg.display_total(), 9.0);

    // decline her entry with a note, replace it in the owned collection
    let target = &detail[0];
    let request = Approval::request_decline(target);
    assert_eq!(request.entry_id, target.id);
    let declined = Approval::confirm_decline(target, "signature manquante");
    collection = Approval::replace(&collection, declined);

    let updated = collection.iter().find(|e| e.id == "1").expect("entry 1");
    assert_eq!(updated.status, Status::Declined);
    assert!(updated.notes.ends_with("Note: signature manquante"));

    // the worklist badge drops to zero on the next derivation pass
    let weekly = PeriodFilter::for_period(period).apply(&collection);
    let worklist = Grouping::by_worker(&weekly, &workers);
    assert_eq!(worklist[0].pending, 0);

    // export what was reviewed
    let rows = model::to_rows(&weekly, &workers, &sites(), &labels);
    let out = csv::to_csv_string(&rows, &labels).expect("csv");
    assert!(out.starts_with("Utilisateur,Poste,Chantier,Date,Heures,Statut"));
    assert!(out.contains(r#""Refusé""#));
}
