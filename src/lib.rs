//! Pointage library root.
//! A pure, synchronous timesheet engine: period resolution, filtering,
//! aggregation, per-worker grouping, the approval state machine and flat
//! exports. The hosting UI owns the timesheet collection; every operation
//! here either derives a value from it or returns an updated copy.

pub mod config;
pub mod core;
pub mod directory;
pub mod errors;
pub mod export;
pub mod models;
pub mod utils;

pub use crate::config::Labels;
pub use crate::core::aggregate::{Aggregates, Aggregator};
pub use crate::core::approval::{Approval, DeclineRequest};
pub use crate::core::filter::PeriodFilter;
pub use crate::core::grouping::{Grouping, WorkerPending};
pub use crate::core::period::PeriodResolver;
pub use crate::core::submit::Lifecycle;
pub use crate::errors::{AppError, AppResult};
pub use crate::models::context::{AuthContext, Role};
pub use crate::models::period::{Period, ViewMode};
pub use crate::models::status::Status;
pub use crate::models::timesheet::{TimesheetDraft, TimesheetEntry};
