pub mod context;
pub mod lookup;
pub mod period;
pub mod site;
pub mod status;
pub mod timesheet;
pub mod worker;
