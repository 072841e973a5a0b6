pub mod aggregate;
pub mod approval;
pub mod filter;
pub mod grouping;
pub mod period;
pub mod submit;
