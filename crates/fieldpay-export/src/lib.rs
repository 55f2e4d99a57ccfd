//! Turns accumulated tallies into the ordered set of export artifacts.

pub mod planner;

pub use planner::{ExportPlan, plan_exports};
