//! Fetch pipeline and report aggregation.
//!
//! planner → executor (→ filter per page) → summary / log_rows.

pub mod cancel;
pub mod executor;
pub mod filter;
pub mod foundation;
pub mod kpi;
pub mod log_rows;
pub mod lookup;
pub mod planner;
pub mod range;
pub mod selection;
pub mod summary;
pub mod view;

pub use cancel::{FetchController, Interrupt};
pub use executor::{FetchOutcome, FetchProgress, FetchSettings, LogFetcher};
pub use foundation::load_foundation;
pub use kpi::FleetKpis;
pub use log_rows::build_log_rows;
pub use planner::{FetchPlan, TimeWindow, WorkUnit};
pub use range::{Preset, resolve_range};
pub use selection::DriverFilter;
pub use summary::build_fleet_summary;
