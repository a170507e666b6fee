pub mod driver;
pub mod duty_status;
pub mod fleet_row;
pub mod foundation;
pub mod log;
pub mod log_row;
pub mod range;
pub mod snapshot;

pub use driver::{Device, Driver, EntityRef, Group};
pub use duty_status::DutyStatus;
pub use fleet_row::FleetRow;
pub use foundation::Foundation;
pub use log::{Annotation, DutyStatusLog};
pub use log_row::LogRow;
pub use range::DateRange;
pub use snapshot::Snapshot;
