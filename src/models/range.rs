use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Half-open query range `[from, to)` with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RangeBounds {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TryFrom<RangeBounds> for DateRange {
    type Error = AppError;

    fn try_from(b: RangeBounds) -> AppResult<Self> {
        DateRange::new(b.from, b.to)
    }
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> AppResult<Self> {
        if from >= to {
            return Err(AppError::InvalidRange(format!(
                "start {} must be before end {}",
                from.to_rfc3339(),
                to.to_rfc3339()
            )));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }
}
