use serde::{Deserialize, Serialize};

/// Display-ready projection of one duty-status log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRow {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub date_time: Option<String>,
    pub status: String,
    pub is_verified: bool,
    pub verified_label: String,
    pub co_driver_id: Option<String>,
    pub co_driver_name: String,
    pub hours: String,
    pub device_id: Option<String>,
    pub device: String,
    pub annotation: String,
}

pub const VERIFIED_LABEL: &str = "Verified";
pub const UNVERIFIED_LABEL: &str = "Unverified";

pub fn verified_label(verified: bool) -> &'static str {
    if verified {
        VERIFIED_LABEL
    } else {
        UNVERIFIED_LABEL
    }
}
