use crate::core::planner::TimeWindow;
use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::{Value, json};

/// Fields the aggregators read from a duty-status log.
pub const LOG_FIELDS: [&str; 11] = [
    "id",
    "driver",
    "coDriver",
    "device",
    "status",
    "dutyStatus",
    "dateTime",
    "verifyDateTime",
    "elapsedDuration",
    "annotations",
    "annotation",
];

/// One `(method, params)` pair of a multi-call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiCall {
    pub method: String,
    pub params: Value,
}

impl ApiCall {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// `Get` call for an entity type.
    pub fn get(type_name: &str, search: Option<Value>, results_limit: u32) -> Self {
        let mut params = json!({
            "typeName": type_name,
            "resultsLimit": results_limit,
        });
        if let Some(search) = search {
            params["search"] = search;
        }
        Self::new("Get", params)
    }
}

/// Logs of one driver inside one time window.
pub fn duty_status_logs(driver_id: &str, window: &TimeWindow, results_limit: u32) -> ApiCall {
    ApiCall::new(
        "Get",
        json!({
            "typeName": "DutyStatusLog",
            "search": {
                "userSearch": { "id": driver_id },
                "fromDate": window.from.to_rfc3339_opts(SecondsFormat::Millis, true),
                "toDate": window.to.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
            "resultsLimit": results_limit,
            "propertySelector": { "fields": LOG_FIELDS },
        }),
    )
}

pub fn drivers(results_limit: u32) -> ApiCall {
    ApiCall::get("User", Some(json!({ "isDriver": true })), results_limit)
}

pub fn groups(results_limit: u32) -> ApiCall {
    ApiCall::get("Group", None, results_limit)
}

pub fn devices(results_limit: u32) -> ApiCall {
    ApiCall::get("Device", None, results_limit)
}
