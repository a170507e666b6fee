use crate::errors::{AppError, AppResult};
use crate::geotab::{ApiCall, Transport, request};
use crate::models::{Device, Driver, Foundation, Group};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Loads drivers, groups and devices concurrently into one snapshot.
pub async fn load_foundation<T>(transport: &T, limit: u32) -> AppResult<Foundation>
where
    T: Transport + ?Sized,
{
    let (drivers, groups, devices) = tokio::try_join!(
        get_all::<Driver, _>(transport, request::drivers(limit)),
        get_all::<Group, _>(transport, request::groups(limit)),
        get_all::<Device, _>(transport, request::devices(limit)),
    )
    .map_err(|e| AppError::Foundation(e.to_string()))?;

    debug!(
        drivers = drivers.len(),
        groups = groups.len(),
        devices = devices.len(),
        "foundation data loaded"
    );
    Ok(Foundation::new(drivers, groups, devices))
}

async fn get_all<E, T>(transport: &T, call: ApiCall) -> AppResult<Vec<E>>
where
    E: DeserializeOwned,
    T: Transport + ?Sized,
{
    match transport.call(&call.method, call.params).await? {
        Value::Null => Ok(Vec::new()),
        value => Ok(serde_json::from_value(value)?),
    }
}
