use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::geotab::{ApiCall, Transport};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, trace};

/// `path` value meaning "keep talking to the server you authenticated on".
const THIS_SERVER: &str = "ThisServer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub database: String,
    pub user_name: String,
    pub session_id: String,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<RpcErrorDetail>,
}

#[derive(Deserialize)]
struct RpcErrorDetail {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<RpcError> for AppError {
    fn from(e: RpcError) -> Self {
        let detail = e.errors.into_iter().next();
        let name = e
            .name
            .or_else(|| detail.as_ref().and_then(|d| d.name.clone()))
            .unwrap_or_else(|| "JSONRPCError".to_string());
        let message = detail
            .and_then(|d| d.message)
            .or(e.message)
            .unwrap_or_else(|| "unknown error".to_string());
        AppError::Api { name, message }
    }
}

#[derive(Deserialize)]
struct AuthResult {
    credentials: Credentials,
    #[serde(default)]
    path: Option<String>,
}

/// JSON-RPC client bound to an authenticated session.
#[derive(Clone)]
pub struct GeotabClient {
    http: HttpClient,
    endpoint: String,
    credentials: Credentials,
}

impl GeotabClient {
    /// Authenticate with the server, database and user from the config.
    pub async fn connect(cfg: &Config) -> AppResult<Self> {
        cfg.require_credentials()?;
        let password = cfg.resolve_password()?;

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Self::authenticate(http, &cfg.server, &cfg.database, &cfg.username, &password).await
    }

    pub async fn authenticate(
        http: HttpClient,
        server: &str,
        database: &str,
        username: &str,
        password: &str,
    ) -> AppResult<Self> {
        let endpoint = endpoint_for(server);
        debug!(%endpoint, database, username, "authenticating");

        let params = json!({
            "database": database,
            "userName": username,
            "password": password,
        });
        let result = post(&http, &endpoint, "Authenticate", params)
            .await
            .map_err(|e| match e {
                AppError::Api { name, message } => AppError::Auth(format!("{name}: {message}")),
                other => other,
            })?;
        let auth: AuthResult = serde_json::from_value(result)?;

        let endpoint = match auth.path.as_deref() {
            Some(path) if !path.is_empty() && path != THIS_SERVER => endpoint_for(path),
            _ => endpoint,
        };
        debug!(%endpoint, "session established");

        Ok(Self {
            http,
            endpoint,
            credentials: auth.credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn with_credentials(&self, mut params: Value) -> AppResult<Value> {
        match params.as_object_mut() {
            Some(map) => {
                map.insert(
                    "credentials".to_string(),
                    serde_json::to_value(&self.credentials)?,
                );
                Ok(params)
            }
            None => Err(AppError::Response(
                "call parameters must be a JSON object".into(),
            )),
        }
    }
}

#[async_trait]
impl Transport for GeotabClient {
    async fn call(&self, method: &str, params: Value) -> AppResult<Value> {
        let params = self.with_credentials(params)?;
        post(&self.http, &self.endpoint, method, params).await
    }

    async fn multi_call(&self, calls: Vec<ApiCall>) -> AppResult<Vec<Value>> {
        let expected = calls.len();
        let params = self.with_credentials(json!({ "calls": calls }))?;
        let result = post(&self.http, &self.endpoint, "ExecuteMultiCall", params).await?;

        match result {
            Value::Array(items) if items.len() == expected => Ok(items),
            Value::Array(items) => Err(AppError::Response(format!(
                "multi-call returned {} results for {} calls",
                items.len(),
                expected
            ))),
            other => Err(AppError::Response(format!(
                "multi-call returned a non-array result: {other}"
            ))),
        }
    }
}

async fn post(http: &HttpClient, endpoint: &str, method: &str, params: Value) -> AppResult<Value> {
    trace!(method, "rpc call");
    let resp: RpcResponse = http
        .post(endpoint)
        .json(&json!({ "method": method, "params": params }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if let Some(err) = resp.error {
        return Err(err.into());
    }
    Ok(resp.result.unwrap_or(Value::Null))
}

/// `my.geotab.com` → `https://my.geotab.com/apiv1`; explicit schemes are kept.
fn endpoint_for(server: &str) -> String {
    let server = server.trim().trim_end_matches('/');
    if server.starts_with("http://") || server.starts_with("https://") {
        format!("{server}/apiv1")
    } else {
        format!("https://{server}/apiv1")
    }
}

