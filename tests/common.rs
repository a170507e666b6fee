#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use async_trait::async_trait;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use dlverify::errors::{AppError, AppResult};
use dlverify::export::snapshot;
use dlverify::geotab::{ApiCall, Transport};
use dlverify::models::{DateRange, Device, Driver, DutyStatusLog, EntityRef, Foundation, Group, Snapshot};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use tokio::time::Instant;

pub fn dlv() -> Command {
    cargo_bin_cmd!("dlverify")
}

/// Binary pointed at a config file that does not exist, so the user's own
/// configuration never leaks into a test.
pub fn dlv_isolated(name: &str) -> Command {
    let cfg = temp_out(&format!("{name}_cfg"), "conf");
    let mut cmd = dlv();
    cmd.args(["--config", &cfg]);
    cmd
}

/// Binary wired to a local server through a generated config file.
/// Proxy variables are cleared so requests really reach 127.0.0.1.
pub fn dlv_against(name: &str, server: &str) -> Command {
    let cfg = temp_out(&format!("{name}_cfg"), "conf");
    let yaml = format!(
        "server: \"{server}\"\ndatabase: demo\nusername: tester\npassword: secret\nbatch_delay_ms: 0\nrequest_timeout_secs: 10\n"
    );
    fs::write(&cfg, yaml).expect("write config");

    let mut cmd = dlv();
    cmd.args(["--config", &cfg]);
    for var in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd.env_remove("DLVERIFY_PASSWORD");
    cmd.env("NO_PROXY", "127.0.0.1");
    cmd
}

type Answer = Arc<dyn Fn(&str, &Value) -> Value + Send + Sync>;

/// Local JSON-RPC endpoint for the binary tests, served by axum on its own
/// runtime thread. Every request is answered by `answer(method, params)`.
/// Returns the base URL to put in `server`.
pub fn spawn_rpc_server<F>(answer: F) -> String
where
    F: Fn(&str, &Value) -> Value + Send + Sync + 'static,
{
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind local port");
    listener.set_nonblocking(true).expect("non-blocking listener");
    let addr = listener.local_addr().expect("local addr");
    let answer: Answer = Arc::new(answer);

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("server runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            let app = Router::new()
                .route("/apiv1", post(rpc_handler))
                .with_state(answer);
            let _ = axum::serve(listener, app).await;
        });
    });
    format!("http://{addr}")
}

async fn rpc_handler(State(answer): State<Answer>, Json(request): Json<Value>) -> Json<Value> {
    let method = request["method"].as_str().unwrap_or_default();
    Json(answer(method, &request["params"]))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("dlverify_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

pub fn range(from: &str, to: &str) -> DateRange {
    DateRange::new(ts(from), ts(to)).expect("valid range")
}

pub fn driver(id: &str, first: &str, last: &str) -> Driver {
    Driver {
        id: id.to_string(),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        is_driver: Some(true),
        ..Driver::default()
    }
}

pub fn driver_in(id: &str, first: &str, last: &str, groups: &[&str]) -> Driver {
    Driver {
        company_groups: Some(groups.iter().map(|g| EntityRef::new(*g)).collect()),
        ..driver(id, first, last)
    }
}

/// `n` drivers named d0..d{n-1}.
pub fn drivers(n: usize) -> Vec<Driver> {
    (0..n).map(|i| driver(&format!("d{i}"), "Driver", &i.to_string())).collect()
}

pub fn log_json(id: &str, driver_id: Option<&str>, status: &str, verify: Option<&str>) -> Value {
    let mut v = json!({
        "id": id,
        "status": status,
        "dateTime": "2025-03-14T12:00:00Z",
    });
    if let Some(d) = driver_id {
        v["driver"] = json!({ "id": d });
    }
    if let Some(t) = verify {
        v["verifyDateTime"] = json!(t);
    }
    v
}

pub fn log(id: &str, driver_id: &str, status: &str, verified: bool) -> DutyStatusLog {
    let verify = if verified {
        "2025-03-15T08:00:00Z"
    } else {
        "0001-01-01T00:00:00Z"
    };
    serde_json::from_value(log_json(id, Some(driver_id), status, Some(verify))).expect("log")
}

/// Small fleet used by the CLI tests: three drivers, two groups, five logs.
pub fn sample_snapshot() -> Snapshot {
    let drivers = vec![
        driver_in("d1", "Alice", "Smith", &["g-north"]),
        driver_in("d2", "Bob", "Jones", &["g-south"]),
        driver_in("d3", "Carol", "Diaz, Jr.", &["g-north"]),
    ];
    let groups = vec![
        Group { id: "g-north".into(), name: Some("North Yard".into()) },
        Group { id: "g-south".into(), name: Some("South Yard".into()) },
        Group { id: "GroupCompanyId".into(), name: Some("Company".into()) },
        Group { id: "g-nothing".into(), name: Some("**Nothing**".into()) },
    ];
    let devices = vec![Device { id: "v1".into(), name: Some("Truck 7".into()) }];

    let logs: Vec<DutyStatusLog> = serde_json::from_value(json!([
        {
            "id": "l1", "driver": { "id": "d1" }, "device": { "id": "v1" },
            "status": "D", "dateTime": "2025-03-14T12:00:00Z",
            "verifyDateTime": "2025-03-15T08:00:00Z", "elapsedDuration": 5400.0,
            "annotations": [{ "comment": "Pre-trip" }]
        },
        {
            "id": "l2", "driver": { "id": "d1" }, "status": "ON",
            "dateTime": "2025-03-13T12:00:00Z", "verifyDateTime": "0001-01-01T00:00:00Z"
        },
        {
            "id": "l3", "driver": { "id": "d2" }, "coDriver": { "id": "d1" },
            "status": "OFF", "dateTime": "2025-03-12T12:00:00Z",
            "annotation": "Missed \"certify\" step"
        },
        {
            "id": "l4", "driver": { "id": "d2" }, "status": "SB",
            "dateTime": "2025-03-11T12:00:00Z", "verifyDateTime": "2025-03-12T08:00:00Z"
        },
        {
            "id": "l5", "driver": { "id": "d3" }, "status": "D",
            "dateTime": "2025-03-10T12:00:00Z", "verifyDateTime": "2025-03-11T08:00:00Z"
        }
    ]))
    .expect("sample logs");

    Snapshot {
        range: range("2025-03-08T00:00:00Z", "2025-03-15T23:59:59Z"),
        foundation: Foundation::new(drivers, groups, devices),
        logs,
    }
}

/// Writes the sample snapshot to a temp file and returns its path.
pub fn sample_snapshot_file(name: &str) -> String {
    let path = temp_out(name, "json");
    snapshot::save(&sample_snapshot(), std::path::Path::new(&path), true).expect("save snapshot");
    path
}

type Responder = Box<dyn Fn(usize, &[ApiCall]) -> AppResult<Vec<Value>> + Send + Sync>;

/// Scripted in-memory transport.
///
/// `multi_call` answers through the responder (given the 0-based call
/// number) and records every batch with the instant it arrived; `call`
/// answers `Get` by `typeName` from a fixed table.
pub struct FakeTransport {
    responder: Responder,
    entities: Vec<(String, Value)>,
    pub batches: Mutex<Vec<Vec<ApiCall>>>,
    pub arrivals: Mutex<Vec<Instant>>,
    pub single_calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(usize, &[ApiCall]) -> AppResult<Vec<Value>> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            entities: Vec::new(),
            batches: Mutex::new(Vec::new()),
            arrivals: Mutex::new(Vec::new()),
            single_calls: Mutex::new(Vec::new()),
        }
    }

    /// Every sub-call returns no logs.
    pub fn empty() -> Self {
        Self::new(|_, calls| Ok(calls.iter().map(|_| json!([])).collect()))
    }

    /// Each sub-call returns `logs` for the driver it asks about; drivers
    /// without an entry get an empty page.
    pub fn by_driver(logs: Vec<(&str, Vec<Value>)>) -> Self {
        let table: Vec<(String, Vec<Value>)> =
            logs.into_iter().map(|(d, l)| (d.to_string(), l)).collect();
        Self::new(move |_, calls| {
            Ok(calls
                .iter()
                .map(|c| {
                    let id = c.params["search"]["userSearch"]["id"].as_str().unwrap_or_default();
                    table
                        .iter()
                        .find(|(d, _)| d == id)
                        .map(|(_, l)| Value::Array(l.clone()))
                        .unwrap_or_else(|| json!([]))
                })
                .collect())
        })
    }

    pub fn with_entity(mut self, type_name: &str, value: Value) -> Self {
        self.entities.push((type_name.to_string(), value));
        self
    }

    pub fn batch_count(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn call(&self, method: &str, params: Value) -> AppResult<Value> {
        let type_name = params["typeName"].as_str().unwrap_or_default().to_string();
        self.single_calls.lock().unwrap().push(format!("{method} {type_name}"));
        self.entities
            .iter()
            .find(|(t, _)| *t == type_name)
            .map(|(_, v)| v.clone())
            .ok_or_else(|| AppError::Api {
                name: "InvalidCastException".into(),
                message: format!("no fixture for {type_name}"),
            })
    }

    async fn multi_call(&self, calls: Vec<ApiCall>) -> AppResult<Vec<Value>> {
        let n = {
            let mut batches = self.batches.lock().unwrap();
            batches.push(calls.clone());
            batches.len() - 1
        };
        self.arrivals.lock().unwrap().push(Instant::now());
        (self.responder)(n, &calls)
    }
}
