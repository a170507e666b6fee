mod common;
use common::{dlv, dlv_against, dlv_isolated, sample_snapshot_file, spawn_rpc_server, temp_out};
use serde_json::{Value, json};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_help_lists_subcommands() {
    dlv()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("fetch"))
        .stdout(contains("report"))
        .stdout(contains("export"));
}

#[test]
fn test_init_writes_config_and_refuses_to_overwrite() {
    let cfg = temp_out("cli_init", "conf");

    dlv().args(["--config", &cfg, "init"]).assert().success();
    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("server: my.geotab.com"));
    assert!(content.contains("chunk_days: 14"));

    dlv()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    dlv().args(["--config", &cfg, "init", "--force"]).assert().success();
}

#[test]
fn test_config_print_masks_password() {
    let cfg = temp_out("cli_config_print", "conf");
    fs::write(&cfg, "database: demo_fleet\nusername: ops\npassword: s3cret\n").unwrap();

    dlv()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database: demo_fleet"))
        .stdout(contains("batch_size: 50"))
        .stdout(contains("********"))
        .stdout(contains("s3cret").not());
}

#[test]
fn test_broken_config_is_an_error() {
    let cfg = temp_out("cli_config_broken", "conf");
    fs::write(&cfg, "chunk_days: [not, a, number]\n").unwrap();

    dlv()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn test_report_from_snapshot() {
    let snap = sample_snapshot_file("cli_report");

    dlv_isolated("cli_report")
        .args(["report", "--snapshot", &snap])
        .assert()
        .success()
        .stdout(contains("Fleet Overview"))
        .stdout(contains("60.0%"))
        .stdout(contains("Carol Diaz, Jr."))
        .stdout(contains("Log Details"))
        .stdout(contains("Truck 7"))
        .stdout(contains("5 log(s)"));
}

#[test]
fn test_report_filters_and_search() {
    let snap = sample_snapshot_file("cli_report_filter");

    dlv_isolated("cli_report_filter")
        .args([
            "report", "--snapshot", &snap, "--table", "logs", "--status", "unverified",
            "--search", "bob",
        ])
        .assert()
        .success()
        .stdout(contains("Bob Jones"))
        .stdout(contains("1 log(s)"))
        .stdout(contains("Fleet Overview").not());
}

#[test]
fn test_report_for_empty_group_shows_empty_state() {
    let snap = sample_snapshot_file("cli_report_empty");

    dlv_isolated("cli_report_empty")
        .args(["report", "--snapshot", &snap, "--group", "g-east"])
        .assert()
        .success()
        .stdout(contains("No data found for the selected filters."));
}

#[test]
fn test_report_missing_snapshot_fails() {
    let missing = temp_out("cli_no_snapshot", "json");

    dlv_isolated("cli_no_snapshot")
        .args(["report", "--snapshot", &missing])
        .assert()
        .failure()
        .stderr(contains("Snapshot error"));
}

#[test]
fn test_export_fleet_csv_from_snapshot() {
    let snap = sample_snapshot_file("cli_export_fleet");
    let out = temp_out("cli_export_fleet", "csv");

    dlv_isolated("cli_export_fleet")
        .args(["export", "--snapshot", &snap, "--table", "fleet", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "driverName,total,verified,unverified,verifiedPct");
    assert_eq!(lines.len(), 4);
    assert!(content.contains("\"Carol Diaz, Jr.\",1,1,0,100.0%"));
}

#[test]
fn test_export_logs_json_for_one_driver() {
    let snap = sample_snapshot_file("cli_export_logs_json");
    let out = temp_out("cli_export_logs_json_file", "json");

    dlv_isolated("cli_export_logs_json")
        .args([
            "export", "--snapshot", &snap, "--table", "logs", "--format", "json", "--driver", "d3",
            "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["driverName"], "Carol Diaz, Jr.");
    assert_eq!(rows[0]["verifiedLabel"], "Verified");
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let snap = sample_snapshot_file("cli_export_force");
    let out = temp_out("cli_export_force", "csv");
    fs::write(&out, "keep me").unwrap();

    dlv_isolated("cli_export_force")
        .args(["export", "--snapshot", &snap, "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    dlv_isolated("cli_export_force")
        .args(["export", "--snapshot", &snap, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("driverName,"));
}

#[test]
fn test_groups_from_snapshot() {
    let snap = sample_snapshot_file("cli_groups");

    dlv_isolated("cli_groups")
        .args(["groups", "--snapshot", &snap])
        .assert()
        .success()
        .stdout(contains("North Yard"))
        .stdout(contains("South Yard"))
        .stdout(contains("**Nothing**").not())
        .stdout(contains("GroupCompanyId").not());
}

#[test]
fn test_drivers_from_snapshot_by_group() {
    let snap = sample_snapshot_file("cli_drivers");

    dlv_isolated("cli_drivers")
        .args(["drivers", "--snapshot", &snap, "--group", "g-north"])
        .assert()
        .success()
        .stdout(contains("Alice Smith"))
        .stdout(contains("Carol Diaz, Jr."))
        .stdout(contains("Bob Jones").not());
}

#[test]
fn test_fetch_without_credentials_fails_before_network() {
    dlv_isolated("cli_fetch_nocreds")
        .args(["fetch", "--preset", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("database"));
}

#[test]
fn test_bad_custom_date_is_rejected() {
    dlv_isolated("cli_fetch_baddate")
        .args(["fetch", "--from", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

/// Answers `Authenticate` and the foundation `Get`s for one driver, and
/// hands `ExecuteMultiCall` to `logs`.
fn one_driver_server<F>(logs: F) -> String
where
    F: Fn(&Value) -> Value + Send + Sync + 'static,
{
    spawn_rpc_server(move |method, params| match method {
        "Authenticate" => json!({ "result": {
            "credentials": { "database": "demo", "userName": "tester", "sessionId": "s1" },
            "path": "ThisServer"
        }}),
        "Get" if params["typeName"] == "User" => json!({ "result": [
            { "id": "d1", "firstName": "Alice", "lastName": "Smith", "isDriver": true }
        ]}),
        "Get" => json!({ "result": [] }),
        "ExecuteMultiCall" => logs(params),
        _ => json!({ "error": { "name": "MissingMethodException", "message": method } }),
    })
}

#[test]
fn test_fetch_renders_logs_from_the_server() {
    let server = one_driver_server(|params| {
        let pages: Vec<Value> = params["calls"]
            .as_array()
            .map(|calls| {
                calls
                    .iter()
                    .map(|c| {
                        let id = c["params"]["search"]["userSearch"]["id"].clone();
                        json!([{ "id": "l1", "driver": { "id": id }, "status": "D",
                                 "verifyDateTime": "0001-01-01T00:00:00Z" }])
                    })
                    .collect()
            })
            .unwrap_or_default();
        json!({ "result": pages })
    });

    dlv_against("cli_fetch_live_ok", &server)
        .args(["fetch", "--preset", "yesterday", "--table", "fleet"])
        .assert()
        .success()
        .stdout(contains("Fleet Overview"))
        .stdout(contains("Alice Smith"));
}

#[test]
fn test_fetch_transport_failure_asks_to_retry() {
    let server = one_driver_server(|_| {
        json!({ "error": { "name": "OverLimitException", "message": "API calls quota exceeded" } })
    });

    dlv_against("cli_fetch_live_err", &server)
        .args(["fetch", "--preset", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Error loading data. Please try again."))
        .stderr(contains("OverLimitException"))
        .stdout(contains("Fleet Overview").not());
}
