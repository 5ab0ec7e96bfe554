use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::Value;

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = cargo_bin_cmd!("mapic");
    let out = cmd.args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

fn run_json(args: &[&str]) -> Value {
    let mut cmd = cargo_bin_cmd!("mapic");
    let out = cmd
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn querystring_is_exact_raw_concatenation() {
    assert_eq!(stdout_of(&["querystring", "ABC123"]), "?mapikey=ABC123\n");
    assert_eq!(stdout_of(&["querystring", ""]), "?mapikey=\n");
    // no escaping, even for delimiter characters
    assert_eq!(stdout_of(&["querystring", "a&b=c"]), "?mapikey=a&b=c\n");
}

#[test]
fn querystring_json_envelope() {
    let out = run_json(&["querystring", "ABC123"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"], "?mapikey=ABC123");
}

#[test]
fn key_reports_present_value() {
    let out = run_json(&["key", "--href", "https://host/page?mapikey=ABC123"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["present"], true);
    assert_eq!(out["data"]["value"], "ABC123");
}

#[test]
fn key_reports_absence_without_failing() {
    cargo_bin_cmd!("mapic")
        .args(["key", "--href", "https://host/page"])
        .assert()
        .success()
        .stdout(contains("mapikey absent"));

    let out = run_json(&["key", "--href", "https://host/page?other=1"]);
    assert_eq!(out["data"]["present"], false);
    assert_eq!(out["data"]["value"], Value::Null);
}

#[test]
fn key_distinguishes_empty_from_absent() {
    let out = run_json(&["key", "--href", "https://host/page?mapikey="]);
    assert_eq!(out["data"]["present"], true);
    assert_eq!(out["data"]["value"], "");

    cargo_bin_cmd!("mapic")
        .args(["key", "--href", "https://host/page?mapikey="])
        .assert()
        .success()
        .stdout(contains("present (empty)"));
}

#[test]
fn apply_rewrites_href_without_marker() {
    let out = run_json(&["apply", "ABC123", "--href", "https://host.example:8080/page"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["applied"], true);
    assert_eq!(
        out["data"]["location"],
        "https://host.example:8080?mapikey=ABC123"
    );
}

#[test]
fn apply_is_noop_when_marker_present() {
    let out = run_json(&["apply", "ABC123", "--href", "https://host?mapikey=ABC123"]);
    assert_eq!(out["data"]["applied"], false);
    assert_eq!(out["data"]["location"], "https://host?mapikey=ABC123");
}

#[test]
fn verify_without_credential_reports_missing_credential() {
    let mut cmd = cargo_bin_cmd!("mapic");
    let out = cmd
        .args(["--json", "verify", "--href", "https://host/page"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let err: Value = serde_json::from_slice(&out).expect("error json output");
    assert_eq!(err["ok"], false);
    assert_eq!(err["error"]["code"], "MISSING_CREDENTIAL");
}
