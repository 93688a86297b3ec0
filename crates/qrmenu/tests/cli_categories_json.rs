use qrmenu_test_utils::{
    business_payload, flat_catalog, orphan_catalog, product_payload, TempPayload,
};
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn qrmenu_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_qrmenu"))
}

fn run_cli(args: &[&str], home: &TempDir) -> Output {
    Command::new(qrmenu_bin())
        .args(args)
        .env("QRMENU_HOME", home.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute qrmenu CLI")
}

fn parse_json_output(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find(|c| c == '{' || c == '[').unwrap_or_else(|| {
        panic!(
            "no JSON payload found in output\nstdout:\n{}\nstderr:\n{}",
            stdout,
            String::from_utf8_lossy(&output.stderr)
        )
    });
    let mut deserializer = serde_json::Deserializer::from_str(&stdout[json_start..]);
    serde_json::Value::deserialize(&mut deserializer).unwrap_or_else(|err| {
        panic!("failed to parse JSON output: {}\nstdout:\n{}", err, stdout)
    })
}

fn run_cli_json(args: &[&str], home: &TempDir) -> serde_json::Value {
    let output = run_cli(args, home);
    assert!(
        output.status.success(),
        "command failed: {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    parse_json_output(&output)
}

fn strings(value: &serde_json::Value) -> Vec<&str> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_str().expect("string"))
        .collect()
}

#[test]
fn test_categories_flat() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(flat_catalog())).unwrap();
    let path = payload.path().to_string_lossy().to_string();

    let out = run_cli_json(&["categories", &path, "--json"], &home);
    assert_eq!(out["mode"], "flat");
    assert_eq!(out["total_products"], 5);
    assert_eq!(
        strings(&out["top_categories"]),
        vec!["Tümü", "Çorbalar", "Ana Yemekler", "Tatlılar"]
    );
    assert_eq!(out["categories"][1]["name"], "Ana Yemekler");
    assert_eq!(out["categories"][1]["products"], 2);
    assert!(out["categories"][1]["subs"].as_array().unwrap().is_empty());
    assert_eq!(out["orphans"], 0);
}

#[test]
fn test_categories_hierarchical_with_orphan() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(orphan_catalog())).unwrap();
    let path = payload.path().to_string_lossy().to_string();

    let out = run_cli_json(&["categories", &path, "--json"], &home);
    assert_eq!(out["mode"], "hierarchical");
    assert_eq!(
        strings(&out["top_categories"]),
        vec!["Tümü", "Yemekler", "İçecekler"]
    );
    assert_eq!(
        strings(&out["categories"][0]["subs"]),
        vec!["Çorbalar", "Izgaralar"]
    );
    assert_eq!(
        strings(&out["categories"][1]["subs"]),
        vec!["Sıcak", "Soğuk"]
    );
    assert_eq!(out["orphans"], 1);
}

#[test]
fn test_categories_bare_array_payload() {
    let home = TempDir::new().unwrap();
    let payload =
        TempPayload::write("products.json", &serde_json::Value::Array(flat_catalog())).unwrap();
    let path = payload.path().to_string_lossy().to_string();

    let out = run_cli_json(&["categories", &path, "--json"], &home);
    assert_eq!(out["total_products"], 5);
}

#[test]
fn test_business_with_remote_logo() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write(
        "business.json",
        &business_payload("Köşe Kafe", "kose", Some("https://cdn.example.com/kose.png")),
    )
    .unwrap();
    let path = payload.path().to_string_lossy().to_string();

    let out = run_cli_json(&["business", &path, "--short-name", "kose", "--json"], &home);
    assert_eq!(out["id"], 18);
    assert_eq!(out["brand_text"], "");
    assert_eq!(out["logo"]["kind"], "remote");
    assert_eq!(out["logo_src"], "https://cdn.example.com/kose.png");
}

#[test]
fn test_business_failed_lookup_is_error() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write(
        "business.json",
        &serde_json::json!({ "hataMesaj": "Kayıt yok", "basarili": false, "isletmeler": null }),
    )
    .unwrap();
    let path = payload.path().to_string_lossy().to_string();

    let output = run_cli(&["business", &path, "--short-name", "kose", "--json"], &home);
    assert_eq!(output.status.code(), Some(1));
    let err = parse_json_output(&output);
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.contains("İşletme bulunamadı"), "unexpected message: {}", message);
}

#[test]
fn test_config_reports_home_and_defaults() {
    let home = TempDir::new().unwrap();

    let out = run_cli_json(&["config", "--json"], &home);
    assert_eq!(out["home"], home.path().to_string_lossy().as_ref());
    assert_eq!(out["config"]["exists"], false);
    assert_eq!(out["display"]["currency_suffix"], "₺");
    assert_eq!(
        out["display"]["placeholder_image"],
        "https://placehold.co/400x300?text=No+Image"
    );
}

#[test]
fn test_malformed_config_is_json_error() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("config.toml"), "[display\n").unwrap();

    let output = run_cli(&["config", "--json"], &home);
    assert_eq!(output.status.code(), Some(1));
    let err = parse_json_output(&output);
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid config"), "unexpected message: {}", message);
}
