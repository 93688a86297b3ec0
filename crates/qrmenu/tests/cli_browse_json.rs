use qrmenu_test_utils::{
    business_payload, flat_catalog, hierarchical_catalog, product_payload, ProductFixture,
    TempPayload,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn qrmenu_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_qrmenu"))
}

fn run_cli(args: &[String], home: &TempDir) -> Output {
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
        panic!(
            "failed to parse JSON output: {}\nstdout:\n{}\nstderr:\n{}",
            err,
            stdout,
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

fn run_cli_json<T: DeserializeOwned>(args: &[String], home: &TempDir) -> T {
    let output = run_cli(args, home);
    assert!(
        output.status.success(),
        "command failed: {}\nstdout:\n{}\nstderr:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_value(parse_json_output(&output)).unwrap_or_else(|err| {
        panic!(
            "failed to deserialize JSON output: {}\nstdout:\n{}",
            err,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn run_cli_json_error(args: &[String], home: &TempDir) -> serde_json::Value {
    let output = run_cli(args, home);
    assert_eq!(
        output.status.code(),
        Some(1),
        "command did not fail with exit code 1: {}\nstdout:\n{}",
        args.join(" "),
        String::from_utf8_lossy(&output.stdout)
    );
    parse_json_output(&output)
}

#[derive(Debug, Deserialize)]
struct BrowseOutput {
    navigation: Navigation,
    count: usize,
    listing: Listing,
    empty: Option<Empty>,
    business: Option<Header>,
}

#[derive(Debug, Deserialize)]
struct Navigation {
    mode: String,
    tops: Vec<Entry>,
    subs: Vec<Entry>,
    location: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    label: String,
    active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Listing {
    Grouped { sections: Vec<Section> },
    Plain { products: Vec<Card> },
}

#[derive(Debug, Deserialize)]
struct Section {
    label: String,
    products: Vec<Card>,
}

#[derive(Debug, Deserialize)]
struct Card {
    key: String,
    title: String,
    image: String,
    price_label: String,
}

#[derive(Debug, Deserialize)]
struct Empty {
    kind: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Header {
    name: String,
    brand_text: String,
    logo_src: Option<String>,
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn path_arg(payload: &TempPayload) -> String {
    payload.path().to_string_lossy().to_string()
}

fn active_label(entries: &[Entry]) -> Option<&str> {
    entries.iter().find(|e| e.active).map(|e| e.label.as_str())
}

fn titles(cards: &[Card]) -> Vec<&str> {
    cards.iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn test_flat_category_filter() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write(
        "products.json",
        &product_payload(vec![
            ProductFixture::new("Soup", "Starters").build(),
            ProductFixture::new("Steak", "Mains").build(),
            ProductFixture::new("Salad", "Starters").build(),
        ]),
    )
    .unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&["browse", &path_arg(&payload), "--top", "Starters", "--json"]),
        &home,
    );
    assert_eq!(out.navigation.mode, "flat");
    assert!(out.navigation.subs.is_empty());
    assert_eq!(out.navigation.location, "Starters");
    let Listing::Plain { products } = &out.listing else {
        panic!("expected plain listing, got {:?}", out.listing);
    };
    assert_eq!(titles(products), vec!["Soup", "Salad"]);
    assert_eq!(out.count, 2);
    assert!(out.empty.is_none());
}

#[test]
fn test_flat_default_is_grouped_all_view() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(flat_catalog())).unwrap();

    let out: BrowseOutput = run_cli_json(&args(&["browse", &path_arg(&payload), "--json"]), &home);
    let labels: Vec<&str> = out.navigation.tops.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Tümü", "Çorbalar", "Ana Yemekler", "Tatlılar"]);
    assert_eq!(active_label(&out.navigation.tops), Some("Tümü"));

    let Listing::Grouped { sections } = &out.listing else {
        panic!("expected grouped listing, got {:?}", out.listing);
    };
    let headers: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(headers, vec!["Çorbalar", "Ana Yemekler", "Tatlılar"]);
    assert_eq!(titles(&sections[0].products), vec!["Mercimek", "Ezogelin"]);
    assert_eq!(titles(&sections[1].products), vec!["Köfte", "Izgara Köfte"]);
}

#[test]
fn test_hierarchical_all_view_headers() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write(
        "products.json",
        &product_payload(vec![
            ProductFixture::new("Lentil", "Soup").top("Food").build(),
            ProductFixture::new("Cola", "Cola").top("Drinks").build(),
        ]),
    )
    .unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&["browse", &path_arg(&payload), "--top", "Tümü", "--json"]),
        &home,
    );
    assert_eq!(out.navigation.mode, "hierarchical");
    assert!(out.navigation.subs.is_empty());
    let Listing::Grouped { sections } = &out.listing else {
        panic!("expected grouped listing, got {:?}", out.listing);
    };
    let headers: Vec<&str> = sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(headers, vec!["Food - Soup", "Drinks - Cola"]);
}

#[test]
fn test_hierarchical_default_selects_first_top_and_sub() {
    let home = TempDir::new().unwrap();
    let payload =
        TempPayload::write("products.json", &product_payload(hierarchical_catalog())).unwrap();

    let out: BrowseOutput = run_cli_json(&args(&["browse", &path_arg(&payload), "--json"]), &home);
    assert_eq!(active_label(&out.navigation.tops), Some("Yemekler"));
    assert_eq!(active_label(&out.navigation.subs), Some("Çorbalar"));
    assert_eq!(out.navigation.location, "Yemekler - Çorbalar");
    let Listing::Plain { products } = &out.listing else {
        panic!("expected plain listing, got {:?}", out.listing);
    };
    assert_eq!(titles(products), vec!["Mercimek", "Ezogelin"]);
}

#[test]
fn test_hierarchical_sub_and_search() {
    let home = TempDir::new().unwrap();
    let payload =
        TempPayload::write("products.json", &product_payload(hierarchical_catalog())).unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&[
            "browse",
            &path_arg(&payload),
            "--top",
            "İçecekler",
            "--sub",
            "Sıcak",
            "--search",
            "KAHVE",
            "--json",
        ]),
        &home,
    );
    assert_eq!(out.navigation.location, "İçecekler - Sıcak");
    let Listing::Plain { products } = &out.listing else {
        panic!("expected plain listing, got {:?}", out.listing);
    };
    assert_eq!(titles(products), vec!["Türk Kahvesi"]);
    assert_eq!(products[0].key, "Sıcak-Türk Kahvesi");
    assert_eq!(products[0].price_label, "60 ₺");
}

#[test]
fn test_empty_catalog_signal() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(Vec::new())).unwrap();

    let out: BrowseOutput = run_cli_json(&args(&["browse", &path_arg(&payload), "--json"]), &home);
    assert_eq!(out.count, 0);
    let empty = out.empty.expect("empty catalog should be signalled");
    assert_eq!(empty.kind, "empty_catalog");
    assert_eq!(empty.message, "Menüde ürün bulunmuyor.");
}

#[test]
fn test_no_matches_signal() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(flat_catalog())).unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&["browse", &path_arg(&payload), "--search", "pizza", "--json"]),
        &home,
    );
    assert_eq!(out.empty.map(|e| e.kind).as_deref(), Some("no_matches"));
}

#[test]
fn test_config_changes_cards() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("config.toml"),
        "[display]\nplaceholder_image = \"/img/none.png\"\ncurrency_suffix = \"TL\"\n",
    )
    .unwrap();
    let payload = TempPayload::write(
        "products.json",
        &product_payload(vec![ProductFixture::new("Simit", "Fırın").price(15.5).build()]),
    )
    .unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&["browse", &path_arg(&payload), "--top", "Fırın", "--json"]),
        &home,
    );
    let Listing::Plain { products } = &out.listing else {
        panic!("expected plain listing, got {:?}", out.listing);
    };
    assert_eq!(products[0].image, "/img/none.png");
    assert_eq!(products[0].price_label, "15.5 TL");
}

#[test]
fn test_business_header_in_browse() {
    let home = TempDir::new().unwrap();
    let products = TempPayload::write("products.json", &product_payload(flat_catalog())).unwrap();
    let business =
        TempPayload::write("business.json", &business_payload("Köşe Kafe", "kose", None)).unwrap();

    let out: BrowseOutput = run_cli_json(
        &args(&[
            "browse",
            &path_arg(&products),
            "--business",
            &path_arg(&business),
            "--short-name",
            "kose",
            "--json",
        ]),
        &home,
    );
    let header = out.business.expect("business header");
    assert_eq!(header.name, "Köşe Kafe");
    assert_eq!(header.brand_text, "Köşe Kafe");
    assert_eq!(header.logo_src, None);
}

#[test]
fn test_unknown_top_is_json_error() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write("products.json", &product_payload(flat_catalog())).unwrap();

    let err = run_cli_json_error(
        &args(&["browse", &path_arg(&payload), "--top", "Pizza", "--json"]),
        &home,
    );
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.contains("Pizza"), "unexpected message: {}", message);
}

#[test]
fn test_missing_file_is_json_error() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("nope.json");

    let err = run_cli_json_error(
        &args(&["browse", &missing.to_string_lossy(), "--json"]),
        &home,
    );
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("File not found"), "unexpected message: {}", message);
    assert!(!err["error"]["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_malformed_payload_is_json_error() {
    let home = TempDir::new().unwrap();
    let payload = TempPayload::write_raw("products.json", "{\"urunler\": 42}").unwrap();

    let err = run_cli_json_error(&args(&["browse", &path_arg(&payload), "--json"]), &home);
    let message = err["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Invalid payload"), "unexpected message: {}", message);
}
