//! Integration tests for the resolve flow driven through the command layer.

use std::fs;
use std::path::{Path, PathBuf};

use montre_cli::cli::ResolveArgs;
use montre_cli::commands::{build_configurator, parse_set};
use montre_cli::summary::{configuration_table, slots_table};
use montre_model::Slot;

fn write_bundle(dir: &Path) {
    fs::write(
        dir.join("catalog.json"),
        r#"{
            "slots": {
                "case": [
                    {"id": "c1", "name": "Steel", "regions": ["FR-E"]},
                    {"id": "c2", "name": "Gold", "price_delta": 5000, "regions": ["FR-A"]}
                ],
                "dial": [
                    {"id": "d1", "name": "White"},
                    {"id": "d3", "name": "Midnight", "price_delta": 2000}
                ],
                "hands": [{"id": "h1", "name": "Baton"}],
                "strap": [{"id": "s1", "name": "Leather", "price_delta": 3000}]
            }
        }"#,
    )
    .expect("write catalog");
    fs::write(
        dir.join("pricing.json"),
        r#"{"base": 45000, "currency": "EUR"}"#,
    )
    .expect("write pricing");
    fs::write(
        dir.join("rules.json"),
        r#"[{"type": "ban", "when": {"dial": "d3", "hands": "h1"},
             "because": "d3 requires gold hands"}]"#,
    )
    .expect("write rules");
}

fn args(bundle: PathBuf) -> ResolveArgs {
    ResolveArgs {
        bundle,
        region: None,
        query: None,
        set: Vec::new(),
        json: false,
    }
}

#[test]
fn resolves_defaults_from_a_bundle() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_bundle(dir.path());
    let engine = build_configurator(&args(dir.path().to_path_buf())).expect("build");
    let result = engine.result();
    assert_eq!(result.sku, "c1-d1-h1-s1");
    assert_eq!(result.price, 45000 + 3000);
    assert!(result.violations.is_empty());
}

#[test]
fn region_query_and_set_compose_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_bundle(dir.path());
    let mut resolve_args = args(dir.path().to_path_buf());
    resolve_args.region = Some("FR-A".to_string());
    resolve_args.query = Some("dial=d3&case=c1".to_string());
    resolve_args.set = vec!["dial=d1".to_string()];

    let engine = build_configurator(&resolve_args).expect("build");
    // c1 is stale under FR-A, so the region default c2 wins; the query set
    // d3 but the explicit --set overrode it afterwards.
    assert_eq!(engine.selection().get(Slot::Case), Some("c2"));
    assert_eq!(engine.selection().get(Slot::Dial), Some("d1"));
    assert_eq!(engine.result().price, 45000 + 5000 + 3000);
}

#[test]
fn invalid_set_option_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_bundle(dir.path());
    let mut resolve_args = args(dir.path().to_path_buf());
    resolve_args.set = vec!["case=unknown-id".to_string()];
    assert!(build_configurator(&resolve_args).is_err());
}

#[test]
fn violations_do_not_fail_resolution() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_bundle(dir.path());
    let mut resolve_args = args(dir.path().to_path_buf());
    resolve_args.set = vec!["dial=d3".to_string()];
    let engine = build_configurator(&resolve_args).expect("build");
    assert_eq!(engine.result().violations, vec!["d3 requires gold hands"]);
}

#[test]
fn parse_set_accepts_slot_equals_id() {
    assert_eq!(parse_set("case=c2").expect("parse"), (Slot::Case, "c2"));
    assert!(parse_set("case").is_err());
    assert!(parse_set("bezel=b1").is_err());
    assert!(parse_set("case=").is_err());
}

#[test]
fn tables_render_the_selection() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_bundle(dir.path());
    let engine = build_configurator(&args(dir.path().to_path_buf())).expect("build");

    let rendered = configuration_table(&engine.result(), engine.filtered()).to_string();
    assert!(rendered.contains("case"));
    assert!(rendered.contains("Steel"));
    assert!(rendered.contains("0.00 EUR"));

    let listing = slots_table(engine.filtered(), "EUR")
        .expect("slots table")
        .to_string();
    assert!(listing.contains("Midnight"));
    assert!(listing.contains("FR-A"));
    assert!(listing.contains("all"));
}
