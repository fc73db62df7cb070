//! Tests for the layered configuration system.

use profetch::Config;
use profetch_inquiry::{TargetKind, WireContract};
use temp_dir::TempDir;

#[test]
fn defaults_cover_every_section() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.backend.base_url, "http://localhost:4000");
    assert_eq!(config.backend.timeout_secs, 10);
    assert_eq!(config.inquiry.auto_close_ms, 2500);
    assert_eq!(config.observability.log_level, "info");

    let equipment = config.backend.routes.route_for(TargetKind::Equipment);
    assert_eq!(equipment.path, "/api/inquiry/equipment");
    assert_eq!(equipment.contract, WireContract::InquiryFlat);

    let manpower = config.backend.routes.route_for(TargetKind::Manpower);
    assert_eq!(manpower.path, "/api/inquiry/manpower");
    assert_eq!(manpower.contract, WireContract::InquiryFlat);
}

#[test]
fn config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("profetch.toml");
    std::fs::write(
        &path,
        r#"
[backend]
base_url = "https://api.profetch.example"
timeout_secs = 3

[backend.routes.equipment]
path = "/api/contact/equipment"
contract = "contact_nested"

[inquiry]
auto_close_ms = 2000
"#,
    )
    .unwrap();

    let config =
        Config::load(Some(path.to_str().unwrap().to_string())).expect("Failed to load config");

    assert_eq!(config.backend.base_url, "https://api.profetch.example");
    assert_eq!(config.backend.timeout_secs, 3);
    assert_eq!(config.inquiry.auto_close_ms, 2000);

    // Overridden kind picks up the legacy contract; the other keeps the
    // unified default.
    let equipment = config.backend.routes.route_for(TargetKind::Equipment);
    assert_eq!(equipment.path, "/api/contact/equipment");
    assert_eq!(equipment.contract, WireContract::ContactNested);

    let manpower = config.backend.routes.route_for(TargetKind::Manpower);
    assert_eq!(manpower.path, "/api/inquiry/manpower");
}

#[test]
fn durations_derive_from_config_values() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.backend.timeout().as_secs(), 10);
    assert_eq!(config.inquiry.auto_close().as_millis(), 2500);
}
