use rhub_domain::config::{ApiConfig, DatabaseConfig, ServerConfig, ZonesConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4610);
    assert!(server.ssl.is_none());

    let db = DatabaseConfig::default();
    assert_eq!(db.url, "mem://");
    assert_eq!(db.namespace, "rhub");
    assert_eq!(db.database, "core");
    assert!(db.credentials.is_none());

    let zones = ZonesConfig::default();
    assert!(zones.url.ends_with("zones.json"));
    assert_eq!(zones.timeout_seconds, 10);
}

#[test]
fn admin_password_defaults_to_empty() {
    let cfg = ApiConfig::default();
    assert!(cfg.security.admin_password.is_empty());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "security": { "admin_password": "hunter2" },
        "database": { "url": "mem://", "namespace": "n", "database": "d", "credentials": null },
        "zones": { "url": "https://zones.example/zones.json", "timeout_seconds": 3 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.security.admin_password, "hunter2");
    assert_eq!(cfg.database.namespace, "n");
    assert_eq!(cfg.zones.timeout_seconds, 3);
}
