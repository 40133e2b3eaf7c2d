use route_helpers::load_declarations;
use route_helpers::registry::Registry;
use serde_json::json;

mod common;
use common::temp_files;

const SUPPORT_YAML: &str = r#"
apis:
  - name: support
    prefix: api
    version: v1
    format: json
    routes:
      - { path: custom_name, as: my_custom_route_name }
      - { path: ping }
      - { namespace: cats, path: "/" }
      - { namespace: cats, path: ":id" }
      - { namespace: cats, path: ":id/owners" }
      - { namespace: cats, path: ":id/owners/:owner_id" }
      - { method: ANY, path: "*path" }
  - name: multiple_versions
    versions: [beta, alpha, v1]
    routes:
      - { path: ping }
  - name: mounted
    mounts: [support, multiple_versions]
"#;

#[test]
fn test_load_yaml_declarations() {
    let file = temp_files::create_temp_yaml(SUPPORT_YAML);
    let apis = load_declarations(file.path()).unwrap();
    assert_eq!(apis.len(), 3);

    let registry = Registry::new();
    registry.replace(apis);
    let helpers = registry.helpers();
    assert_eq!(
        helpers.call("api_v1_cats_path", Some(&json!({"id": 1}))).unwrap(),
        "/api/v1/cats/1.json"
    );
    assert_eq!(
        helpers.call("my_custom_route_name_path", None).unwrap(),
        "/api/v1/custom_name.json"
    );
    assert_eq!(helpers.call("alpha_ping_path", None).unwrap(), "/alpha/ping");
    assert_eq!(registry.decorated_routes().duplicates_dropped(), 8);
}

#[test]
fn test_load_json_declarations() {
    let file = temp_files::create_temp_json(
        r#"{"apis": [{"name": "shop", "prefix": "shops", "routes": [
            {"method": "GET", "path": ":shop/items", "options": {"shop": "main"}},
            {"method": "DELETE", "path": ":shop/items/:id"}
        ]}]}"#,
    );
    let registry = Registry::new();
    registry.replace(load_declarations(file.path()).unwrap());
    let helpers = registry.helpers();
    assert_eq!(helpers.call("shops_main_items_path", None).unwrap(), "/shops/main/items");
    assert_eq!(
        helpers
            .call("shops_items_path", Some(&json!({"shop": "north", "id": 3})))
            .unwrap(),
        "/shops/north/items/3"
    );
}

#[test]
fn test_load_toml_declarations() {
    let file = temp_files::create_temp_toml(
        r#"
[[apis]]
name = "hamlet"

[[apis.routes]]
method = "post"
namespace = "hamlet"
path = "to_be"

[[apis.routes]]
method = "post"
namespace = "hamlet"
path = "or_not_to_be"
"#,
    );
    let registry = Registry::new();
    registry.replace(load_declarations(file.path()).unwrap());
    assert_eq!(
        registry.helpers().helper_names(),
        ["hamlet_or_not_to_be_path", "hamlet_to_be_path"]
    );
}

#[test]
fn test_invalid_declarations_report_every_issue() {
    let file = temp_files::create_temp_yaml(
        r#"
apis:
  - name: a
    mounts: [nowhere]
    routes:
      - { method: FETCH, path: x }
"#,
    );
    let err = load_declarations(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("UnknownMount"), "{message}");
    assert!(message.contains("nowhere"), "{message}");
    assert!(message.contains("UnknownMethod"), "{message}");
}

#[test]
fn test_malformed_file_is_a_parse_error() {
    let file = temp_files::create_temp_yaml("apis: [ { name: a, routes: ");
    let err = load_declarations(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse route declarations"));
}
