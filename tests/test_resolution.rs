//! Resolution tests against the fixture configs
mod common;

use common::fixtures::{fixture, fixture_path};
use turl::config::{load_file, parse, Catalog};
use turl::errors::{ParseError, ResolutionError};
use turl::resolve::{extract_variables, resolve_request, resolve_request_in_group, Scope};

#[test]
fn test_end_to_end_resolution() {
    let config = load_file(&fixture_path("users.yaml")).unwrap();
    let resolved = resolve_request(&config, "get_user").unwrap();

    assert_eq!(resolved.group, "users");
    assert_eq!(resolved.method, "GET");
    assert_eq!(resolved.url, "https://example.com/v1/users/7");
}

#[test]
fn test_scope_origin_recorded() {
    let config = load_file(&fixture_path("users.yaml")).unwrap();
    let resolved = resolve_request(&config, "get_user").unwrap();

    assert_eq!(resolved.bindings.scope_of("id"), Some(Scope::Request));
    assert_eq!(resolved.bindings.scope_of("version"), Some(Scope::Group));
    assert_eq!(resolved.bindings.scope_of("host"), Some(Scope::Global));
}

#[test]
fn test_duplicate_name_uses_first_group_unless_qualified() {
    let config = load_file(&fixture_path("users.yaml")).unwrap();

    let first = resolve_request(&config, "get_user").unwrap();
    assert_eq!(first.group, "users");

    let admin = resolve_request_in_group(&config, "admin", "get_user").unwrap();
    assert_eq!(admin.url, "https://example.com/v2/admin/users/1");
}

#[test]
fn test_base_url_composition() {
    let config = load_file(&fixture_path("api.yaml")).unwrap();
    let resolved = resolve_request(&config, "user_by_id").unwrap();
    assert_eq!(resolved.url, "https://api.example.com/users/42");

    let create = resolve_request(&config, "create_user").unwrap();
    assert_eq!(create.method, "POST");
    assert_eq!(create.body, r#"{"name":"ferris"}"#);
}

#[test]
fn test_missing_variable_is_reported_by_name() {
    let config = load_file(&fixture_path("users.yaml")).unwrap();
    let err = resolve_request_in_group(&config, "admin", "broken").unwrap_err();
    assert_eq!(
        err,
        ResolutionError::UnresolvedVariable {
            variable: "token".to_string()
        }
    );
}

#[test]
fn test_lookup_miss_leaves_model_usable() {
    let config = load_file(&fixture_path("users.yaml")).unwrap();
    let before = config.clone();

    let err = resolve_request(&config, "does_not_exist").unwrap_err();
    assert!(matches!(err, ResolutionError::RequestNotFound { .. }));
    assert_eq!(config, before);
    assert!(resolve_request(&config, "list_users").is_ok());
}

#[test]
fn test_resolution_is_idempotent() {
    let config = parse(&fixture("users.yaml")).unwrap();
    let first = resolve_request(&config, "get_user").unwrap();
    let second = resolve_request(&config, "get_user").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_extraction_counts_distinct_names() {
    let names = extract_variables("${a}/${b}/${a}?q=${c}&r=${b}");
    assert_eq!(names.len(), 3);
}

#[test]
fn test_broken_file_does_not_block_others() {
    let catalog = Catalog::load(&[
        fixture_path("api.yaml"),
        fixture_path("broken.yaml"),
        fixture_path("users.yaml"),
    ]);

    assert_eq!(catalog.sources().len(), 2);
    assert_eq!(catalog.failures().len(), 1);
    assert!(matches!(catalog.failures()[0].error, ParseError::File { .. }));

    let labels: Vec<String> = catalog
        .list_endpoint_groups()
        .into_iter()
        .map(|g| g.label)
        .collect();
    assert_eq!(labels, ["api/users", "demo/users", "demo/admin"]);
}

#[test]
fn test_catalog_qualified_resolution() {
    let catalog = Catalog::load(&[fixture_path("users.yaml")]);
    let groups = catalog.list_endpoint_groups();
    let admin = groups.iter().find(|g| g.group == "admin").unwrap();

    assert_eq!(catalog.list_requests(admin), ["get_user", "broken"]);
    let resolved = catalog.resolve(admin, "get_user").unwrap();
    assert_eq!(resolved.url, "https://example.com/v2/admin/users/1");
}
