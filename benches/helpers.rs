use criterion::{criterion_group, criterion_main, Criterion};
use route_helpers::spec::{build_apis, parse_declarations, DeclarationFormat};
use route_helpers::{build_catalog, Api, RouteHelpers};
use route_helpers::runtime_config::HelperConfig;
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

fn example_declarations() -> &'static str {
    r#"
apis:
  - name: zoo
    prefix: api
    versions: [v1, v2]
    format: json
    routes:
      - { path: "/" }
      - { namespace: zoo, path: animals }
      - { method: POST, namespace: zoo, path: animals }
      - { namespace: zoo, path: "animals/:id" }
      - { method: PUT, namespace: zoo, path: "animals/:id" }
      - { method: DELETE, namespace: zoo, path: "animals/:id" }
      - { namespace: zoo, path: "animals/:id/toys/:toy_id" }
      - { namespace: zoo, path: ":category/animals/:id/habitats/:habitat_id/sections/:section_id" }
      - { method: POST, path: "inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id" }
      - { path: "complex/:a/:b/:c/:d/:e/:f/:g/:h/:i" }
      - { method: HEAD, namespace: zoo, path: health }
      - { method: ANY, path: "*path" }
  - name: mounted
    mounts: [zoo]
"#
}

fn load_apis() -> Vec<Arc<Api>> {
    let file = parse_declarations(example_declarations(), DeclarationFormat::Yaml)
        .expect("failed to parse declarations");
    build_apis(&file).expect("failed to build APIs")
}

fn bench_catalog_build(c: &mut Criterion) {
    let apis = load_apis();
    let config = HelperConfig::default();
    c.bench_function("catalog_build", |b| {
        b.iter(|| {
            let routes = apis.iter().flat_map(|api| api.all_routes());
            black_box(build_catalog(routes, &config));
        })
    });
}

fn bench_helper_calls(c: &mut Criterion) {
    let apis = load_apis();
    let catalog = build_catalog(apis.iter().flat_map(|api| api.all_routes()), &HelperConfig::default());
    let helpers = RouteHelpers::new(Arc::new(catalog));
    let calls = [
        ("api_v1_zoo_animals_path", json!({})),
        ("api_v1_zoo_animals_path", json!({"id": 123})),
        ("api_v2_zoo_animals_toys_path", json!({"id": 123, "toy_id": 456})),
        (
            "api_v1_zoo_animals_habitats_sections_path",
            json!({"category": "cats", "id": 1, "habitat_id": 88, "section_id": 5}),
        ),
        ("api_v1_complex_path", json!({"a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7, "h": 8, "i": 9})),
        ("api_v1_zoo_animals_path", json!({"params": {"page": 2, "tags": ["a", "b"]}})),
    ];
    c.bench_function("helper_call", |b| {
        b.iter(|| {
            for (name, params) in calls.iter() {
                let res = helpers.call(name, Some(params));
                black_box(&res);
            }
        })
    });
}

criterion_group!(benches, bench_catalog_build, bench_helper_calls);
criterion_main!(benches);
