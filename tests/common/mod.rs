#![allow(dead_code)]

pub mod fixtures {
    use route_helpers::api::Api;
    use route_helpers::registry::Registry;
    use route_helpers::route::Verb;
    use route_helpers::runtime_config::HelperConfig;
    use std::sync::Arc;

    /// Versioned, prefixed API with a fixed json format
    pub fn support_api() -> Arc<Api> {
        Arc::new(
            Api::builder("support")
                .prefix("api")
                .version("v1")
                .format("json")
                .routes(|r| {
                    r.get_as("custom_name", "my_custom_route_name")
                        .get("ping")
                        .resource("cats", |cats| {
                            cats.get("/")
                                .route_param("id", |cat| cat.get(""))
                                .get(":id/owners")
                                .get(":id/owners/:owner_id")
                        })
                        .route(Verb::Any, "*path")
                })
                .build()
                .unwrap(),
        )
    }

    /// API declared for more than one version
    pub fn multiple_versions_api() -> Arc<Api> {
        Arc::new(
            Api::builder("multiple_versions")
                .versions(["beta", "alpha", "v1"])
                .routes(|r| r.get("ping"))
                .build()
                .unwrap(),
        )
    }

    /// API that mounts the two above
    pub fn mounted_api() -> Arc<Api> {
        Arc::new(
            Api::builder("mounted")
                .mount(support_api())
                .mount(multiple_versions_api())
                .build()
                .unwrap(),
        )
    }

    /// Version string that is not a valid identifier
    pub fn illegal_version_api() -> Arc<Api> {
        Arc::new(
            Api::builder("illegal_version")
                .version("beta-1")
                .routes(|r| r.get("ping"))
                .build()
                .unwrap(),
        )
    }

    pub fn multiple_posts_api() -> Arc<Api> {
        Arc::new(
            Api::builder("multiple_posts")
                .routes(|r| r.resource("hamlet", |h| h.post("to_be").post("or_not_to_be")))
                .build()
                .unwrap(),
        )
    }

    /// Every fixture API registered on a fresh registry, mounts included.
    pub fn support_registry() -> Registry {
        let registry = Registry::with_config(HelperConfig::default());
        for api in [
            support_api(),
            multiple_versions_api(),
            mounted_api(),
            illegal_version_api(),
            multiple_posts_api(),
        ] {
            registry.register(api);
        }
        registry
    }
}

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Write `content` to a temporary file ending in `.{ext}`.
    ///
    /// The file is removed when the handle is dropped.
    pub fn create_temp_spec(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("route_helpers_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_spec(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_spec(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_spec(content, "toml")
    }
}
