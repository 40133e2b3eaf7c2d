use super::build::build_apis;
use super::types::DeclarationFile;
use crate::api::Api;
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Serialization format of a declaration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Yaml,
    Json,
    Toml,
}

impl DeclarationFormat {
    /// Pick the format from the file extension; anything unrecognized is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => DeclarationFormat::Yaml,
            Some("toml") => DeclarationFormat::Toml,
            _ => DeclarationFormat::Json,
        }
    }
}

pub fn parse_declarations(content: &str, format: DeclarationFormat) -> anyhow::Result<DeclarationFile> {
    let file: DeclarationFile = match format {
        DeclarationFormat::Yaml => serde_yaml::from_str(content)?,
        DeclarationFormat::Json => serde_json::from_str(content)?,
        DeclarationFormat::Toml => toml::from_str(content)?,
    };
    Ok(file)
}

/// Read, parse and build the APIs declared in `path`.
pub fn load_declarations(path: impl AsRef<Path>) -> anyhow::Result<Vec<Arc<Api>>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route declarations from {}", path.display()))?;
    let file = parse_declarations(&content, DeclarationFormat::from_path(path))
        .with_context(|| format!("failed to parse route declarations in {}", path.display()))?;
    let apis = build_apis(&file)
        .with_context(|| format!("invalid route declarations in {}", path.display()))?;

    info!(
        path = %path.display(),
        apis = apis.len(),
        "Loaded route declarations"
    );
    Ok(apis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::validate_declarations;
    use crate::validator::IssueKind;

    const YAML: &str = r#"
apis:
  - name: support
    prefix: api
    version: v1
    format: json
    routes:
      - { path: ping }
      - { method: get, namespace: /cats, path: ":id", as: cat }
      - { method: any, path: "*path" }
  - name: outer
    mounts: [support]
"#;

    fn paths(api: &Api) -> Vec<String> {
        api.all_routes().iter().map(|r| r.path.to_string()).collect()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DeclarationFormat::from_path(Path::new("r.YML")), DeclarationFormat::Yaml);
        assert_eq!(DeclarationFormat::from_path(Path::new("r.toml")), DeclarationFormat::Toml);
        assert_eq!(DeclarationFormat::from_path(Path::new("r.json")), DeclarationFormat::Json);
        assert_eq!(DeclarationFormat::from_path(Path::new("routes")), DeclarationFormat::Json);
    }

    #[test]
    fn test_parse_yaml() {
        let file = parse_declarations(YAML, DeclarationFormat::Yaml).unwrap();
        assert_eq!(file.apis.len(), 2);
        let support = &file.apis[0];
        assert_eq!(support.routes[0].method, "GET");
        assert_eq!(support.routes[1].name.as_deref(), Some("cat"));
        assert_eq!(support.all_versions().collect::<Vec<_>>(), ["v1"]);

        let apis = build_apis(&file).unwrap();
        assert_eq!(
            paths(&apis[0]),
            ["/api/:version/ping(.json)", "/api/:version/cats/:id(.json)", "/api/:version/*path(.json)"]
        );
        assert_eq!(apis[0].routes()[1].explicit_name(), Some("cat"));
        assert_eq!(apis[1].all_routes().len(), 3);
        assert!(Arc::ptr_eq(&apis[1].mounts()[0], &apis[0]));
    }

    #[test]
    fn test_parse_toml_and_json() {
        let toml_src = r#"
[[apis]]
name = "hamlet"
versions = ["beta", "alpha"]

[[apis.routes]]
method = "POST"
namespace = "hamlet"
path = "to_be"
"#;
        let file = parse_declarations(toml_src, DeclarationFormat::Toml).unwrap();
        let apis = build_apis(&file).unwrap();
        assert_eq!(paths(&apis[0]), ["/:version/hamlet/to_be"]);
        assert_eq!(apis[0].routes()[0].versions, ["beta", "alpha"]);

        let json_src = r#"{"apis": [{"name": "ping", "routes": [{"path": "ping", "options": {"shop": "main"}}]}]}"#;
        let file = parse_declarations(json_src, DeclarationFormat::Json).unwrap();
        let apis = build_apis(&file).unwrap();
        assert_eq!(apis[0].routes()[0].option_binding("shop").as_deref(), Some("main"));
    }

    #[test]
    fn test_validation_issues() {
        let src = r#"
apis:
  - name: a
    mounts: [b, missing]
  - name: b
    mounts: [a]
  - name: c
    routes:
      - { method: FETCH, path: x }
  - name: d
    routes:
      - { path: "cats/*rest/more" }
  - name: d
"#;
        let file = parse_declarations(src, DeclarationFormat::Yaml).unwrap();
        let kinds: Vec<IssueKind> = validate_declarations(&file).iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::DuplicateApi));
        assert!(kinds.contains(&IssueKind::MountCycle));
        assert!(kinds.contains(&IssueKind::UnknownMount));
        assert!(kinds.contains(&IssueKind::UnknownMethod));
        assert!(kinds.contains(&IssueKind::InvalidTemplate));
        assert!(build_apis(&file).is_err());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_declarations("/nonexistent/routes.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/routes.yaml"));
    }
}
