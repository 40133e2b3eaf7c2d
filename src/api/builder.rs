use super::Api;
use crate::route::{PathTemplate, RouteDescriptor, TemplateError, Verb, EXPLICIT_NAME_OPTION};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone)]
struct Endpoint {
    verb: Verb,
    namespace: String,
    path: String,
    options: BTreeMap<String, Value>,
}

/// Routes declared under one namespace
///
/// Nested scopes (`namespace`, `resource`, `route_param`) extend the namespace
/// of their parent; every endpoint remembers the namespace it was declared in.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    namespace: String,
    endpoints: Vec<Endpoint>,
}

fn join_path<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined: Vec<&str> = parts
        .into_iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect();
    format!("/{}", joined.join("/"))
}

impl Scope {
    fn nested(namespace: String) -> Self {
        Self {
            namespace,
            endpoints: Vec::new(),
        }
    }

    /// Declare `verb path` with extra options.
    #[must_use]
    pub fn route_with(
        mut self,
        verb: Verb,
        path: &str,
        options: BTreeMap<String, Value>,
    ) -> Self {
        self.endpoints.push(Endpoint {
            verb,
            namespace: self.namespace.clone(),
            path: path.to_string(),
            options,
        });
        self
    }

    #[must_use]
    pub fn route(self, verb: Verb, path: &str) -> Self {
        self.route_with(verb, path, BTreeMap::new())
    }

    #[must_use]
    pub fn get(self, path: &str) -> Self {
        self.route(Verb::Get, path)
    }

    /// `GET path` with an explicit helper name.
    #[must_use]
    pub fn get_as(self, path: &str, name: &str) -> Self {
        let options = BTreeMap::from([(
            EXPLICIT_NAME_OPTION.to_string(),
            Value::String(name.to_string()),
        )]);
        self.route_with(Verb::Get, path, options)
    }

    #[must_use]
    pub fn post(self, path: &str) -> Self {
        self.route(Verb::Post, path)
    }

    #[must_use]
    pub fn put(self, path: &str) -> Self {
        self.route(Verb::Put, path)
    }

    #[must_use]
    pub fn patch(self, path: &str) -> Self {
        self.route(Verb::Patch, path)
    }

    #[must_use]
    pub fn delete(self, path: &str) -> Self {
        self.route(Verb::Delete, path)
    }

    /// Declare routes under `self.namespace + name`.
    #[must_use]
    pub fn namespace<F>(mut self, name: &str, declare: F) -> Self
    where
        F: FnOnce(Scope) -> Scope,
    {
        let inner = declare(Scope::nested(join_path([self.namespace.as_str(), name])));
        self.endpoints.extend(inner.endpoints);
        self
    }

    /// Alias of [`namespace`](Self::namespace) for resource collections.
    #[must_use]
    pub fn resource<F>(self, name: &str, declare: F) -> Self
    where
        F: FnOnce(Scope) -> Scope,
    {
        self.namespace(name, declare)
    }

    /// Declare routes under a `:param` namespace.
    #[must_use]
    pub fn route_param<F>(self, param: &str, declare: F) -> Self
    where
        F: FnOnce(Scope) -> Scope,
    {
        self.namespace(&format!(":{param}"), declare)
    }
}

/// Builder for an [`Api`]
///
/// ```
/// use route_helpers::api::Api;
///
/// let api = Api::builder("cats")
///     .prefix("api")
///     .version("v1")
///     .format("json")
///     .routes(|r| r.resource("cats", |cats| cats.get("/").route_param("id", |cat| cat.get(""))))
///     .build()
///     .unwrap();
///
/// let paths: Vec<String> = api.routes().iter().map(|r| r.path.to_string()).collect();
/// assert_eq!(paths, ["/api/:version/cats(.json)", "/api/:version/cats/:id(.json)"]);
/// ```
#[derive(Debug, Clone)]
pub struct ApiBuilder {
    name: String,
    prefix: Option<String>,
    versions: Vec<String>,
    format: Option<String>,
    root: Scope,
    mounts: Vec<Arc<Api>>,
}

impl ApiBuilder {
    pub(super) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            versions: Vec::new(),
            format: None,
            root: Scope::nested("/".to_string()),
            mounts: Vec::new(),
        }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Add one version; versions appear in the path as `:version` after the prefix.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.versions.push(version.into());
        self
    }

    #[must_use]
    pub fn versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions.extend(versions.into_iter().map(Into::into));
        self
    }

    /// Fixed response format; every route gets a `(.format)` extension.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Declare routes at the API root.
    #[must_use]
    pub fn routes<F>(mut self, declare: F) -> Self
    where
        F: FnOnce(Scope) -> Scope,
    {
        self.root = declare(self.root);
        self
    }

    /// Mount another API; its routes are yielded alongside this API's own.
    #[must_use]
    pub fn mount(mut self, api: Arc<Api>) -> Self {
        self.mounts.push(api);
        self
    }

    /// Parse every declared path into a route descriptor.
    pub fn build(self) -> Result<Api, TemplateError> {
        let version_segment = (!self.versions.is_empty()).then_some(":version");
        let format = self
            .format
            .as_deref()
            .map(|f| f.trim().trim_start_matches('.'))
            .filter(|f| !f.is_empty());

        let mut routes = Vec::with_capacity(self.root.endpoints.len());
        for endpoint in self.root.endpoints {
            let mut raw = join_path(
                [
                    self.prefix.as_deref(),
                    version_segment,
                    Some(endpoint.namespace.as_str()),
                    Some(endpoint.path.as_str()),
                ]
                .into_iter()
                .flatten(),
            );
            if let Some(format) = format {
                if !raw.ends_with(')') {
                    raw.push_str(&format!("(.{format})"));
                }
            }

            let mut descriptor = RouteDescriptor::new(endpoint.verb, PathTemplate::parse(&raw)?)
                .with_versions(self.versions.iter().cloned())
                .with_namespace(endpoint.namespace);
            descriptor.options = endpoint.options;
            routes.push(Arc::new(descriptor));
        }

        Ok(Api {
            name: self.name,
            routes,
            mounts: self.mounts,
        })
    }
}
