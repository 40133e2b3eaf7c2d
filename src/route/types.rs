use super::template::PathTemplate;
use http::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Option key carrying an explicit helper name (`as: my_route`).
pub const EXPLICIT_NAME_OPTION: &str = "as";

/// HTTP verb a route is declared for.
///
/// `Any` is the catch-all verb of the declaration layer; it has no
/// [`http::Method`] counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Any,
}

impl Verb {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Head => "HEAD",
            Verb::Options => "OPTIONS",
            Verb::Any => "ANY",
        }
    }

    /// The matching [`http::Method`], or `None` for [`Verb::Any`].
    #[must_use]
    pub fn method(&self) -> Option<Method> {
        match self {
            Verb::Get => Some(Method::GET),
            Verb::Post => Some(Method::POST),
            Verb::Put => Some(Method::PUT),
            Verb::Patch => Some(Method::PATCH),
            Verb::Delete => Some(Method::DELETE),
            Verb::Head => Some(Method::HEAD),
            Verb::Options => Some(Method::OPTIONS),
            Verb::Any => None,
        }
    }

    /// Whether a request with `method` reaches a route declared with this verb.
    #[must_use]
    pub fn accepts(&self, method: &Method) -> bool {
        match self.method() {
            Some(own) => own == *method,
            None => true,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a verb name is not one the declaration layer supports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl fmt::Display for UnknownVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported HTTP verb '{}'", self.0)
    }
}

impl std::error::Error for UnknownVerb {}

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "PATCH" => Ok(Verb::Patch),
            "DELETE" => Ok(Verb::Delete),
            "HEAD" => Ok(Verb::Head),
            "OPTIONS" => Ok(Verb::Options),
            "ANY" => Ok(Verb::Any),
            _ => Err(UnknownVerb(s.to_string())),
        }
    }
}

impl TryFrom<&Method> for Verb {
    type Error = UnknownVerb;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

/// One declared endpoint, as produced by the declaration layer.
///
/// Descriptors are immutable once built. Two descriptors are the same route
/// when every field compares equal; the catalog builder relies on this to
/// collapse routes seen through several mount points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteDescriptor {
    pub verb: Verb,
    pub path: PathTemplate,
    /// Declared versions in order; empty means versionless
    pub versions: Vec<String>,
    /// Namespace the endpoint was declared in (e.g. `/cats/:id`)
    pub namespace: String,
    pub options: BTreeMap<String, Value>,
}

impl RouteDescriptor {
    #[must_use]
    pub fn new(verb: Verb, path: PathTemplate) -> Self {
        Self {
            verb,
            path,
            versions: Vec::new(),
            namespace: "/".to_string(),
            options: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions = versions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Explicit helper name from the `as` option, if declared.
    #[must_use]
    pub fn explicit_name(&self) -> Option<&str> {
        self.options
            .get(EXPLICIT_NAME_OPTION)
            .and_then(Value::as_str)
    }

    /// Value the route itself supplies for a dynamic segment.
    ///
    /// Only scalar options bind; `as` never does.
    #[must_use]
    pub fn option_binding(&self, segment: &str) -> Option<String> {
        if segment == EXPLICIT_NAME_OPTION {
            return None;
        }
        match self.options.get(segment)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
