use crate::route::EXPLICIT_NAME_OPTION;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top level of a declaration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DeclarationFile {
    #[serde(default)]
    pub apis: Vec<ApiDecl>,
}

/// One API: prefix, versions, format, routes and the APIs it mounts
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Shorthand for a single-element `versions`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Names of other APIs in the same file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteDecl>,
}

impl ApiDecl {
    /// `version` followed by `versions`, in declared order.
    pub fn all_versions(&self) -> impl Iterator<Item = &str> {
        self.version
            .iter()
            .chain(self.versions.iter())
            .map(String::as_str)
    }
}

fn default_method() -> String {
    "GET".to_string()
}

/// One endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteDecl {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub path: String,
    /// Explicit helper name
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, Value>,
}

impl RouteDecl {
    /// Declared options with the explicit name folded in under `as`.
    #[must_use]
    pub fn route_options(&self) -> BTreeMap<String, Value> {
        let mut options = self.options.clone();
        if let Some(name) = &self.name {
            options.insert(EXPLICIT_NAME_OPTION.to_string(), Value::String(name.clone()));
        }
        options
    }
}
