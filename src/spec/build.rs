use super::types::{ApiDecl, DeclarationFile};
use crate::api::Api;
use crate::route::Verb;
use crate::validator::{fail_if_issues, IssueKind, ValidationIssue};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Build every declared API, resolving mounts.
///
/// APIs come back in declaration order. Any validation issue fails the whole
/// file; the issues are logged and folded into the returned error.
pub fn build_apis(file: &DeclarationFile) -> anyhow::Result<Vec<Arc<Api>>> {
    let (apis, issues) = resolve_apis(file);
    fail_if_issues(issues)?;
    Ok(apis)
}

/// All validation issues in `file`; empty when it builds cleanly.
#[must_use]
pub fn validate_declarations(file: &DeclarationFile) -> Vec<ValidationIssue> {
    resolve_apis(file).1
}

fn resolve_apis(file: &DeclarationFile) -> (Vec<Arc<Api>>, Vec<ValidationIssue>) {
    let mut resolver = Resolver {
        index: HashMap::new(),
        built: HashMap::new(),
        failed: HashSet::new(),
        visiting: Vec::new(),
        issues: Vec::new(),
    };

    for (i, decl) in file.apis.iter().enumerate() {
        if resolver.index.contains_key(decl.name.as_str()) {
            resolver.issues.push(ValidationIssue::new(
                format!("apis[{i}]"),
                IssueKind::DuplicateApi,
                format!("API '{}' is declared more than once", decl.name),
            ));
            continue;
        }
        resolver.index.insert(decl.name.as_str(), decl);
    }

    let mut apis = Vec::with_capacity(file.apis.len());
    for name in file.apis.iter().map(|d| d.name.as_str()) {
        if let Some(api) = resolver.resolve(name) {
            if !apis.iter().any(|a| Arc::ptr_eq(a, &api)) {
                apis.push(api);
            }
        }
    }
    (apis, resolver.issues)
}

struct Resolver<'a> {
    index: HashMap<&'a str, &'a ApiDecl>,
    built: HashMap<&'a str, Arc<Api>>,
    failed: HashSet<&'a str>,
    visiting: Vec<&'a str>,
    issues: Vec<ValidationIssue>,
}

impl<'a> Resolver<'a> {
    fn resolve(&mut self, name: &str) -> Option<Arc<Api>> {
        let decl: &'a ApiDecl = self.index.get(name).copied()?;
        let name = decl.name.as_str();

        if let Some(start) = self.visiting.iter().position(|n| *n == name) {
            let mut chain = self.visiting[start..].to_vec();
            chain.push(name);
            self.issues.push(ValidationIssue::new(
                format!("apis.{name}.mounts"),
                IssueKind::MountCycle,
                format!("mount cycle {}", chain.join(" -> ")),
            ));
            return None;
        }
        if let Some(api) = self.built.get(name) {
            return Some(Arc::clone(api));
        }
        if self.failed.contains(name) {
            return None;
        }

        self.visiting.push(name);
        let mut mounts = Vec::with_capacity(decl.mounts.len());
        let mut mounts_ok = true;
        for mount in &decl.mounts {
            if !self.index.contains_key(mount.as_str()) {
                self.issues.push(ValidationIssue::new(
                    format!("apis.{name}.mounts"),
                    IssueKind::UnknownMount,
                    format!("no API named '{mount}'"),
                ));
                mounts_ok = false;
                continue;
            }
            match self.resolve(mount) {
                Some(api) => mounts.push(api),
                None => mounts_ok = false,
            }
        }
        self.visiting.pop();

        let api = build_api(decl, mounts, &mut self.issues).filter(|_| mounts_ok);
        match api {
            Some(api) => {
                let api = Arc::new(api);
                debug!(api = %name, routes = api.routes().len(), mounts = api.mounts().len(), "Built API from declarations");
                self.built.insert(name, Arc::clone(&api));
                Some(api)
            }
            None => {
                self.failed.insert(name);
                None
            }
        }
    }
}

fn build_api(
    decl: &ApiDecl,
    mounts: Vec<Arc<Api>>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<Api> {
    let mut endpoints = Vec::with_capacity(decl.routes.len());
    for (i, route) in decl.routes.iter().enumerate() {
        match route.method.parse::<Verb>() {
            Ok(verb) => endpoints.push((verb, route)),
            Err(e) => issues.push(ValidationIssue::new(
                format!("apis.{}.routes[{i}]", decl.name),
                IssueKind::UnknownMethod,
                e.to_string(),
            )),
        }
    }
    if endpoints.len() != decl.routes.len() {
        return None;
    }

    let mut builder = Api::builder(decl.name.as_str()).versions(decl.all_versions());
    if let Some(prefix) = &decl.prefix {
        builder = builder.prefix(prefix.as_str());
    }
    if let Some(format) = &decl.format {
        builder = builder.format(format.as_str());
    }
    builder = builder.routes(|mut scope| {
        for (verb, route) in endpoints {
            let options = route.route_options();
            scope = match route.namespace.as_deref() {
                Some(namespace) => {
                    scope.namespace(namespace, |inner| inner.route_with(verb, &route.path, options))
                }
                None => scope.route_with(verb, &route.path, options),
            };
        }
        scope
    });
    for mounted in mounts {
        builder = builder.mount(mounted);
    }

    match builder.build() {
        Ok(api) => Some(api),
        Err(e) => {
            issues.push(ValidationIssue::new(
                format!("apis.{}", decl.name),
                IssueKind::InvalidTemplate,
                e.to_string(),
            ));
            None
        }
    }
}
