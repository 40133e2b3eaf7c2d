//! Path rendering: template substitution, format suffix and query string.

use super::decorated::{format_suffix, DecoratedRoute, FORMAT_KEY, PARAMS_KEY};
use super::error::HelperError;
use crate::route::Segment;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Render `route` with a parameter mapping.
///
/// `params` must be a JSON object; see [`render_path`] for the rules.
pub fn render(route: &DecoratedRoute, params: &Value) -> Result<String, HelperError> {
    let map = params
        .as_object()
        .ok_or_else(|| HelperError::invalid_argument(route.name(), "a mapping", params))?;
    render_path(route, map)
}

/// Render `route` into `<path><suffix>[?<query>]`.
///
/// - literal segments are emitted as-is, bound segments with the route's own
///   value, and `:name`/`*name` with the percent-encoded string form of
///   `params[name]` (missing, null or empty is [`HelperError::MissingSegment`])
/// - a `*name` value keeps its inner slashes; each piece is encoded separately
/// - a string `format` key overrides the route's suffix; `""` drops it. The
///   suffix is skipped only when the template's last literal already ends with it
/// - the `params` key, if present, must be a mapping and becomes the query
///   string in the order given
/// - any other leftover keys are ignored
pub fn render_path(route: &DecoratedRoute, params: &Map<String, Value>) -> Result<String, HelperError> {
    let mut path = String::with_capacity(64);

    for segment in route.path().segments() {
        match segment {
            Segment::Literal(text) => {
                let text = text.trim_matches('/');
                if !text.is_empty() {
                    path.push('/');
                    path.push_str(text);
                }
            }
            Segment::Param(name) | Segment::Wildcard(name) => {
                let value = match route.bound_value(name) {
                    Some(bound) => bound,
                    None => segment_value(route, name, params.get(name.as_str()))?,
                };
                let value = value.trim_matches('/');
                if value.is_empty() {
                    return Err(HelperError::MissingSegment {
                        helper: route.name().to_string(),
                        segment: name.clone(),
                    });
                }
                path.push('/');
                if matches!(segment, Segment::Wildcard(_)) {
                    push_encoded_pieces(&mut path, value);
                } else {
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
    }
    if path.is_empty() {
        path.push('/');
    }

    let suffix = match params.get(FORMAT_KEY) {
        None => route.format_suffix().map(str::to_string),
        Some(Value::String(requested)) => format_suffix(requested),
        Some(other) => {
            return Err(HelperError::invalid_argument(route.name(), "a format string", other))
        }
    };
    if let Some(suffix) = suffix {
        let declared = matches!(
            route.path().segments().last(),
            Some(Segment::Literal(text)) if text.ends_with(suffix.as_str())
        );
        if !declared {
            path.push_str(&suffix);
        }
    }

    match params.get(PARAMS_KEY) {
        None => {}
        Some(Value::Object(query)) => {
            let query = to_query(query);
            if !query.is_empty() {
                path.push('?');
                path.push_str(&query);
            }
        }
        Some(other) => {
            return Err(HelperError::invalid_argument(
                route.name(),
                "a query mapping under 'params'",
                other,
            ))
        }
    }

    Ok(path)
}

/// Encode a wildcard value piece by piece, keeping its `/` separators.
fn push_encoded_pieces(path: &mut String, value: &str) {
    for (i, piece) in value.split('/').enumerate() {
        if i > 0 {
            path.push('/');
        }
        path.push_str(&urlencoding::encode(piece));
    }
}

fn segment_value<'a>(
    route: &DecoratedRoute,
    segment: &str,
    value: Option<&'a Value>,
) -> Result<Cow<'a, str>, HelperError> {
    match value {
        None | Some(Value::Null) => Err(HelperError::MissingSegment {
            helper: route.name().to_string(),
            segment: segment.to_string(),
        }),
        Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
        Some(Value::Number(n)) => Ok(Cow::Owned(n.to_string())),
        Some(Value::Bool(b)) => Ok(Cow::Owned(b.to_string())),
        Some(other) => Err(HelperError::invalid_argument(
            route.name(),
            "a scalar segment value",
            other,
        )),
    }
}

/// Encode a mapping as a query string, keeping entry order.
///
/// Nested mappings use `key[sub]=v`, arrays `key[]=v`, null `key=`. Keys and
/// values are percent-encoded.
///
/// ```
/// use route_helpers::helpers::to_query;
/// use serde_json::json;
///
/// let q = json!({"foo": "bar", "tags": ["a b", 2]});
/// assert_eq!(to_query(q.as_object().unwrap()), "foo=bar&tags%5B%5D=a%20b&tags%5B%5D=2");
/// ```
#[must_use]
pub fn to_query(params: &Map<String, Value>) -> String {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        push_pairs(&mut pairs, key.clone(), value);
    }
    pairs.join("&")
}

fn push_pairs(pairs: &mut Vec<String>, key: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (sub, nested) in map {
                push_pairs(pairs, format!("{key}[{sub}]"), nested);
            }
        }
        Value::Array(items) => {
            let key = format!("{key}[]");
            for item in items {
                push_pairs(pairs, key.clone(), item);
            }
        }
        Value::Null => pairs.push(format!("{}=", urlencoding::encode(&key))),
        Value::String(s) => pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(s)
        )),
        Value::Number(_) | Value::Bool(_) => pairs.push(format!(
            "{}={}",
            urlencoding::encode(&key),
            urlencoding::encode(&value.to_string())
        )),
    }
}
