use serde_json::Value;
use std::fmt;

/// Failure of a helper lookup, match or render
///
/// All variants are local to the call that produced them; none of them
/// touch the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// An argument that must be a mapping (or a string) was something else
    InvalidArgument {
        /// Helper being called
        helper: String,
        /// What the argument had to be
        expected: &'static str,
        /// JSON type actually supplied
        found: &'static str,
    },
    /// No route in the catalog carries this helper name
    UnknownRouteName {
        /// The requested name
        name: String,
    },
    /// Routes share this name but none takes exactly the supplied segments
    NoMatchingVariant {
        /// The requested name
        name: String,
        /// Non-reserved parameter keys the caller supplied
        supplied: Vec<String>,
    },
    /// A dynamic segment had no value in the parameters
    MissingSegment {
        /// Helper being rendered
        helper: String,
        /// The segment without a value
        segment: String,
    },
}

impl HelperError {
    pub(crate) fn invalid_argument(helper: &str, expected: &'static str, found: &Value) -> Self {
        HelperError::InvalidArgument {
            helper: helper.to_string(),
            expected,
            found: json_type_name(found),
        }
    }

    /// True for the "no such helper" class of failures.
    #[must_use]
    pub fn is_unknown_route(&self) -> bool {
        matches!(self, HelperError::UnknownRouteName { .. })
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::InvalidArgument {
                helper,
                expected,
                found,
            } => {
                write!(f, "helper '{helper}' expects {expected}, got {found}")
            }
            HelperError::UnknownRouteName { name } => {
                write!(f, "no route helper named '{name}'")
            }
            HelperError::NoMatchingVariant { name, supplied } => {
                write!(
                    f,
                    "no '{name}' route takes exactly the segments [{}]",
                    supplied.join(", ")
                )
            }
            HelperError::MissingSegment { helper, segment } => {
                write!(f, "helper '{helper}' is missing a value for segment '{segment}'")
            }
        }
    }
}

impl std::error::Error for HelperError {}
