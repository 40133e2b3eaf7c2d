use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One component of a path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Fixed text, emitted as-is (`cats`)
    Literal(String),
    /// Named dynamic segment (`:id`)
    Param(String),
    /// Catch-all segment that may span several path components (`*path`)
    Wildcard(String),
}

impl Segment {
    /// Name of the segment if it is dynamic (param or wildcard).
    #[inline]
    #[must_use]
    pub fn dynamic_name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Param(name) => write!(f, ":{name}"),
            Segment::Wildcard(name) => write!(f, "*{name}"),
        }
    }
}

/// Error returned when a raw path template cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// `:` or `*` with no name after it
    EmptyParamName {
        /// The template being parsed
        template: String,
    },
    /// The same dynamic segment name appears twice
    DuplicateParam {
        /// The template being parsed
        template: String,
        /// The repeated name
        name: String,
    },
    /// A catch-all segment is followed by more segments
    WildcardNotLast {
        /// The template being parsed
        template: String,
    },
    /// A `(` without `)` or a format group that is not `(.ext)`
    MalformedFormat {
        /// The template being parsed
        template: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::EmptyParamName { template } => {
                write!(f, "path template '{template}' has a dynamic segment without a name")
            }
            TemplateError::DuplicateParam { template, name } => {
                write!(f, "path template '{template}' declares ':{name}' more than once")
            }
            TemplateError::WildcardNotLast { template } => {
                write!(f, "path template '{template}' has segments after its catch-all")
            }
            TemplateError::MalformedFormat { template } => {
                write!(
                    f,
                    "path template '{template}' has a malformed format group (expected '(.ext)' or '(.:format)')"
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Parsed path template: ordered segments plus an optional fixed extension.
///
/// The text form follows the declaration layer's conventions:
///
/// ```
/// use route_helpers::route::PathTemplate;
///
/// let t = PathTemplate::parse("/api/:version/cats/:id(.json)").unwrap();
/// assert_eq!(t.segments().len(), 4);
/// assert_eq!(t.extension(), Some(".json"));
/// assert_eq!(t.to_string(), "/api/:version/cats/:id(.json)");
/// ```
///
/// A trailing `(.:format)` marks a negotiable format and carries no fixed extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathTemplate {
    segments: Vec<Segment>,
    extension: Option<String>,
}

impl PathTemplate {
    /// Parse a raw template such as `/cats/:id/owners(.json)`.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let malformed = || TemplateError::MalformedFormat {
            template: raw.to_string(),
        };

        let (body, extension) = match raw.rfind('(') {
            Some(open) => {
                let group = raw[open..].strip_suffix(')').ok_or_else(malformed)?;
                let ext = group[1..].strip_prefix('.').ok_or_else(malformed)?;
                if ext.is_empty() || ext.contains(['/', '(', ')']) {
                    return Err(malformed());
                }
                let extension = if ext.starts_with(':') {
                    None
                } else {
                    Some(format!(".{ext}"))
                };
                (&raw[..open], extension)
            }
            None if raw.contains(')') => return Err(malformed()),
            None => (raw, None),
        };
        if body.contains(['(', ')']) {
            return Err(malformed());
        }

        let mut segments: Vec<Segment> = Vec::with_capacity(body.matches('/').count() + 1);
        for part in body.split('/').filter(|p| !p.is_empty()) {
            if matches!(segments.last(), Some(Segment::Wildcard(_))) {
                return Err(TemplateError::WildcardNotLast {
                    template: raw.to_string(),
                });
            }

            let segment = if let Some(name) = part.strip_prefix(':') {
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                Segment::Wildcard(name.to_string())
            } else {
                Segment::Literal(part.to_string())
            };

            if let Some(name) = segment.dynamic_name() {
                if name.is_empty() {
                    return Err(TemplateError::EmptyParamName {
                        template: raw.to_string(),
                    });
                }
                if segments.iter().any(|s| s.dynamic_name() == Some(name)) {
                    return Err(TemplateError::DuplicateParam {
                        template: raw.to_string(),
                        name: name.to_string(),
                    });
                }
            }
            segments.push(segment);
        }

        Ok(Self {
            segments,
            extension,
        })
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Fixed extension including its dot (`.json`), if the template declares one.
    #[inline]
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Names of all dynamic segments, left to right.
    pub fn dynamic_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::dynamic_name)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str("/")?;
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if let Some(ext) = &self.extension {
            write!(f, "({ext})")?;
        }
        Ok(())
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PathTemplate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
