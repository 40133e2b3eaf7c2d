//! Validation issues found while turning declaration files into APIs.

use std::fmt;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Two APIs share a name
    DuplicateApi,
    /// A route method is not a supported verb
    UnknownMethod,
    /// A mount names an API that is not declared
    UnknownMount,
    /// APIs mount each other
    MountCycle,
    /// A declared path does not parse as a template
    InvalidTemplate,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueKind::DuplicateApi => "DuplicateApi",
            IssueKind::UnknownMethod => "UnknownMethod",
            IssueKind::UnknownMount => "UnknownMount",
            IssueKind::MountCycle => "MountCycle",
            IssueKind::InvalidTemplate => "InvalidTemplate",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: IssueKind,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        ValidationIssue {
            location: location.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

pub fn log_issues(issues: &[ValidationIssue]) {
    error!(
        issue_count = issues.len(),
        "Route declaration validation failed"
    );
    for issue in issues {
        error!(
            kind = %issue.kind,
            location = %issue.location,
            message = %issue.message,
            "Route declaration issue"
        );
    }
}

/// Log every issue and turn them into a single error; `Ok` when there are none.
pub fn fail_if_issues(issues: Vec<ValidationIssue>) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    log_issues(&issues);
    let details: Vec<String> = issues.iter().map(ToString::to_string).collect();
    anyhow::bail!(
        "route declarations failed validation with {} issue(s):\n{}",
        issues.len(),
        details.join("\n")
    )
}
