//! Issues reported by an analysis tool.

use serde::{Deserialize, Serialize};

/// Severity of a single issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Low,
    Normal,
    High,
}

/// A single finding produced by an analysis tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Severity level.
    pub severity: IssueSeverity,

    /// Human-readable message.
    pub message: String,

    /// Tool-specific category (e.g. a lint or rule name).
    pub category: Option<String>,

    /// Source file path (relative to workspace root).
    pub file: Option<String>,

    /// Line number (1-indexed).
    pub line: Option<u32>,
}

impl Issue {
    /// Create a new issue.
    pub fn new(severity: IssueSeverity, message: String) -> Self {
        Self {
            severity,
            message,
            category: None,
            file: None,
            line: None,
        }
    }

    /// Set file location.
    pub fn with_location(mut self, file: String, line: u32) -> Self {
        self.file = Some(file);
        self.line = Some(line);
        self
    }

    /// Set tool-specific category.
    pub fn with_category(mut self, category: String) -> Self {
        self.category = Some(category);
        self
    }
}

/// Ordered collection of issues attached to an analysis report.
///
/// `Default` is the empty container; queries that have no report to draw
/// from fall back to it instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IssueContainer {
    issues: Vec<Issue>,
}

impl IssueContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Number of issues in the container.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether the container holds no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over the issues in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Number of issues with the given severity.
    pub fn count_of(&self, severity: IssueSeverity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

impl FromIterator<Issue> for IssueContainer {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        Self {
            issues: iter.into_iter().collect(),
        }
    }
}
