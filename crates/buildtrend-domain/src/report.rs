//! Analysis results attached to historical builds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::issue::IssueContainer;
use crate::outcome::BuildOutcome;

/// Result an analysis tool attached to a build.
///
/// The plugin outcome is the tool's own verdict and may diverge from the
/// owning build's overall outcome: a build can fail for reasons unrelated
/// to the analysis, and an analysis can fail a build that otherwise passed.
pub trait AnalysisResult {
    /// The analysis tool's own verdict for the build.
    fn plugin_outcome(&self) -> BuildOutcome;

    /// Whether the analysis itself succeeded.
    fn is_successful(&self) -> bool {
        self.plugin_outcome() == BuildOutcome::Success
    }

    /// Findings reported for the build.
    fn issues(&self) -> &IssueContainer;
}

/// A recorded analysis result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,

    /// Which analysis tool produced the report.
    pub tool: String,

    /// The tool's verdict for the analyzed build.
    pub outcome: BuildOutcome,

    /// Findings reported for the analyzed build.
    pub issues: IssueContainer,

    /// When the report was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Create a new report.
    pub fn new(tool: String, outcome: BuildOutcome, issues: IssueContainer) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            tool,
            outcome,
            issues,
            recorded_at: Utc::now(),
        }
    }
}

impl AnalysisResult for AnalysisReport {
    fn plugin_outcome(&self) -> BuildOutcome {
        self.outcome
    }

    fn issues(&self) -> &IssueContainer {
        &self.issues
    }
}
