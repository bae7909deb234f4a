//! In-memory fakes for the history contracts (testing only)
//!
//! Provides `RecordedBuild` and `ToolReportSelector` that satisfy the
//! `HistoricalRun` and `ResultSelector` contracts without a host system.

use chrono::{DateTime, Utc};

use crate::outcome::BuildOutcome;
use crate::report::AnalysisReport;
use crate::run::HistoricalRun;
use crate::selector::ResultSelector;

// ---------------------------------------------------------------------------
// RecordedBuild
// ---------------------------------------------------------------------------

/// In-memory build chain node.
///
/// Timestamps are derived from the build number, so a chain built with
/// ascending numbers is strictly backward in time when walked via
/// `predecessor()`.
#[derive(Debug, Clone)]
pub struct RecordedBuild {
    number: u32,
    outcome: Option<BuildOutcome>,
    timestamp: DateTime<Utc>,
    reports: Vec<AnalysisReport>,
    predecessor: Option<Box<RecordedBuild>>,
}

impl RecordedBuild {
    /// A completed build with the given number and outcome.
    pub fn completed(number: u32, outcome: BuildOutcome) -> Self {
        Self {
            number,
            outcome: Some(outcome),
            timestamp: timestamp_for(number),
            reports: Vec::new(),
            predecessor: None,
        }
    }

    /// A build that is still running (no terminal outcome yet).
    pub fn in_progress(number: u32) -> Self {
        Self {
            number,
            outcome: None,
            timestamp: timestamp_for(number),
            reports: Vec::new(),
            predecessor: None,
        }
    }

    /// Attach an analysis report to this build.
    pub fn with_report(mut self, report: AnalysisReport) -> Self {
        self.reports.push(report);
        self
    }

    /// Link this build after `predecessor` in the chain.
    pub fn after(mut self, predecessor: RecordedBuild) -> Self {
        self.predecessor = Some(Box::new(predecessor));
        self
    }

    /// The build number.
    pub fn number(&self) -> u32 {
        self.number
    }
}

fn timestamp_for(number: u32) -> DateTime<Utc> {
    DateTime::from_timestamp(1_600_000_000 + i64::from(number) * 60, 0).unwrap()
}

impl HistoricalRun for RecordedBuild {
    fn predecessor(&self) -> Option<&Self> {
        self.predecessor.as_deref()
    }

    fn outcome(&self) -> Option<BuildOutcome> {
        self.outcome
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

// ---------------------------------------------------------------------------
// ToolReportSelector
// ---------------------------------------------------------------------------

/// Selects the report a specific tool attached to a `RecordedBuild`.
#[derive(Debug, Clone)]
pub struct ToolReportSelector {
    tool: String,
}

impl ToolReportSelector {
    pub fn new(tool: String) -> Self {
        Self { tool }
    }
}

impl ResultSelector<RecordedBuild> for ToolReportSelector {
    type Report = AnalysisReport;

    fn select<'r>(&self, run: &'r RecordedBuild) -> Option<&'r AnalysisReport> {
        run.reports.iter().find(|report| report.tool == self.tool)
    }
}
