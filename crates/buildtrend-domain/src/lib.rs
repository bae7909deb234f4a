//! BuildTrend Domain Model
//!
//! Defines the vocabulary shared by trend and regression reporting:
//! - BuildOutcome: ordered severity scale for a completed build
//! - Issue / IssueContainer: findings attached to an analysis report
//! - AnalysisResult / AnalysisReport: the result an analysis tool attaches to a build
//! - HistoricalRun: capability contract over the externally-owned build chain
//! - ResultSelector: pluggable extraction of a tool's report from a build
//!
//! The build chain itself is owned by the host system; this crate only
//! describes how to read it. In-memory fakes are provided for testing via
//! the `fakes` module.

pub mod fakes;
pub mod issue;
pub mod outcome;
pub mod report;
pub mod run;
pub mod selector;

pub use issue::{Issue, IssueContainer, IssueSeverity};
pub use outcome::BuildOutcome;
pub use report::{AnalysisReport, AnalysisResult};
pub use run::HistoricalRun;
pub use selector::ResultSelector;

/// BuildTrend domain version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
