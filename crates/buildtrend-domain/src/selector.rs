//! Pluggable extraction of an analysis report from a build.

use crate::report::AnalysisResult;
use crate::run::HistoricalRun;

/// Selects the analysis result a specific tool attached to a build.
///
/// A build may carry results from several analysis tools at once; each tool
/// supplies its own selector so the same history can be walked per tool.
/// The returned report is borrowed from the build it is attached to.
pub trait ResultSelector<R: HistoricalRun> {
    /// The report type this selector extracts.
    type Report: AnalysisResult;

    /// The report attached to `run`, or `None` if the tool left none.
    fn select<'r>(&self, run: &'r R) -> Option<&'r Self::Report>;
}
