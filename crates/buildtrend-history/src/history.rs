//! Backward traversal over a build history.
//!
//! A history starts from a baseline build and gives access to the results
//! previous builds of the same kind produced. Which result a build carries
//! is decided by the injected `ResultSelector`, so the same chain can be
//! walked once per analysis tool.

use chrono::{DateTime, Utc};
use tracing::debug;

use buildtrend_domain::{AnalysisResult, BuildOutcome, HistoricalRun, ResultSelector};

use crate::error::{HistoryError, Result};

/// Lazy iterator over the predecessors of a build, newest first.
///
/// Finite and non-restartable; each build is visited at most once.
pub struct Predecessors<'a, R> {
    next: Option<&'a R>,
}

impl<'a, R: HistoricalRun> Iterator for Predecessors<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<&'a R> {
        let current = self.next?;
        self.next = current.predecessor();
        Some(current)
    }
}

/// The predecessors of `run`, excluding `run` itself.
pub fn predecessors_of<R: HistoricalRun>(run: &R) -> Predecessors<'_, R> {
    Predecessors {
        next: run.predecessor(),
    }
}

/// A report together with the build it is attached to.
///
/// Traversal hands these out instead of giving reports a back-reference to
/// their owning build.
#[derive(Debug)]
pub struct AttachedReport<'a, R, A> {
    /// The build the report belongs to.
    pub run: &'a R,

    /// The report the selector extracted from that build.
    pub report: &'a A,
}

impl<R, A> Clone for AttachedReport<'_, R, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, A> Copy for AttachedReport<'_, R, A> {}

/// History of analysis results, walked backward from a baseline build.
///
/// Immutable after construction; every query is an idempotent read over the
/// externally-owned chain.
pub struct BuildHistory<'a, R, S> {
    /// The build to start the history from.
    baseline: &'a R,
    selector: S,
}

impl<'a, R, S> BuildHistory<'a, R, S>
where
    R: HistoricalRun,
    S: ResultSelector<R>,
{
    /// Create a new history starting at `baseline`.
    pub fn new(baseline: &'a R, selector: S) -> Self {
        Self { baseline, selector }
    }

    /// When the baseline build started.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.baseline.timestamp()
    }

    /// The report attached to the baseline build itself, without traversal.
    pub fn baseline_report(&self) -> Option<&'a S::Report> {
        self.selector.select(self.baseline)
    }

    /// The report attached to an arbitrary build of the chain.
    pub fn report_for<'r>(&self, run: &'r R) -> Option<&'r S::Report> {
        self.selector.select(run)
    }

    /// Whether a qualifying previous result exists.
    pub fn has_previous_report(&self) -> bool {
        self.find_qualifying(false, false).is_some()
    }

    /// Whether the history holds no qualifying previous result.
    pub fn is_empty(&self) -> bool {
        !self.has_previous_report()
    }

    /// The nearest qualifying previous report.
    ///
    /// Callers are expected to check `has_previous_report()` first; asking
    /// for a result that does not exist is a contract violation and yields
    /// `HistoryError::NoPreviousResult`.
    pub fn previous_report(&self) -> Result<&'a S::Report> {
        match self.find_qualifying(false, false) {
            Some(attached) => Ok(attached.report),
            None => Err(HistoryError::NoPreviousResult),
        }
    }

    /// The nearest qualifying previous report, restricted to stable builds
    /// when `must_be_stable` is set.
    pub fn previous_qualifying(
        &self,
        must_be_stable: bool,
    ) -> Option<AttachedReport<'a, R, S::Report>> {
        self.find_qualifying(false, must_be_stable)
    }

    /// Walk the chain backward and return the first candidate passing both
    /// the validity and the success filter.
    ///
    /// Validity: the candidate must have completed; with `must_be_stable`
    /// only a stable outcome qualifies, otherwise the outcome must be better
    /// than `Failure` unless the attached report pins the failure on the
    /// analysis tool itself. Success: with `status_relevant` the attached
    /// report must additionally report success.
    pub(crate) fn find_qualifying(
        &self,
        status_relevant: bool,
        must_be_stable: bool,
    ) -> Option<AttachedReport<'a, R, S::Report>> {
        for (distance, run) in predecessors_of(self.baseline).enumerate() {
            let report = match self.selector.select(run) {
                Some(report) => report,
                None => continue,
            };
            let valid = is_valid_candidate(run, must_be_stable, Some(report));
            let successful = !status_relevant || report.is_successful();
            if valid && successful {
                debug!(
                    distance,
                    outcome = ?run.outcome(),
                    "found qualifying previous result"
                );
                return Some(AttachedReport { run, report });
            }
        }
        debug!(status_relevant, must_be_stable, "no qualifying previous result");
        None
    }

    /// Whether `run` completed with an acceptable overall outcome, with no
    /// stability requirement and no report considered (so the plugin-cause
    /// exception never applies).
    pub(crate) fn has_valid_result(&self, run: &R) -> bool {
        is_valid_candidate(run, false, None::<&S::Report>)
    }
}

fn is_valid_candidate<R, A>(run: &R, must_be_stable: bool, report: Option<&A>) -> bool
where
    R: HistoricalRun,
    A: AnalysisResult,
{
    let outcome = match run.outcome() {
        Some(outcome) => outcome,
        None => return false,
    };
    if must_be_stable {
        return outcome.is_stable();
    }
    outcome.is_better_than(BuildOutcome::Failure) || is_plugin_cause_for_failure(report)
}

/// Whether the attached report pins an overall build failure on the analysis
/// tool itself, which keeps the build eligible for comparison.
fn is_plugin_cause_for_failure<A: AnalysisResult>(report: Option<&A>) -> bool {
    match report {
        Some(report) => report
            .plugin_outcome()
            .is_worse_or_equal_to(BuildOutcome::Failure),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildtrend_domain::fakes::{RecordedBuild, ToolReportSelector};
    use buildtrend_domain::{AnalysisReport, IssueContainer};

    fn report(outcome: BuildOutcome) -> AnalysisReport {
        AnalysisReport::new("lint".to_string(), outcome, IssueContainer::new())
    }

    fn lint_selector() -> ToolReportSelector {
        ToolReportSelector::new("lint".to_string())
    }

    #[test]
    fn test_previous_report_returns_nearest_qualifying() {
        let r1 = report(BuildOutcome::Success);
        let r2 = report(BuildOutcome::Success);
        let expected = r2.report_id;

        let b1 = RecordedBuild::completed(1, BuildOutcome::Success).with_report(r1);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success)
            .with_report(r2)
            .after(b1);
        let b3 = RecordedBuild::completed(3, BuildOutcome::Success).after(b2);

        let history = BuildHistory::new(&b3, lint_selector());
        assert!(history.has_previous_report());
        assert_eq!(history.previous_report().expect("previous").report_id, expected);
    }

    #[test]
    fn test_failed_build_without_report_is_skipped() {
        // A failure with nothing attached cannot justify itself via the
        // plugin-cause exception, so the walk continues past it.
        let r1 = report(BuildOutcome::Success);
        let r2 = report(BuildOutcome::Success);
        let expected = r2.report_id;

        let b1 = RecordedBuild::completed(1, BuildOutcome::Success).with_report(r1);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success)
            .with_report(r2)
            .after(b1);
        let b3 = RecordedBuild::completed(3, BuildOutcome::Failure).after(b2);
        let b4 = RecordedBuild::completed(4, BuildOutcome::Success).after(b3);

        let history = BuildHistory::new(&b4, lint_selector());
        assert_eq!(history.previous_report().expect("previous").report_id, expected);
    }

    #[test]
    fn test_plugin_cause_makes_failed_build_eligible() {
        let r2 = report(BuildOutcome::Success);
        let r3 = report(BuildOutcome::Failure);
        let expected = r3.report_id;

        let b2 = RecordedBuild::completed(2, BuildOutcome::Success).with_report(r2);
        let b3 = RecordedBuild::completed(3, BuildOutcome::Failure)
            .with_report(r3)
            .after(b2);
        let b4 = RecordedBuild::completed(4, BuildOutcome::Success).after(b3);

        let history = BuildHistory::new(&b4, lint_selector());
        assert_eq!(history.previous_report().expect("previous").report_id, expected);
    }

    #[test]
    fn test_empty_chain_has_no_previous_report() {
        let baseline = RecordedBuild::completed(1, BuildOutcome::Success);

        let history = BuildHistory::new(&baseline, lint_selector());
        assert!(!history.has_previous_report());
        assert!(history.is_empty());
        assert_eq!(history.previous_report(), Err(HistoryError::NoPreviousResult));
    }

    #[test]
    fn test_in_progress_build_is_never_eligible() {
        // A report may already be attached while the build is running; the
        // missing terminal outcome still disqualifies it.
        let b1 = RecordedBuild::in_progress(1).with_report(report(BuildOutcome::Success));
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success).after(b1);

        let history = BuildHistory::new(&b2, lint_selector());
        assert!(history.is_empty());
    }

    #[test]
    fn test_stable_scan_skips_unstable_builds() {
        let r1 = report(BuildOutcome::Success);
        let expected = r1.report_id;

        let b1 = RecordedBuild::completed(1, BuildOutcome::Success).with_report(r1);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Unstable)
            .with_report(report(BuildOutcome::Unstable))
            .after(b1);
        let b3 = RecordedBuild::completed(3, BuildOutcome::Success).after(b2);

        let history = BuildHistory::new(&b3, lint_selector());
        let attached = history.previous_qualifying(true).expect("stable previous");
        assert_eq!(attached.run.number(), 1);
        assert_eq!(attached.report.report_id, expected);

        // The unqualified scan accepts the nearer unstable build.
        let attached = history.previous_qualifying(false).expect("previous");
        assert_eq!(attached.run.number(), 2);
    }

    #[test]
    fn test_baseline_report_does_not_traverse() {
        let r1 = report(BuildOutcome::Success);
        let r2 = report(BuildOutcome::Unstable);
        let expected_baseline = r2.report_id;
        let expected_previous = r1.report_id;

        let b1 = RecordedBuild::completed(1, BuildOutcome::Success).with_report(r1);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success)
            .with_report(r2)
            .after(b1);

        let history = BuildHistory::new(&b2, lint_selector());
        assert_eq!(
            history.baseline_report().expect("baseline").report_id,
            expected_baseline
        );

        let b1 = b2.predecessor().expect("b1");
        assert_eq!(
            history.report_for(b1).expect("b1 report").report_id,
            expected_previous
        );
    }

    #[test]
    fn test_timestamp_is_baseline_timestamp() {
        let b1 = RecordedBuild::completed(1, BuildOutcome::Success);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success).after(b1);

        let history = BuildHistory::new(&b2, lint_selector());
        assert_eq!(history.timestamp(), b2.timestamp());
    }

    #[test]
    fn test_predecessors_iterates_newest_first() {
        let b1 = RecordedBuild::completed(1, BuildOutcome::Success);
        let b2 = RecordedBuild::completed(2, BuildOutcome::Success).after(b1);
        let b3 = RecordedBuild::completed(3, BuildOutcome::Success).after(b2);

        let numbers: Vec<u32> = predecessors_of(&b3).map(|run| run.number()).collect();
        assert_eq!(numbers, vec![2, 1]);
    }
}
