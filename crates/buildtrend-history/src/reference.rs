//! Reference-build resolution for baseline comparison.
//!
//! Quality metrics of the current build are compared against a reference
//! build from its history. Two strategies decide which build that is; both
//! reuse the `BuildHistory` traversal and only differ in the parameters
//! they pass to it.

use tracing::debug;

use buildtrend_domain::{AnalysisResult, HistoricalRun, IssueContainer, ResultSelector};

use crate::history::{AttachedReport, BuildHistory};

/// How the reference build is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceStrategy {
    /// The nearest qualifying previous build, whatever its report says.
    PreviousBuild,

    /// The nearest previous build whose report itself was successful,
    /// trading adjacency for plugin-level consistency.
    StablePlugin,
}

/// Resolves the reference build for a baseline, using a fixed strategy.
///
/// One-shot query object: immutable after construction, answering the same
/// question repeatedly with the same result.
pub struct ReferenceFinder<'a, R, S> {
    history: BuildHistory<'a, R, S>,
    strategy: ReferenceStrategy,
    must_be_stable: bool,
}

impl<'a, R, S> ReferenceFinder<'a, R, S>
where
    R: HistoricalRun,
    S: ResultSelector<R>,
{
    /// Create a finder from the caller's configuration flags.
    ///
    /// `use_previous_build_as_reference` picks the `PreviousBuild` strategy,
    /// otherwise `StablePlugin` is used. `use_stable_build_as_reference`
    /// additionally restricts either strategy to stable builds.
    pub fn new(
        baseline: &'a R,
        selector: S,
        use_previous_build_as_reference: bool,
        use_stable_build_as_reference: bool,
    ) -> Self {
        let strategy = if use_previous_build_as_reference {
            ReferenceStrategy::PreviousBuild
        } else {
            ReferenceStrategy::StablePlugin
        };
        Self {
            history: BuildHistory::new(baseline, selector),
            strategy,
            must_be_stable: use_stable_build_as_reference,
        }
    }

    /// The strategy this finder resolves with.
    pub fn strategy(&self) -> ReferenceStrategy {
        self.strategy
    }

    /// The underlying history.
    pub fn history(&self) -> &BuildHistory<'a, R, S> {
        &self.history
    }

    /// The report selected by the strategy, with its owning build.
    pub fn reference_report(&self) -> Option<AttachedReport<'a, R, S::Report>> {
        match self.strategy {
            ReferenceStrategy::PreviousBuild => {
                self.history.find_qualifying(false, self.must_be_stable)
            }
            ReferenceStrategy::StablePlugin => {
                self.history.find_qualifying(true, self.must_be_stable)
            }
        }
    }

    /// The reference build, if one exists.
    ///
    /// The strategy-selected build must additionally pass the plain validity
    /// check, independent of how the strategy located it.
    pub fn reference(&self) -> Option<&'a R>
    where
        <S as ResultSelector<R>>::Report: 'a,
    {
        let attached = self.reference_report()?;
        if self.history.has_valid_result(attached.run) {
            Some(attached.run)
        } else {
            debug!(
                strategy = ?self.strategy,
                outcome = ?attached.run.outcome(),
                "strategy-selected build failed the validity check"
            );
            None
        }
    }

    /// Whether a reference build exists.
    pub fn has_reference(&self) -> bool {
        self.reference().is_some()
    }

    /// Issues of the strategy-selected report, or the empty container.
    ///
    /// Keyed off the raw strategy selection rather than the revalidated
    /// `reference()`; never fails.
    pub fn issues(&self) -> IssueContainer {
        match self.reference_report() {
            Some(attached) => attached.report.issues().clone(),
            None => IssueContainer::default(),
        }
    }
}
