//! Overall outcome of a completed build.

use serde::{Deserialize, Serialize};

/// Terminal status of a build, ordered by severity (best first).
///
/// The derived `Ord` follows declaration order, so a smaller value is a
/// better outcome. A build that is still running has no outcome at all;
/// the chain contract models that as `Option<BuildOutcome>`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BuildOutcome {
    Success,
    Unstable,
    Failure,
    Aborted,
    NotBuilt,
}

impl BuildOutcome {
    /// Whether this outcome is strictly better than `other`.
    pub fn is_better_than(self, other: BuildOutcome) -> bool {
        self < other
    }

    /// Whether this outcome is at least as good as `other`.
    pub fn is_better_or_equal_to(self, other: BuildOutcome) -> bool {
        self <= other
    }

    /// Whether this outcome is at least as bad as `other`.
    pub fn is_worse_or_equal_to(self, other: BuildOutcome) -> bool {
        self >= other
    }

    /// Whether this is the best possible outcome.
    pub fn is_stable(self) -> bool {
        self == BuildOutcome::Success
    }
}

impl std::fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildOutcome::Success => write!(f, "success"),
            BuildOutcome::Unstable => write!(f, "unstable"),
            BuildOutcome::Failure => write!(f, "failure"),
            BuildOutcome::Aborted => write!(f, "aborted"),
            BuildOutcome::NotBuilt => write!(f, "not_built"),
        }
    }
}
