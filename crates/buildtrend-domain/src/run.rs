//! Capability contract over the externally-owned build chain.

use chrono::{DateTime, Utc};

use crate::outcome::BuildOutcome;

/// A build in a backward-linked history, owned by the host system.
///
/// Guarantees expected from implementations:
/// - The predecessor chain is finite, acyclic, and strictly backward in
///   time; `predecessor()` returning `None` terminates it.
/// - A build is immutable once it has an outcome.
/// - `outcome()` is `None` while the build is still running; such a build
///   is never eligible as a previous or reference build.
pub trait HistoricalRun {
    /// The immediately preceding build, if any.
    fn predecessor(&self) -> Option<&Self>;

    /// Terminal outcome, or `None` while the build is in progress.
    fn outcome(&self) -> Option<BuildOutcome>;

    /// When the build started.
    fn timestamp(&self) -> DateTime<Utc>;
}
