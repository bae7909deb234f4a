//! BuildTrend History - previous-result and reference-build resolution
//!
//! Provides the backward traversal that trend and regression reporting is
//! built on:
//! - `BuildHistory`: walks the predecessor chain from a baseline build and
//!   yields the nearest qualifying analysis report
//! - `ReferenceFinder`: selects the reference build used as the comparison
//!   baseline, via one of two interchangeable strategies
//!
//! All queries are synchronous, side-effect-free reads over an
//! externally-owned chain; the host system supplies the builds and the
//! per-tool report selector.

pub mod error;
pub mod history;
pub mod reference;

// Re-export key types
pub use error::{HistoryError, Result};
pub use history::{predecessors_of, AttachedReport, BuildHistory, Predecessors};
pub use reference::{ReferenceFinder, ReferenceStrategy};

/// BuildTrend history version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
