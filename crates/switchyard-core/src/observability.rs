//! Observability - outcome counts for a dispatched batch.
//!
//! Logging itself goes through `tracing` spans opened by `Dispatcher`;
//! this module only aggregates `DispatchReport`s for the CLI summary.

use serde::{Deserialize, Serialize};

use crate::app::DispatchReport;
use crate::domain::DispatchError;

/// Outcome counts for a dispatched batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchSummary {
    pub succeeded: usize,
    pub unhandled: usize,
    pub failed: usize,
}

impl DispatchSummary {
    pub fn from_reports(reports: &[DispatchReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut summary, report| {
                match &report.result {
                    Ok(()) => summary.succeeded += 1,
                    Err(DispatchError::UnhandledIntent(_)) => summary.unhandled += 1,
                    Err(DispatchError::Handler(_)) => summary.failed += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.unhandled + self.failed
    }
}
