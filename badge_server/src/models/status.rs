//! Buildbot result codes and their semantic statuses.
//!
//! Code semantics documented at
//! <http://docs.buildbot.net/current/developer/results.html#build-result-codes>.

/// Semantic status of the most recent build of a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Success,
    Unstable,
    Failure,
    Skipped,
    InfrastructureFailure,
    Timeout,
    Cancelled,
}

/// Result-code table, positionally indexed by the Buildbot code (0-6).
/// Process-wide constant; only indexed through the bounds check in
/// [`BuildStatus::from_result_code`].
const RESULT_CODES: [BuildStatus; 7] = [
    BuildStatus::Success,
    BuildStatus::Unstable, // "warnings" on the Buildbot side
    BuildStatus::Failure,
    BuildStatus::Skipped,
    BuildStatus::InfrastructureFailure, // "exception" -- problem in buildbot
    BuildStatus::Timeout,               // "retry" -- worker disconnection
    BuildStatus::Cancelled,
];

impl BuildStatus {
    /// Map a Buildbot result code to its status. Codes outside 0-6 yield
    /// `None`.
    pub fn from_result_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| RESULT_CODES.get(i).copied())
    }

    /// The status tag used in badge output.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildStatus::Success => "success",
            BuildStatus::Unstable => "unstable",
            BuildStatus::Failure => "failure",
            BuildStatus::Skipped => "skipped",
            BuildStatus::InfrastructureFailure => "infrastructure_failure",
            BuildStatus::Timeout => "timeout",
            BuildStatus::Cancelled => "cancelled",
        }
    }

    /// Badge color for this status.
    pub fn color(self) -> &'static str {
        match self {
            BuildStatus::Success => "brightgreen",
            BuildStatus::Unstable => "yellow",
            BuildStatus::Failure => "red",
            BuildStatus::Skipped => "lightgrey",
            BuildStatus::InfrastructureFailure => "orange",
            BuildStatus::Timeout => "orange",
            BuildStatus::Cancelled => "lightgrey",
        }
    }
}
