use std::fmt;

use crate::probe::target::ProbeTarget;

/// Classification of a single probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// TCP: the handshake completed within the timeout.
    /// UDP: the local stack emitted one datagram without error. This says
    /// nothing about a remote listener; see the UDP probe in the core crate.
    Passed,
    /// Refusal, timeout, unreachable or resolution failure. The causes are
    /// deliberately not distinguished in the report.
    Failed,
    /// The target named a protocol the engine does not know. No I/O was
    /// performed.
    SkippedUnknownProtocol,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "PASSED"),
            Outcome::Failed => write!(f, "FAILED"),
            Outcome::SkippedUnknownProtocol => write!(f, "SKIPPED (unknown protocol)"),
        }
    }
}

/// One probe, one result, in target-list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn new(target: ProbeTarget, outcome: Outcome) -> Self {
        Self { target, outcome }
    }
}
