//! The probe engine.
//!
//! One probe per target, strictly in list order, no retries. Every failure
//! mode inside a single target's check folds into its [`Outcome`]; nothing
//! escapes to abort the run. Sequential execution is deliberate: the lists
//! are small and static, and serial probing keeps the report order equal to
//! the configuration order with zero coordination.

use std::time::Duration;

use edgeprobe_common::probe::{Outcome, ProbeResult, ProbeTarget, Protocol};
use edgeprobe_common::warn;

use crate::net::{tcp, udp};

/// Classifies the reachability of one target.
///
/// TCP passes on a completed handshake, UDP on a locally successful 1-byte
/// send (see [`udp::probe`] for the deliberately weak meaning of that).
/// Unknown protocols are skipped without any socket I/O.
pub async fn probe(target: &ProbeTarget, probe_timeout: Duration) -> Outcome {
    match &target.protocol {
        Protocol::Tcp => {
            if tcp::probe(&target.hostname, target.port, probe_timeout).await {
                Outcome::Passed
            } else {
                Outcome::Failed
            }
        }
        Protocol::Udp => {
            if udp::probe(&target.hostname, target.port, probe_timeout).await {
                Outcome::Passed
            } else {
                Outcome::Failed
            }
        }
        Protocol::Other(name) => {
            warn!(
                "Unknown protocol '{}' for {}:{}, skipping",
                name, target.hostname, target.port
            );
            Outcome::SkippedUnknownProtocol
        }
    }
}

/// Probes every target in order and collects one result per target.
///
/// `on_result` fires after each probe so the caller can report live;
/// re-invoking with the same slice against a stable network yields the same
/// sequence.
pub async fn run<F>(
    targets: &[ProbeTarget],
    probe_timeout: Duration,
    mut on_result: F,
) -> Vec<ProbeResult>
where
    F: FnMut(&ProbeResult),
{
    let mut results: Vec<ProbeResult> = Vec::with_capacity(targets.len());

    for target in targets {
        let outcome: Outcome = probe(target, probe_timeout).await;
        let result = ProbeResult::new(target.clone(), outcome);
        on_result(&result);
        results.push(result);
    }

    results
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
