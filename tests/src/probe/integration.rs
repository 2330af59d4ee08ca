#![cfg(test)]
use std::time::Duration;

use edgeprobe_common::probe::{Outcome, ProbeResult, ProbeTarget, Protocol, catalog};
use edgeprobe_core::prober;
use tokio::net::TcpListener;

const TEST_TIMEOUT: Duration = Duration::from_secs(2);

/// The diagnostic scenario from the runbooks: one reachable endpoint, one
/// closed port, one unresolvable host. Outcomes must come back in target
/// order, with the bad-host UDP target FAILED rather than aborting the run.
#[tokio::test]
async fn end_to_end_mixed_outcomes_in_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port = listener.local_addr().unwrap().port();
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_port = closed.local_addr().unwrap().port();
    drop(closed);

    let targets = vec![
        ProbeTarget::new("127.0.0.1", open_port, Protocol::Tcp, "local echo"),
        ProbeTarget::new("127.0.0.1", closed_port, Protocol::Tcp, "closed"),
        ProbeTarget::new("256.256.256.256", 53, Protocol::Udp, "bad host"),
    ];

    let results: Vec<ProbeResult> = prober::run(&targets, TEST_TIMEOUT, |_| {}).await;

    let outcomes: Vec<Outcome> = results.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![Outcome::Passed, Outcome::Failed, Outcome::Failed]
    );
    for (result, target) in results.iter().zip(&targets) {
        assert_eq!(&result.target, target);
    }
}

/// A target file flows through parsing and the engine unchanged, including
/// an unknown protocol that must be skipped without failing the load.
#[tokio::test]
async fn target_file_contents_drive_the_run() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port = listener.local_addr().unwrap().port();

    let content = format!(
        "# local diagnostic set\n\
         127.0.0.1 {open_port} tcp local listener\n\
         127.0.0.1 {open_port} sctp unsupported transport\n\
         127.0.0.1 {open_port} udp local datagram\n"
    );

    let targets = catalog::parse_lines(&content).unwrap();
    let results = prober::run(&targets, TEST_TIMEOUT, |_| {}).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].outcome, Outcome::Passed);
    assert_eq!(results[1].outcome, Outcome::SkippedUnknownProtocol);
    assert_eq!(results[2].outcome, Outcome::Passed);
}

/// Every probe closes its socket before returning. 600 sequential probes
/// against loopback would exhaust a leaking descriptor table long before
/// the default rlimit on any supported platform.
#[tokio::test]
async fn repeated_runs_do_not_leak_descriptors() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let closed_port = closed.local_addr().unwrap().port();
    drop(closed);

    let targets = vec![
        ProbeTarget::new("127.0.0.1", closed_port, Protocol::Tcp, "closed"),
        ProbeTarget::new("127.0.0.1", closed_port, Protocol::Udp, "datagram"),
    ];

    for _ in 0..300 {
        let results = prober::run(&targets, TEST_TIMEOUT, |_| {}).await;
        assert_eq!(results[0].outcome, Outcome::Failed);
        assert_eq!(results[1].outcome, Outcome::Passed);
    }
}

/// Two identical runs against a stable loopback environment classify every
/// target the same way.
#[tokio::test]
async fn rerun_yields_identical_outcome_sequence() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port = listener.local_addr().unwrap().port();

    let targets = vec![
        ProbeTarget::new("127.0.0.1", open_port, Protocol::Tcp, "open"),
        ProbeTarget::new("host.invalid.edgeprobe.test", 7844, Protocol::Tcp, "bad host"),
        ProbeTarget::new("127.0.0.1", open_port, Protocol::Other("gre".into()), "skipped"),
    ];

    let outcomes = |results: &[ProbeResult]| -> Vec<Outcome> {
        results.iter().map(|r| r.outcome).collect()
    };

    let first = prober::run(&targets, TEST_TIMEOUT, |_| {}).await;
    let second = prober::run(&targets, TEST_TIMEOUT, |_| {}).await;

    assert_eq!(outcomes(&first), outcomes(&second));
    assert_eq!(
        outcomes(&first),
        vec![
            Outcome::Passed,
            Outcome::Failed,
            Outcome::SkippedUnknownProtocol
        ]
    );
}
