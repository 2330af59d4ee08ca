use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;

/// Emits a single 1-byte datagram towards `(hostname, port)`.
///
/// UDP has no handshake, so this certifies only that the local stack could
/// resolve, route and send the packet without an immediate error (on some
/// platforms a prior ICMP "port unreachable" surfaces here too). It never
/// implies a remote listener exists. Callers depend on exactly this weak
/// meaning of "passed"; do not strengthen it.
pub async fn probe(hostname: &str, port: u16, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, send_one_datagram(hostname, port)).await {
        Ok(sent) => sent,
        Err(_elapsed) => false,
    }
}

async fn send_one_datagram(hostname: &str, port: u16) -> bool {
    let Ok(mut addrs) = lookup_host((hostname, port)).await else {
        return false;
    };
    let Some(addr) = addrs.next() else {
        return false;
    };

    // Bind the unspecified address of the matching family so v6 targets
    // get a v6 socket.
    let local: &str = match addr {
        SocketAddr::V4(_) => "0.0.0.0:0",
        SocketAddr::V6(_) => "[::]:0",
    };

    let Ok(socket) = UdpSocket::bind(local).await else {
        return false;
    };
    if socket.connect(addr).await.is_err() {
        return false;
    }

    matches!(socket.send(&[0u8]).await, Ok(sent) if sent > 0)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TIMEOUT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn probe_should_pass_on_local_send() {
        // No listener needed: a send to loopback succeeds locally whether or
        // not anything is bound on the far end.
        assert!(probe("127.0.0.1", 39_999, TEST_TIMEOUT).await);
    }

    #[tokio::test]
    async fn probe_should_pass_with_live_listener() {
        let listener = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(probe("127.0.0.1", port, TEST_TIMEOUT).await);
    }

    #[tokio::test]
    async fn probe_should_fail_on_resolution_failure() {
        assert!(!probe("host.invalid.edgeprobe.test", 53, TEST_TIMEOUT).await);
    }
}
