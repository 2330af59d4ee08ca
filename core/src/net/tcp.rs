use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

/// Attempts a full TCP handshake with `(hostname, port)`.
///
/// Returns `true` only if the connection is established before the timeout.
/// Refusal, unreachable routes, resolution failures and the timeout itself
/// all return `false`; the stream (when one is made) is dropped immediately,
/// closing the socket.
pub async fn probe(hostname: &str, port: u16, probe_timeout: Duration) -> bool {
    match timeout(probe_timeout, TcpStream::connect((hostname, port))).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(_)) | Err(_) => false,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
