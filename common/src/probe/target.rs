//! # Probe Target Model
//!
//! Defines what the prober runs against.
//!
//! A target is a `(hostname, port, protocol, description)` tuple. Targets
//! come either from the compiled-in catalog or from a target file with one
//! target per line:
//!
//! ```text
//! # comment
//! region1.v2.argotunnel.com 7844 tcp Cloudflare Tunnel edge (region 1)
//! 1.1.1.1 53 udp Cloudflare DNS resolver
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Transport protocol of a probe.
///
/// Values other than TCP/UDP are kept verbatim so the engine can report
/// them instead of failing the whole run at parse time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
    Other(String),
}

impl FromStr for Protocol {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tcp" => Ok(Protocol::Tcp),
            "udp" => Ok(Protocol::Udp),
            _ => Ok(Protocol::Other(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "TCP"),
            Protocol::Udp => write!(f, "UDP"),
            Protocol::Other(name) => write!(f, "{}", name.to_ascii_uppercase()),
        }
    }
}

/// A single endpoint to probe. Immutable for the duration of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeTarget {
    /// DNS name or literal IPv4/IPv6 address. Resolution is left to the
    /// platform resolver at probe time.
    pub hostname: String,
    /// 1-65535. Zero is rejected at parse time.
    pub port: u16,
    pub protocol: Protocol,
    /// Free-text label carried through to the report.
    pub description: String,
}

impl ProbeTarget {
    pub fn new(hostname: &str, port: u16, protocol: Protocol, description: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            port,
            protocol,
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("empty target line")]
    Empty,
    #[error("missing {0} in target line")]
    MissingField(&'static str),
    #[error("invalid port '{0}': must be 1-65535")]
    InvalidPort(String),
}

impl FromStr for ProbeTarget {
    type Err = TargetParseError;

    /// Parses one target line: `<hostname> <port> <protocol> <description...>`.
    ///
    /// Fields are whitespace-separated; everything after the protocol is the
    /// description. The description may be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();

        let hostname = fields.next().ok_or(TargetParseError::Empty)?;
        let port_str = fields
            .next()
            .ok_or(TargetParseError::MissingField("port"))?;
        let proto_str = fields
            .next()
            .ok_or(TargetParseError::MissingField("protocol"))?;

        let port = parse_port(port_str)?;
        let protocol: Protocol = proto_str.parse()?;
        let description = fields.collect::<Vec<&str>>().join(" ");

        Ok(Self {
            hostname: hostname.to_string(),
            port,
            protocol,
            description,
        })
    }
}

/// Parses and validates a port field. `u16` alone would admit 0, which no
/// probe can use.
fn parse_port(s: &str) -> Result<u16, TargetParseError> {
    match s.parse::<u16>() {
        Ok(0) | Err(_) => Err(TargetParseError::InvalidPort(s.to_string())),
        Ok(port) => Ok(port),
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
