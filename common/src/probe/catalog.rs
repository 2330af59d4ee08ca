//! The compiled-in target catalog and the target-file loader.
//!
//! The defaults mirror the endpoints a WARP/cloudflared deployment needs to
//! reach: the tunnel edge regions on 7844 over both transports, the
//! update/API endpoints over HTTPS, and the public resolvers over UDP 53.

use anyhow::{Context, bail};

use crate::probe::target::{ProbeTarget, Protocol};

/// Default target list, probed in this order.
pub fn builtin() -> Vec<ProbeTarget> {
    vec![
        ProbeTarget::new(
            "region1.v2.argotunnel.com",
            7844,
            Protocol::Tcp,
            "Cloudflare Tunnel edge (region 1)",
        ),
        ProbeTarget::new(
            "region1.v2.argotunnel.com",
            7844,
            Protocol::Udp,
            "Cloudflare Tunnel edge, QUIC transport (region 1)",
        ),
        ProbeTarget::new(
            "region2.v2.argotunnel.com",
            7844,
            Protocol::Tcp,
            "Cloudflare Tunnel edge (region 2)",
        ),
        ProbeTarget::new(
            "region2.v2.argotunnel.com",
            7844,
            Protocol::Udp,
            "Cloudflare Tunnel edge, QUIC transport (region 2)",
        ),
        ProbeTarget::new("api.cloudflare.com", 443, Protocol::Tcp, "Cloudflare API"),
        ProbeTarget::new(
            "update.argotunnel.com",
            443,
            Protocol::Tcp,
            "cloudflared update service",
        ),
        ProbeTarget::new("1.1.1.1", 53, Protocol::Udp, "Cloudflare DNS resolver"),
        ProbeTarget::new(
            "1.0.0.1",
            53,
            Protocol::Udp,
            "Cloudflare DNS resolver (secondary)",
        ),
    ]
}

/// Parses the contents of a target file. Blank lines and `#` comments are
/// skipped; any malformed line aborts the load with its line number.
pub fn parse_lines(content: &str) -> anyhow::Result<Vec<ProbeTarget>> {
    let mut targets: Vec<ProbeTarget> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let target: ProbeTarget = line
            .parse()
            .with_context(|| format!("target file line {}", idx + 1))?;
        targets.push(target);
    }

    if targets.is_empty() {
        bail!("target file contains no targets");
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_ordered_and_valid() {
        let targets = builtin();
        assert!(!targets.is_empty());

        // Tunnel edge first, resolvers last, matching the runbook order.
        assert_eq!(targets.first().unwrap().port, 7844);
        assert_eq!(targets.last().unwrap().hostname, "1.0.0.1");
        assert!(targets.iter().all(|t| t.port > 0));
        assert!(
            targets
                .iter()
                .all(|t| !matches!(t.protocol, Protocol::Other(_)))
        );
    }

    #[test]
    fn test_parse_lines_skips_comments_and_blanks() {
        let content = "\
# the edge
region1.v2.argotunnel.com 7844 tcp edge

1.1.1.1 53 udp resolver
";
        let targets = parse_lines(content).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].hostname, "region1.v2.argotunnel.com");
        assert_eq!(targets[1].port, 53);
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let content = "1.1.1.1 53 udp ok\nexample.com zero tcp broken\n";
        let err = parse_lines(content).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err:#}");
    }

    #[test]
    fn test_parse_lines_rejects_empty_file() {
        assert!(parse_lines("# nothing here\n\n").is_err());
    }
}
