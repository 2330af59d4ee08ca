use std::time::Duration;

/// Runtime options threaded from the CLI into the probe engine.
pub struct Config {
    /// Suppress decorative output. Counted: 1 drops banners and headers,
    /// 2 additionally drops per-target report lines.
    pub quiet: u8,
    /// Skip the startup banner even at quiet level 0.
    pub no_banner: bool,
    /// Exit nonzero when any target fails. The legacy behavior (and the
    /// default) is to always exit zero regardless of probe outcomes.
    pub strict: bool,
    /// Per-target bound covering the whole probe, TCP connect and UDP
    /// resolve/send alike.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            strict: false,
            timeout: Duration::from_secs(5),
        }
    }
}
