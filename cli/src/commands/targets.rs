use edgeprobe_common::config::Config;
use edgeprobe_common::probe::{ProbeTarget, catalog};

use crate::terminal::print;

/// Prints the built-in catalog in probe order, no network I/O.
pub fn targets(_cfg: &Config) {
    let list: Vec<ProbeTarget> = catalog::builtin();

    let key_width: usize = list
        .iter()
        .map(|target| endpoint_key(target).len())
        .max()
        .unwrap_or(0);
    print::GLOBAL_KEY_WIDTH.set(key_width);

    for target in &list {
        print::aligned_line(&endpoint_key(target), target.description.clone());
    }
}

fn endpoint_key(target: &ProbeTarget) -> String {
    format!("{}:{}/{}", target.hostname, target.port, target.protocol)
}
