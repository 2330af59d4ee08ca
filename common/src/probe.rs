pub mod catalog;
pub mod outcome;
pub mod target;

pub use outcome::{Outcome, ProbeResult};
pub use target::{Protocol, ProbeTarget, TargetParseError};
