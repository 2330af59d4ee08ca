pub mod net;
pub mod prober;
