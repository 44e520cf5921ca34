mod config;
mod constants;
mod metrics;
mod outcome;
mod stats;

pub use config::*;
pub use constants::*;
pub use metrics::*;
pub use outcome::*;
pub use stats::*;
