#![doc = include_str!("../README.md")]

pub mod cli;
pub mod coordinator;
pub mod deadline;
pub mod error;
pub mod executor;
pub mod progress;
pub mod worker;

pub use coordinator::LoadTest;

pub mod prelude {
    pub use crate::coordinator::LoadTest;
    pub use crate::error::RunError;
    pub use crate::executor::RequestExecutor;

    pub use webperf_core::{Report, RequestOutcome, RunConfig, RunOptions, RunStats};
}
