//! Progress events for the pipeline and the fetch job.
//!
//! Consumers register a handler with the dispatcher instead of the jobs
//! mutating global counters or printing directly.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::KinEventHandler;
pub use types::*;
