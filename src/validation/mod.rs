//! URL probing
//!
//! This module performs the HTTP requests and schedules them over a
//! bounded pool of concurrent workers.

pub mod fetcher;
pub mod pool;

// Re-export commonly used items
pub use fetcher::{FetchUrl, HttpFetcher, describe_error};
pub use pool::WorkerPool;
