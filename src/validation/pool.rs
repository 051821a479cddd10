use futures::{StreamExt, stream};
use log::debug;
use std::sync::Arc;

use crate::core::constants::error_messages;
use crate::core::types::FetchResult;
use crate::validation::fetcher::FetchUrl;

/// Fixed-size pool of workers draining a queue of URLs.
///
/// At most `workers` fetches are in flight at any time. Each fetch runs as
/// its own tokio task, so work is spread over the runtime's threads, and the
/// next pending URL is claimed as soon as a slot frees up. Results are
/// yielded in completion order.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// A pool with at least one worker
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Probe every URL and return one result per input element.
    ///
    /// `on_result` is called for each result the moment it is collected, in
    /// completion order; the returned vector has the same order.
    pub async fn run<F, C>(&self, fetcher: Arc<F>, urls: Vec<String>, mut on_result: C) -> Vec<FetchResult>
    where
        F: FetchUrl + ?Sized + 'static,
        C: FnMut(&FetchResult),
    {
        let total = urls.len();
        debug!("Starting {} worker(s) for {total} URL(s)", self.workers);

        let mut completed = stream::iter(urls)
            .map(|url| {
                let fetcher = Arc::clone(&fetcher);
                let task_url = url.clone();
                let handle = tokio::spawn(async move { fetcher.fetch(&task_url).await });

                async move {
                    match handle.await {
                        Ok(result) => result,
                        Err(err) => FetchResult::network_error(
                            url,
                            format!("{}: {err}", error_messages::WORKER_FAILED),
                        ),
                    }
                }
            })
            .buffer_unordered(self.workers);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = completed.next().await {
            on_result(&result);
            results.push(result);
        }

        results
    }
}
