/// Batch tokenization across worker threads.
///
/// Each input is tokenized independently with the same read-only
/// lookup, so a batch can be split into contiguous chunks and handed to
/// scoped threads without any synchronization beyond the final join.
use std::thread;

use tracing::debug;

use crate::error::{Result, SegmentError};

/// Parallel processing configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Number of worker threads to use
    pub num_threads: usize,
    /// Smallest batch worth spreading over threads
    pub min_batch_size: usize,
    /// Whether to enable parallel processing
    pub enabled: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get().max(1),
            min_batch_size: 16,
            enabled: true,
        }
    }
}

impl ParallelConfig {
    /// A configuration that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            num_threads: 1,
            min_batch_size: usize::MAX,
            enabled: false,
        }
    }

    fn should_parallelize(&self, batch_len: usize) -> bool {
        self.enabled && self.num_threads > 1 && batch_len >= self.min_batch_size.max(2)
    }
}

/// Applies `work` to every input, preserving input order in the output.
pub(crate) fn run_batch<'input, T, F>(
    config: &ParallelConfig,
    inputs: &[&'input str],
    work: F,
) -> Result<Vec<T>>
where
    F: Fn(&'input str) -> T + Sync,
    T: Send,
{
    if !config.should_parallelize(inputs.len()) {
        return Ok(inputs.iter().map(|input| work(*input)).collect());
    }

    let num_threads = config.num_threads.min(inputs.len());
    let chunk_size = inputs.len().div_ceil(num_threads);
    debug!(
        inputs = inputs.len(),
        threads = num_threads,
        "tokenizing batch in parallel"
    );

    thread::scope(|scope| {
        let work = &work;
        let handles: Vec<_> = inputs
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || chunk.iter().map(|input| work(*input)).collect::<Vec<T>>())
            })
            .collect();

        // Join every worker first: the scope re-raises panics of threads
        // that were never joined.
        let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();

        let mut results = Vec::with_capacity(inputs.len());
        for chunk_results in joined {
            let chunk_results = chunk_results.map_err(|_| {
                SegmentError::worker_error("Thread panicked during batch tokenization")
            })?;
            results.extend(chunk_results);
        }
        Ok(results)
    })
}
