/// Configuration for the tokenizer public API.
///
/// This module provides the configuration struct and its builder.
use crate::parallel::ParallelConfig;

/// Default input limit for [`crate::Tokenizer::try_tokenize`], in code units.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 100 * 1024 * 1024;

/// Main configuration struct for the tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Maximum input size accepted by `try_tokenize`, in code units
    pub max_input_size: Option<usize>,
    /// Batch tokenization settings
    pub parallel: ParallelConfig,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_input_size: Some(DEFAULT_MAX_INPUT_SIZE),
            parallel: ParallelConfig::default(),
        }
    }
}

impl TokenizerConfig {
    /// Creates a builder for configuring the tokenizer.
    pub fn builder() -> TokenizerConfigBuilder {
        TokenizerConfigBuilder::new()
    }
}

/// Builder for TokenizerConfig to provide a fluent configuration API.
#[derive(Debug, Default)]
pub struct TokenizerConfigBuilder {
    config: TokenizerConfig,
}

impl TokenizerConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum input size, in code units.
    pub fn max_input_size(mut self, limit: usize) -> Self {
        self.config.max_input_size = Some(limit);
        self
    }

    /// Removes the input size limit.
    pub fn unlimited_input(mut self) -> Self {
        self.config.max_input_size = None;
        self
    }

    /// Sets the parallel processing configuration.
    pub fn parallel(mut self, config: ParallelConfig) -> Self {
        self.config.parallel = config;
        self
    }

    /// Sets the number of batch worker threads.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.config.parallel.num_threads = num_threads.max(1);
        self
    }

    /// Sets the smallest batch that is spread over threads.
    pub fn min_batch_size(mut self, size: usize) -> Self {
        self.config.parallel.min_batch_size = size;
        self
    }

    /// Enables or disables parallel batch tokenization.
    pub fn parallel_enabled(mut self, enabled: bool) -> Self {
        self.config.parallel.enabled = enabled;
        self
    }

    /// Builds the final configuration.
    pub fn build(self) -> TokenizerConfig {
        self.config
    }
}
