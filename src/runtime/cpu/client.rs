//! CPU client and parallelism configuration

use crate::error::{Error, Result};
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// Default minimum number of elements a worker processes before work is split.
const DEFAULT_MIN_LEN: usize = 1024;

/// Parallelism settings for CPU kernels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Worker threads for a dedicated pool; `None` uses the global rayon pool
    pub num_threads: Option<usize>,
    /// Minimum number of elements handed to one worker
    pub min_len: usize,
    /// Whether kernels may run in parallel at all
    pub enabled: bool,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_len: DEFAULT_MIN_LEN,
            enabled: true,
        }
    }
}

impl ParallelismConfig {
    /// Run kernels on the calling thread only
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Use a dedicated pool with `num_threads` workers
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Set the minimum number of elements per worker
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }
}

/// CPU client for operation dispatch
#[derive(Clone, Debug)]
pub struct CpuClient {
    config: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a client with default parallelism (global rayon pool)
    pub fn new() -> Self {
        Self {
            config: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a client from an explicit configuration
    ///
    /// Builds a dedicated thread pool when `num_threads` is set; failure to
    /// spawn it is reported as a backend error.
    pub fn with_config(config: ParallelismConfig) -> Result<Self> {
        if config.min_len == 0 {
            return Err(Error::invalid_argument("min_len", "must be at least 1"));
        }

        #[cfg(feature = "rayon")]
        let pool = match config.num_threads {
            Some(num_threads) if config.enabled => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .thread_name(|i| format!("scatter-cpu-{i}"))
                    .build()
                    .map_err(|e| Error::Backend(format!("failed to build thread pool: {e}")))?;
                log::debug!("cpu client: dedicated pool with {num_threads} threads");
                Some(Arc::new(pool))
            }
            _ => None,
        };

        #[cfg(not(feature = "rayon"))]
        {
            if config.num_threads.is_some() {
                log::warn!("cpu client: num_threads ignored, built without the 'rayon' feature");
            }
        }

        Ok(Self {
            config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// Parallelism configuration of this client
    pub fn config(&self) -> &ParallelismConfig {
        &self.config
    }

    /// Whether kernels launched through this client may run in parallel
    #[inline]
    pub fn parallel_enabled(&self) -> bool {
        cfg!(feature = "rayon") && self.config.enabled
    }

    /// Minimum number of elements per rayon work item
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.config.min_len
    }

    /// Run `op` inside this client's thread pool (or the global one)
    #[cfg(feature = "rayon")]
    pub fn install_parallelism<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}
