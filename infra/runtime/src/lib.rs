//! # Runtime
//!
//! Tokio runtime profiles for CorBas binaries.
//!
//! * `high_performance` serves the analysis API: every core, larger stacks.
//! * `memory_efficient` suits tooling and small devices: half the cores.
//! * `default` sits in between.
//!
//! Worker count honours `TOKIO_WORKER_THREADS` before falling back to the
//! detected parallelism.
//!
//! ```rust,ignore
//! #[corbas_runtime::main(high_performance)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use corbas_derive::main;

use anyhow::Context;
use std::num::NonZero;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const FALLBACK_WORKERS: usize = 4;
const MAX_WORKERS: usize = 1024;
const MIB: usize = 1024 * 1024;
const STACK_RANGE: (usize, usize) = (MIB, 16 * MIB);
const DEFAULT_THREAD_NAME: &str = "corbas-worker";

static WORKERS: OnceLock<usize> = OnceLock::new();

fn detected_workers() -> usize {
    *WORKERS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|n| (1..=MAX_WORKERS).contains(n))
            .unwrap_or_else(|| {
                available_parallelism().map_or(FALLBACK_WORKERS, NonZero::get)
            })
    })
}

/// Tokio multi-thread runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: detected_workers(),
            stack_size: 3 * MIB,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: Duration::from_secs(60),
        }
    }
}

impl RuntimeConfig {
    /// Server profile used by `corbas-server`.
    #[must_use]
    pub fn high_performance() -> Self {
        Self {
            stack_size: 4 * MIB,
            thread_name: "corbas-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn memory_efficient() -> Self {
        Self {
            worker_threads: (detected_workers() / 2).max(1),
            stack_size: 2 * MIB,
            thread_name: "corbas-mem".to_owned(),
            thread_keep_alive: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, MAX_WORKERS);
        self
    }

    #[must_use]
    pub fn with_stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = bytes.clamp(STACK_RANGE.0, STACK_RANGE.1);
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.thread_name = if name.trim().is_empty() { DEFAULT_THREAD_NAME.to_owned() } else { name };
        self
    }

    /// Re-applies the bounds enforced by the `with_*` setters, for configs
    /// built with struct literals.
    #[must_use]
    fn normalized(&self) -> Self {
        self.clone()
            .with_worker_threads(self.worker_threads)
            .with_stack_size(self.stack_size)
            .with_thread_name(self.thread_name.clone())
    }
}

/// Builds a multi-thread runtime with I/O and timers enabled.
///
/// # Errors
/// Returns an error when the OS refuses to spawn the worker threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    let config = config.normalized();
    debug!(?config, "Building tokio runtime");

    Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size)
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all()
        .build()
        .context("Failed to initialize tokio runtime")
}
