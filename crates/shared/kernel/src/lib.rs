//! Kernel utilities shared across feature slices.
//!
//! Keep this crate lightweight: configuration loading, the shared API state
//! and the system routes every server mounts.
//!
//! ```rust,no_run
//! use corbas_kernel::config::load_config;
//! use corbas_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use corbas_domain as domain;
