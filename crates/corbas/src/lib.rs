//! Facade crate for CorBas features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `corbas` with the `server` feature.
//! - Call [`init`] once at startup and register the returned slices in the API state.

pub use corbas_domain as domain;
use corbas_domain::components::PipelineComponents;
use corbas_domain::config::ApiConfig;
use corbas_domain::registry::InitializedSlice;
pub use corbas_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use corbas_analysis::server::analysis_router;
        pub use corbas_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use corbas_analysis as analysis;
    pub use corbas_semantic as semantic;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "analysis",
        "semantic",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialized feature slices and what they provide.
#[derive(Debug)]
pub struct Bootstrap {
    pub slices: Vec<InitializedSlice>,
    /// Pipeline components available across all slices.
    pub components: PipelineComponents,
    /// Whether the linguistic pipeline answered its health check.
    pub pipeline_reachable: bool,
}

/// Initialize all enabled features.
///
/// An unreachable pipeline is reported, not fatal: the service starts and
/// `/analyze` fails until the pipeline comes up.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub async fn init(config: &ApiConfig) -> Result<Bootstrap, features::analysis::AnalysisError> {
    let analysis = features::analysis::init(config)?;
    let components = analysis.components();
    let pipeline_reachable = analysis.probe().await;

    Ok(Bootstrap {
        slices: vec![InitializedSlice::new(analysis)],
        components,
        pipeline_reachable,
    })
}
