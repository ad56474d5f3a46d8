//! # Analysis
//!
//! Feature slice behind `POST /analyze`: sends text through the linguistic
//! pipeline, then tags every token with a USAS semantic code.
//!
//! The pipeline is reached through the [`LinguisticPipeline`] trait;
//! [`RemotePipeline`] is the HTTP implementation wired by [`init`].
//! Both the pipeline and the [`SemanticTagger`] are built once and shared
//! read-only through the API state.

mod error;
pub mod model;
pub mod pipeline;
pub mod remote;
#[cfg(feature = "server")]
pub mod server;
pub mod service;

pub use crate::error::{AnalysisError, AnalysisErrorExt};
pub use crate::pipeline::{LinguisticPipeline, PipelineToken};
pub use crate::remote::RemotePipeline;
pub use corbas_semantic::SemanticTagger;

use corbas_domain::config::ApiConfig;
use std::sync::Arc;
use tracing::info;

/// Analysis feature state.
#[corbas_derive::corbas_slice]
pub struct Analysis {
    pub pipeline: Arc<dyn LinguisticPipeline>,
    pub tagger: SemanticTagger,
}

/// Builds the remote pipeline client and the semantic tagger.
///
/// A lexicon that fails to load is not an error: the slice starts with the
/// fallback classifier instead.
///
/// # Errors
/// Returns [`AnalysisError::Transport`] when the pipeline client cannot be built.
pub fn init(config: &ApiConfig) -> Result<Analysis, AnalysisError> {
    let pipeline = RemotePipeline::new(&config.pipeline)?;
    let tagger = SemanticTagger::from_config(&config.semantic);

    info!(
        endpoint = pipeline.endpoint(),
        primary_tagger = tagger.has_primary(),
        "Analysis slice initialized"
    );

    Ok(Analysis::new(AnalysisInner { pipeline: Arc::new(pipeline), tagger }))
}
