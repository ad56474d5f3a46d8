//! Boundary to the linguistic pipeline (tokenizer, tagger, parser, lemmatizer).

use crate::error::AnalysisError;
use async_trait::async_trait;
use corbas_domain::components::PipelineComponents;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One token as produced by the linguistic pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineToken {
    pub text: String,
    /// Coarse Universal Dependencies tag (`NOUN`, `VERB`, ...).
    pub pos: String,
    /// Fine-grained, language-specific tag.
    pub tag: String,
    pub dep: String,
    /// Document index of the syntactic head; roots point at themselves.
    pub head: usize,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

/// A process-wide linguistic pipeline, initialized once and shared read-only.
#[async_trait]
pub trait LinguisticPipeline: Debug + Send + Sync {
    /// Tokenizes and annotates `text`, preserving document order.
    async fn parse(&self, text: &str) -> Result<Vec<PipelineToken>, AnalysisError>;

    /// Annotation components this pipeline provides.
    fn components(&self) -> PipelineComponents;

    /// Whether the pipeline is reachable right now.
    async fn probe(&self) -> bool {
        true
    }
}
