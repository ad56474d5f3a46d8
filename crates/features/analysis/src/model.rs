//! Wire models of the analysis API. Keys are snake_case.

use corbas_derive::api_model;
use corbas_domain::linguistics::SemanticCode;

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
#[derive(Clone, Default)]
pub struct AnalyzeRequest {
    /// Raw text to analyze
    pub text: Option<String>,
    /// Corpus the text belongs to; `unnamed` when omitted
    pub corpus_name: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), corpus_name: None }
    }

    #[must_use]
    pub fn corpus(mut self, name: impl Into<String>) -> Self {
        self.corpus_name = Some(name.into());
        self
    }
}

/// One annotated token.
#[api_model(rename_all = "snake_case")]
#[derive(Clone, PartialEq, Eq)]
pub struct TokenAnnotation {
    pub word: String,
    pub pos: String,
    pub tag: String,
    /// USAS semantic field code
    #[cfg_attr(feature = "server", schema(value_type = String, example = "E1.1+"))]
    pub semantic: SemanticCode,
    pub dep: String,
    pub head: usize,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
}

#[api_model(rename_all = "snake_case")]
pub struct AnalyzeResponse {
    pub tokens: Vec<TokenAnnotation>,
    pub num_tokens: usize,
    pub corpus_name: String,
    /// Whether the lexicon-driven tagger produced the semantic codes
    pub has_primary_tagger: bool,
}

#[api_model(rename_all = "snake_case")]
pub struct ErrorResponse {
    pub error: String,
}
