//! Shared string constants.

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for text analysis endpoints.
pub const ANALYSIS_TAG: &str = "Analysis";

/// Corpus name used when a request does not name one.
pub const DEFAULT_CORPUS_NAME: &str = "unnamed";

pub const TAGGER: &str = "tagger";
pub const PARSER: &str = "parser";
pub const LEMMATIZER: &str = "lemmatizer";
pub const SEMANTIC_TAGGER: &str = "semantic_tagger";

/// Prefix for environment variable overrides (`CORBAS__SERVER__PORT`).
pub const ENV_PREFIX: &str = "CORBAS";
