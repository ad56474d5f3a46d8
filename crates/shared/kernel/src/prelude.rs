//! Common imports for feature slices.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use corbas_domain::components::PipelineComponents;
pub use corbas_domain::config::ApiConfig;
pub use corbas_domain::linguistics::{PartOfSpeech, SemanticCode, TokenFeatures};
pub use corbas_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
