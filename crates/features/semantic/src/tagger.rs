use crate::fallback;
use crate::lexicon::Lexicon;
use corbas_domain::config::SemanticConfig;
use corbas_domain::linguistics::{SemanticCode, TokenFeatures};
use std::sync::Arc;
use tracing::{info, warn};

/// Semantic tagging strategy, chosen once at startup.
#[derive(Debug, Clone, Default)]
pub enum SemanticTagger {
    /// Lexicon lookup, with the fallback for tokens the lexicon does not cover.
    Primary(Arc<Lexicon>),
    /// Rule-based classification only.
    #[default]
    Fallback,
}

impl SemanticTagger {
    /// Loads the configured lexicon.
    ///
    /// A missing or unreadable lexicon degrades to [`SemanticTagger::Fallback`];
    /// it never prevents the service from starting.
    #[must_use]
    pub fn from_config(config: &SemanticConfig) -> Self {
        let Some(path) = &config.lexicon else {
            info!("No semantic lexicon configured, using the fallback classifier");
            return Self::Fallback;
        };

        match Lexicon::from_tsv_path(path) {
            Ok(lexicon) => {
                info!(path = %path.display(), entries = lexicon.len(), "Semantic lexicon loaded");
                Self::Primary(Arc::new(lexicon))
            }
            Err(e) => {
                warn!(path = %path.display(), "Could not load semantic lexicon: {e}");
                warn!("Continuing with the fallback classifier");
                Self::Fallback
            }
        }
    }

    /// Semantic code for one token.
    #[must_use]
    pub fn tag(&self, features: &TokenFeatures<'_>) -> SemanticCode {
        match self {
            Self::Primary(lexicon) => {
                Self::select(lexicon.candidates(features.lemma, features.upos), features)
            }
            Self::Fallback => fallback::classify_features(features),
        }
    }

    #[must_use]
    pub const fn has_primary(&self) -> bool {
        matches!(self, Self::Primary(_))
    }

    /// The first ranked candidate, or the fallback when there is none.
    ///
    /// ```rust
    /// use corbas_domain::linguistics::{PartOfSpeech, SemanticCode, TokenFeatures};
    /// use corbas_semantic::SemanticTagger;
    ///
    /// let sad = TokenFeatures::new("sad", PartOfSpeech::Adj);
    /// let empty: [SemanticCode; 0] = [];
    /// assert_eq!(SemanticTagger::select(Some(&empty[..]), &sad), "E1.1-");
    ///
    /// let ranked = [SemanticCode::from_static("A1.2"), SemanticCode::from_static("B3")];
    /// assert_eq!(SemanticTagger::select(Some(&ranked[..]), &sad), "A1.2");
    /// ```
    #[must_use]
    pub fn select(candidates: Option<&[SemanticCode]>, features: &TokenFeatures<'_>) -> SemanticCode {
        candidates
            .and_then(<[SemanticCode]>::first)
            .filter(|code| !code.is_empty())
            .cloned()
            .unwrap_or_else(|| fallback::classify_features(features))
    }
}
