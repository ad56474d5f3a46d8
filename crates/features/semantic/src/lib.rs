//! # Semantic Tagging
//!
//! Assigns a USAS semantic field code to every token the linguistic pipeline
//! produces.
//!
//! ## Architecture
//!
//! 1.  **Fallback ([`fallback`]):** a pure, ordered rule table over the token
//!     lemma and part-of-speech. Total: every input yields a code, `Z99` when
//!     nothing matches.
//! 2.  **Lexicon ([`lexicon`]):** the primary tagger's single-word lexicon,
//!     loaded from a TSV file with ranked candidate codes per (lemma, POS).
//! 3.  **Strategy ([`tagger`]):** [`SemanticTagger`] is chosen once at startup
//!     and exposes a single [`SemanticTagger::tag`] entry point. Tokens the
//!     lexicon does not cover go through the fallback.
//!
//! ```rust
//! use corbas_domain::linguistics::{PartOfSpeech, TokenFeatures};
//! use corbas_semantic::SemanticTagger;
//!
//! let tagger = SemanticTagger::Fallback;
//! let code = tagger.tag(&TokenFeatures::new("Wonderful", PartOfSpeech::Adj));
//! assert_eq!(code, "E1.1+");
//! ```

mod error;
pub mod fallback;
pub mod lexicon;
pub mod tagger;

pub use crate::error::{LexiconError, LexiconErrorExt};
pub use crate::lexicon::Lexicon;
pub use crate::tagger::SemanticTagger;
