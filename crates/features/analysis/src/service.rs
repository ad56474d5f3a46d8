use crate::Analysis;
use crate::error::AnalysisError;
use crate::model::{AnalyzeRequest, AnalyzeResponse, TokenAnnotation};
use crate::pipeline::PipelineToken;
use corbas_domain::components::PipelineComponents;
use corbas_domain::constants::DEFAULT_CORPUS_NAME;
use corbas_domain::linguistics::TokenFeatures;
use corbas_semantic::SemanticTagger;
use tracing::{error, info};

/// Attaches a semantic code to every pipeline token, keeping document order.
#[must_use]
pub fn annotate(tokens: Vec<PipelineToken>, tagger: &SemanticTagger) -> Vec<TokenAnnotation> {
    tokens
        .into_iter()
        .map(|token| {
            let features = TokenFeatures::from_upos(&token.lemma, &token.pos);
            let semantic = tagger.tag(&features);
            TokenAnnotation {
                word: token.text,
                pos: token.pos,
                tag: token.tag,
                semantic,
                dep: token.dep,
                head: token.head,
                lemma: token.lemma,
                is_stop: token.is_stop,
                is_punct: token.is_punct,
            }
        })
        .collect()
}

impl Analysis {
    /// Pipeline components, plus [`PipelineComponents::SEMANTIC`] when the
    /// primary tagger is loaded.
    #[must_use]
    pub fn components(&self) -> PipelineComponents {
        let mut components = self.pipeline.components();
        components.set(PipelineComponents::SEMANTIC, self.tagger.has_primary());
        components
    }

    /// Whether the linguistic pipeline answers its health check.
    pub async fn probe(&self) -> bool {
        self.pipeline.probe().await
    }

    /// Runs the pipeline over the request text and tags every token.
    ///
    /// # Errors
    /// * [`AnalysisError::InvalidRequest`] when the request has no text.
    /// * Any pipeline error, unchanged.
    pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse, AnalysisError> {
        let Some(text) = request.text else {
            return Err(AnalysisError::no_text());
        };
        let corpus_name = request.corpus_name.unwrap_or_else(|| DEFAULT_CORPUS_NAME.to_owned());

        info!(corpus = %corpus_name, chars = text.chars().count(), "Analyzing text");

        let tokens = self.pipeline.parse(&text).await.inspect_err(|e| {
            error!(corpus = %corpus_name, "Error analyzing text: {e}");
        })?;
        let tokens = annotate(tokens, &self.tagger);

        info!(corpus = %corpus_name, tokens = tokens.len(), "Analyzed text");

        Ok(AnalyzeResponse {
            num_tokens: tokens.len(),
            tokens,
            corpus_name,
            has_primary_tagger: self.tagger.has_primary(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corbas_domain::linguistics::SemanticCode;
    use corbas_semantic::Lexicon;
    use std::sync::Arc;

    fn token(text: &str, pos: &str, lemma: &str, head: usize) -> PipelineToken {
        PipelineToken {
            text: text.to_owned(),
            pos: pos.to_owned(),
            lemma: lemma.to_owned(),
            head,
            ..PipelineToken::default()
        }
    }

    #[test]
    fn annotate_keeps_order_and_fields() {
        let tokens = vec![
            token("They", "PRON", "they", 1),
            token("went", "VERB", "go", 1),
            token("home", "ADV", "home", 1),
            token(".", "PUNCT", ".", 1),
        ];

        let annotated = annotate(tokens, &SemanticTagger::Fallback);
        let codes: Vec<&str> = annotated.iter().map(|t| t.semantic.as_str()).collect();
        assert_eq!(codes, ["Z8", "M1", "M7", "Z99"]);
        assert_eq!(annotated[1].word, "went");
        assert_eq!(annotated[1].lemma, "go");
        assert!(annotated.iter().all(|t| t.head == 1));
    }

    #[test]
    fn lemma_drives_classification_not_surface_form() {
        let annotated = annotate(vec![token("Happier", "ADJ", "happy", 0)], &SemanticTagger::Fallback);
        assert_eq!(annotated[0].semantic, SemanticCode::EMOTION_POSITIVE);
    }

    #[test]
    fn lower_case_pos_is_not_a_known_tag() {
        let tokens = vec![token("xylophone", "noun", "xylophone", 0)];
        let annotated = annotate(tokens, &SemanticTagger::Fallback);
        assert_eq!(annotated[0].semantic, SemanticCode::UNMATCHED);
        assert_eq!(annotated[0].pos, "noun");
    }

    #[test]
    fn lexicon_covers_tags_the_fallback_does_not_know() {
        let lexicon = Lexicon::from_tsv_reader(
            "lemma\tpos\tsemantic_tags\nbe\tverb\tA3+ Z5\nand\tconj\tZ5\n".as_bytes(),
        )
        .expect("lexicon should parse");
        let tagger = SemanticTagger::Primary(Arc::new(lexicon));

        let tokens = vec![
            token("is", "AUX", "be", 1),
            token("and", "CCONJ", "and", 1),
            token("is", "VERB", "be", 1),
            token("ok", "INTJ", "ok", 1),
        ];
        let codes: Vec<String> =
            annotate(tokens, &tagger).into_iter().map(|t| t.semantic.into()).collect();
        assert_eq!(codes, ["A3+", "Z5", "A3+", "Z99"]);
    }

    #[test]
    fn empty_document_yields_no_annotations() {
        assert!(annotate(Vec::new(), &SemanticTagger::Fallback).is_empty());
    }
}
