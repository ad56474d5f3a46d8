use async_trait::async_trait;
use corbas_analysis::model::AnalyzeRequest;
use corbas_analysis::{
    Analysis, AnalysisError, AnalysisInner, LinguisticPipeline, PipelineToken, SemanticTagger,
};
use corbas_domain::components::PipelineComponents;
use corbas_domain::config::ApiConfig;
use corbas_semantic::Lexicon;
use std::sync::Arc;

/// Splits on whitespace and uses each word as its own lemma.
#[derive(Debug)]
struct WhitespacePipeline {
    pos: &'static str,
}

#[async_trait]
impl LinguisticPipeline for WhitespacePipeline {
    async fn parse(&self, text: &str) -> Result<Vec<PipelineToken>, AnalysisError> {
        Ok(text
            .split_whitespace()
            .enumerate()
            .map(|(index, word)| PipelineToken {
                text: word.to_owned(),
                pos: self.pos.to_owned(),
                lemma: word.to_lowercase(),
                head: index,
                ..PipelineToken::default()
            })
            .collect())
    }

    fn components(&self) -> PipelineComponents {
        PipelineComponents::LINGUISTIC
    }
}

#[derive(Debug)]
struct BrokenPipeline;

#[async_trait]
impl LinguisticPipeline for BrokenPipeline {
    async fn parse(&self, _text: &str) -> Result<Vec<PipelineToken>, AnalysisError> {
        Err(AnalysisError::from("pipeline crashed"))
    }

    fn components(&self) -> PipelineComponents {
        PipelineComponents::empty()
    }

    async fn probe(&self) -> bool {
        false
    }
}

fn analysis(pipeline: impl LinguisticPipeline + 'static, tagger: SemanticTagger) -> Analysis {
    Analysis::new(AnalysisInner { pipeline: Arc::new(pipeline), tagger })
}

#[tokio::test]
async fn analyze_tags_every_token() {
    let analysis = analysis(WhitespacePipeline { pos: "VERB" }, SemanticTagger::Fallback);

    let response = analysis
        .analyze(AnalyzeRequest::new("Go say think xylophone").corpus("novels"))
        .await
        .expect("analysis should succeed");

    let codes: Vec<&str> = response.tokens.iter().map(|t| t.semantic.as_str()).collect();
    assert_eq!(codes, ["M1", "Q2.2", "X2.1", "A3+"]);
    assert_eq!(response.num_tokens, 4);
    assert_eq!(response.corpus_name, "novels");
    assert!(!response.has_primary_tagger);
}

#[tokio::test]
async fn corpus_name_defaults_to_unnamed() {
    let analysis = analysis(WhitespacePipeline { pos: "NOUN" }, SemanticTagger::Fallback);
    let response = analysis.analyze(AnalyzeRequest::new("")).await.expect("empty text is valid");

    assert_eq!(response.corpus_name, "unnamed");
    assert_eq!(response.num_tokens, 0);
}

#[tokio::test]
async fn missing_text_is_rejected() {
    let analysis = analysis(WhitespacePipeline { pos: "NOUN" }, SemanticTagger::Fallback);
    let err = analysis.analyze(AnalyzeRequest::default()).await.expect_err("text is required");

    assert!(matches!(err, AnalysisError::InvalidRequest { .. }));
    assert_eq!(err.to_string(), "No text provided");
}

#[tokio::test]
async fn pipeline_errors_propagate() {
    let analysis = analysis(BrokenPipeline, SemanticTagger::Fallback);
    let err = analysis.analyze(AnalyzeRequest::new("text")).await.expect_err("pipeline fails");

    assert!(err.to_string().contains("pipeline crashed"));
    assert!(!analysis.probe().await);
}

#[tokio::test]
async fn primary_tagger_adds_semantic_component() {
    let lexicon = Lexicon::from_tsv_reader("lemma\tpos\tsemantic_tags\nbank\tnoun\tI1.1 M7\n".as_bytes())
        .expect("lexicon");
    let analysis =
        analysis(WhitespacePipeline { pos: "NOUN" }, SemanticTagger::Primary(Arc::new(lexicon)));

    assert_eq!(analysis.components(), PipelineComponents::ALL);

    let response = analysis.analyze(AnalyzeRequest::new("Bank sadness")).await.expect("analysis");
    let codes: Vec<&str> = response.tokens.iter().map(|t| t.semantic.as_str()).collect();
    assert_eq!(codes, ["I1.1", "O2"]);
    assert!(response.has_primary_tagger);
}

#[test]
fn fallback_tagger_reports_linguistic_components_only() {
    let analysis = analysis(WhitespacePipeline { pos: "NOUN" }, SemanticTagger::Fallback);
    assert_eq!(analysis.components(), PipelineComponents::LINGUISTIC);
}

#[tokio::test]
async fn init_wires_remote_pipeline_and_fallback() {
    let analysis = corbas_analysis::init(&ApiConfig::default()).expect("init should succeed");

    assert!(!analysis.tagger.has_primary());
    assert_eq!(analysis.components(), PipelineComponents::LINGUISTIC);
}
