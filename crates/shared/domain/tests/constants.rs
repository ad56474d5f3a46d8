use corbas_domain::components::PipelineComponents;
use corbas_domain::constants::{DEFAULT_CORPUS_NAME, LEMMATIZER, PARSER, SEMANTIC_TAGGER, TAGGER};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(DEFAULT_CORPUS_NAME, "unnamed");
    assert_eq!(TAGGER, "tagger");
    assert_eq!(PARSER, "parser");
    assert_eq!(LEMMATIZER, "lemmatizer");
    assert_eq!(SEMANTIC_TAGGER, "semantic_tagger");
}

#[test]
fn component_names_serialize_as_list() {
    let value = serde_json::to_value(PipelineComponents::TAGGER | PipelineComponents::SEMANTIC)
        .expect("serialize");
    assert_eq!(value, serde_json::json!(["tagger", "semantic_tagger"]));
}
