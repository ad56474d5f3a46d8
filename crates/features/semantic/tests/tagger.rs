use corbas_domain::config::SemanticConfig;
use corbas_domain::linguistics::{PartOfSpeech, SemanticCode, TokenFeatures};
use corbas_semantic::{Lexicon, LexiconError, SemanticTagger};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

const LEXICON: &str = "lemma\tpos\tsemantic_tags\n\
                       bank\tnoun\tI1.1 M7\n\
                       happy\tadj\tE4.1+\n";

fn lexicon_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().expect("temp file");
    file.write_all(LEXICON.as_bytes()).expect("write lexicon");
    file
}

#[test]
fn ranked_candidates_pick_the_first() {
    let features = TokenFeatures::new("bank", PartOfSpeech::Noun);
    let ranked = [SemanticCode::from_static("A1.2"), SemanticCode::from_static("B3")];
    assert_eq!(SemanticTagger::select(Some(&ranked[..]), &features), "A1.2");
}

#[test]
fn empty_or_missing_candidates_use_the_fallback() {
    let features = TokenFeatures::new("sad", PartOfSpeech::Adj);
    let empty: [SemanticCode; 0] = [];
    assert_eq!(SemanticTagger::select(Some(&empty[..]), &features), "E1.1-");
    assert_eq!(SemanticTagger::select(None, &features), "E1.1-");
}

#[test]
fn no_lexicon_configured_means_fallback() {
    let tagger = SemanticTagger::from_config(&SemanticConfig::default());
    assert!(!tagger.has_primary());
    assert_eq!(tagger.tag(&TokenFeatures::new("walk", PartOfSpeech::Verb)), "M1");
}

#[test]
fn unreadable_lexicon_degrades_to_fallback() {
    let config = SemanticConfig { lexicon: Some(PathBuf::from("/no/such/lexicon.tsv")) };
    let tagger = SemanticTagger::from_config(&config);
    assert!(matches!(tagger, SemanticTagger::Fallback));
}

#[test]
fn primary_tagger_prefers_lexicon_entries() {
    let file = lexicon_file();
    let config = SemanticConfig { lexicon: Some(file.path().to_path_buf()) };
    let tagger = SemanticTagger::from_config(&config);

    assert!(tagger.has_primary());
    assert_eq!(tagger.tag(&TokenFeatures::new("Bank", PartOfSpeech::Noun)), "I1.1");
    assert_eq!(tagger.tag(&TokenFeatures::new("happy", PartOfSpeech::Adj)), "E4.1+");
    // Not in the lexicon: rule table decides.
    assert_eq!(tagger.tag(&TokenFeatures::new("sad", PartOfSpeech::Adj)), "E1.1-");
    assert_eq!(tagger.tag(&TokenFeatures::new("bank", PartOfSpeech::Verb)), "A3+");
}

#[test]
fn lexicon_path_errors_carry_context() {
    let err = Lexicon::from_tsv_path("/no/such/lexicon.tsv").expect_err("file is missing");
    let LexiconError::Io { context, .. } = &err else {
        panic!("expected Io, got {err:?}");
    };
    assert!(context.as_deref().is_some_and(|c| c.contains("/no/such/lexicon.tsv")));
}

#[test]
fn tagger_clones_share_the_lexicon() {
    let lexicon = Lexicon::from_tsv_reader(LEXICON.as_bytes()).expect("lexicon");
    let tagger = SemanticTagger::Primary(Arc::new(lexicon));
    let clone = tagger.clone();

    let (SemanticTagger::Primary(a), SemanticTagger::Primary(b)) = (&tagger, &clone) else {
        panic!("both taggers should be primary");
    };
    assert!(Arc::ptr_eq(a, b));
}

#[test]
fn raw_upos_tags_reach_the_lexicon() {
    let lexicon = Lexicon::from_tsv_reader(
        "lemma\tpos\tsemantic_tags\nbe\tverb\tA3+ Z5\nand\tconj\tZ5\n".as_bytes(),
    )
    .expect("lexicon");
    let tagger = SemanticTagger::Primary(Arc::new(lexicon));

    assert_eq!(tagger.tag(&TokenFeatures::from_upos("be", "AUX")), "A3+");
    assert_eq!(tagger.tag(&TokenFeatures::from_upos("and", "CCONJ")), "Z5");
    // `Other` to the fallback, so a miss still ends at Z99.
    assert_eq!(tagger.tag(&TokenFeatures::from_upos("but", "CCONJ")), "Z99");
}
