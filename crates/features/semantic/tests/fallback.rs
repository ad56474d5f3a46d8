use corbas_domain::linguistics::{PartOfSpeech, SemanticCode, TokenFeatures};
use corbas_semantic::fallback::{Category, RULES, category, classify, classify_features};

#[test]
fn wonderful_resolves_to_positive_emotion() {
    assert_eq!(classify("wonderful", PartOfSpeech::Adj), "E1.1+");
    assert_eq!(classify("wonderful", PartOfSpeech::Noun), SemanticCode::EMOTION_POSITIVE);
}

#[test]
fn lemma_case_is_ignored() {
    assert_eq!(classify("HAPPY", PartOfSpeech::Adj), classify("happy", PartOfSpeech::Adj));
    assert_eq!(classify("HaPpY", PartOfSpeech::Adj), "E1.1+");
}

#[test]
fn unknown_lemmas_fall_back_to_part_of_speech() {
    assert_eq!(classify("xylophone", PartOfSpeech::Noun), "O2");
    assert_eq!(classify("xylophone", PartOfSpeech::Propn), "Z3");
    assert_eq!(classify("xylophone", PartOfSpeech::Verb), "A3+");
    assert_eq!(classify("xylophone", PartOfSpeech::Adj), "A5");
    assert_eq!(classify("xylophone", PartOfSpeech::Adv), "A13");
    assert_eq!(classify("xylophone", PartOfSpeech::Num), "N1");
    assert_eq!(classify("xylophone", PartOfSpeech::Adp), "Z5");
    assert_eq!(classify("xylophone", PartOfSpeech::Det), "Z5");
    assert_eq!(classify("xylophone", PartOfSpeech::Pron), "Z8");
    assert_eq!(classify("xylophone", PartOfSpeech::Other), "Z99");
}

#[test]
fn unknown_tag_strings_are_unmatched() {
    assert_eq!(classify("xylophone", PartOfSpeech::from_tag("unknown-tag")), "Z99");
    assert_eq!(classify("xylophone", PartOfSpeech::from_tag("AUX")), "Z99");
}

#[test]
fn verbs_of_movement_speech_and_thought() {
    assert_eq!(classify("go", PartOfSpeech::Verb), "M1");
    assert_eq!(classify("say", PartOfSpeech::Verb), "Q2.2");
    assert_eq!(classify("think", PartOfSpeech::Verb), "X2.1");
}

#[test]
fn lexical_rules_override_part_of_speech() {
    assert_eq!(classify("sad", PartOfSpeech::Noun), "E1.1-");
    assert_eq!(classify("great", PartOfSpeech::Adj), "A5.1+");
    assert_eq!(classify("worst", PartOfSpeech::Adj), "A5.1-");
    assert_eq!(classify("tomorrow", PartOfSpeech::Noun), "T1");
    assert_eq!(classify("office", PartOfSpeech::Noun), "M7");
    assert_eq!(classify("there", PartOfSpeech::Pron), "M7");
}

#[test]
fn empty_lemma_uses_part_of_speech() {
    assert_eq!(classify("", PartOfSpeech::Verb), "A3+");
    assert_eq!(classify("", PartOfSpeech::Other), "Z99");
}

#[test]
fn every_listed_lemma_has_its_code() {
    let table = [
        ("E1.1+", "happy joy delighted pleased excited love wonderful"),
        ("E1.1-", "sad angry fear hate anxious worried upset depressed"),
        ("M1", "go come move walk run travel arrive leave enter exit"),
        ("Q2.2", "say tell speak talk communicate discuss mention ask answer"),
        ("X2.1", "think believe know understand consider realize remember forget"),
        ("A5.1+", "good great excellent amazing beautiful perfect nice fine"),
        ("A5.1-", "bad poor terrible awful horrible ugly wrong worse worst"),
        ("T1", "today tomorrow yesterday now then soon later before after"),
        ("M7", "here there where place location home school office"),
    ];

    for (code, lemmas) in table {
        for lemma in lemmas.split_whitespace() {
            assert_eq!(classify(lemma, PartOfSpeech::Other), code, "{lemma}");
        }
    }
    assert_eq!(classify("wonderful", PartOfSpeech::Other), "E1.1+");
    assert_eq!(category("wonderful"), Some(Category::EmotionPositive));
}

#[test]
fn rule_sets_hold_nothing_else() {
    let listed: usize = RULES.iter().map(|rule| rule.lemmas.len()).sum();
    // 76 distinct lemmas; `wonderful` is listed twice.
    assert_eq!(listed, 77);
    assert_eq!(classify("realise", PartOfSpeech::Other), "Z99");
}

#[test]
fn lower_case_tags_are_not_parts_of_speech() {
    assert_eq!(classify("xylophone", PartOfSpeech::from_tag("noun")), "Z99");
    assert_eq!(classify("xylophone", PartOfSpeech::from_tag("NOUN")), "O2");
}

#[test]
fn features_helper_matches_classify() {
    let features = TokenFeatures::new("Remember", PartOfSpeech::Verb);
    assert_eq!(classify_features(&features), classify("remember", PartOfSpeech::Verb));
}
