//! # Fallback Semantic Classifier
//!
//! Rule-based classification used whenever the primary tagger has nothing to
//! offer for a token. The lexical rules in [`RULES`] are checked in order
//! against the lower-cased lemma and the first match wins; tokens no rule
//! recognises are classified by part-of-speech alone.
//!
//! `wonderful` appears in both the positive emotion and the positive
//! evaluation sets. Emotion comes first, so it is always `E1.1+`.

use corbas_domain::linguistics::{PartOfSpeech, SemanticCode, TokenFeatures};
use std::borrow::Cow;
use strum_macros::{Display, EnumIter};

/// Lexical categories the fallback recognises, in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    EmotionPositive,
    EmotionNegative,
    Movement,
    Speech,
    Thought,
    EvaluationPositive,
    EvaluationNegative,
    Time,
    Place,
}

/// A lemma set and the code it produces.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub lemmas: &'static [&'static str],
    pub code: SemanticCode,
}

impl Rule {
    /// `lemma` must already be lower-case.
    #[must_use]
    pub fn matches(&self, lemma: &str) -> bool {
        self.lemmas.contains(&lemma)
    }
}

pub static RULES: &[Rule] = &[
    Rule {
        category: Category::EmotionPositive,
        lemmas: &["happy", "joy", "delighted", "pleased", "excited", "love", "wonderful"],
        code: SemanticCode::EMOTION_POSITIVE,
    },
    Rule {
        category: Category::EmotionNegative,
        lemmas: &["sad", "angry", "fear", "hate", "anxious", "worried", "upset", "depressed"],
        code: SemanticCode::EMOTION_NEGATIVE,
    },
    Rule {
        category: Category::Movement,
        lemmas: &["go", "come", "move", "walk", "run", "travel", "arrive", "leave", "enter", "exit"],
        code: SemanticCode::MOVEMENT,
    },
    Rule {
        category: Category::Speech,
        lemmas: &[
            "say",
            "tell",
            "speak",
            "talk",
            "communicate",
            "discuss",
            "mention",
            "ask",
            "answer",
        ],
        code: SemanticCode::SPEECH,
    },
    Rule {
        category: Category::Thought,
        lemmas: &[
            "think",
            "believe",
            "know",
            "understand",
            "consider",
            "realize",
            "remember",
            "forget",
        ],
        code: SemanticCode::THOUGHT,
    },
    Rule {
        category: Category::EvaluationPositive,
        lemmas: &[
            "good",
            "great",
            "excellent",
            "wonderful",
            "amazing",
            "beautiful",
            "perfect",
            "nice",
            "fine",
        ],
        code: SemanticCode::EVALUATION_POSITIVE,
    },
    Rule {
        category: Category::EvaluationNegative,
        lemmas: &["bad", "poor", "terrible", "awful", "horrible", "ugly", "wrong", "worse", "worst"],
        code: SemanticCode::EVALUATION_NEGATIVE,
    },
    Rule {
        category: Category::Time,
        lemmas: &["today", "tomorrow", "yesterday", "now", "then", "soon", "later", "before", "after"],
        code: SemanticCode::TIME,
    },
    Rule {
        category: Category::Place,
        lemmas: &["here", "there", "where", "place", "location", "home", "school", "office"],
        code: SemanticCode::PLACE,
    },
];

/// Classifies a token by lemma, then by part-of-speech. Never fails.
///
/// ```rust
/// use corbas_domain::linguistics::PartOfSpeech;
/// use corbas_semantic::fallback::classify;
///
/// assert_eq!(classify("Think", PartOfSpeech::Verb), "X2.1");
/// assert_eq!(classify("xylophone", PartOfSpeech::Noun), "O2");
/// assert_eq!(classify("", PartOfSpeech::Other), "Z99");
/// ```
#[must_use]
pub fn classify(lemma: &str, pos: PartOfSpeech) -> SemanticCode {
    let lemma = lowercase(lemma);

    RULES
        .iter()
        .find(|rule| rule.matches(&lemma))
        .map_or_else(|| by_part_of_speech(pos), |rule| rule.code.clone())
}

#[must_use]
pub fn classify_features(features: &TokenFeatures<'_>) -> SemanticCode {
    classify(features.lemma, features.pos)
}

/// The lexical category a lemma falls into, if any.
#[must_use]
pub fn category(lemma: &str) -> Option<Category> {
    let lemma = lowercase(lemma);
    RULES.iter().find(|rule| rule.matches(&lemma)).map(|rule| rule.category)
}

const fn by_part_of_speech(pos: PartOfSpeech) -> SemanticCode {
    match pos {
        PartOfSpeech::Noun => SemanticCode::OBJECT,
        PartOfSpeech::Propn => SemanticCode::PERSONAL_NAME,
        PartOfSpeech::Verb => SemanticCode::ACTIVITY,
        PartOfSpeech::Adj => SemanticCode::EVALUATION,
        PartOfSpeech::Adv => SemanticCode::DEGREE,
        PartOfSpeech::Num => SemanticCode::NUMBER,
        PartOfSpeech::Adp | PartOfSpeech::Det => SemanticCode::GRAMMATICAL,
        PartOfSpeech::Pron => SemanticCode::PRONOUN,
        PartOfSpeech::Other => SemanticCode::UNMATCHED,
    }
}

fn lowercase(lemma: &str) -> Cow<'_, str> {
    if lemma.chars().any(char::is_uppercase) {
        Cow::Owned(lemma.to_lowercase())
    } else {
        Cow::Borrowed(lemma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn rules_follow_category_order() {
        let order: Vec<_> = RULES.iter().map(|rule| rule.category).collect();
        let expected: Vec<_> = Category::iter().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn lemma_sets_are_lowercase() {
        for rule in RULES {
            for lemma in rule.lemmas {
                assert_eq!(*lemma, lemma.to_lowercase(), "{}", rule.category);
            }
        }
    }

    #[test]
    fn wonderful_is_an_emotion() {
        assert_eq!(category("wonderful"), Some(Category::EmotionPositive));
        assert_eq!(category("WONDERFUL"), Some(Category::EmotionPositive));
    }

    #[test]
    fn lowercase_borrows_when_possible() {
        assert!(matches!(lowercase("already lower"), Cow::Borrowed(_)));
        assert!(matches!(lowercase("Mixed"), Cow::Owned(_)));
    }

    #[test]
    fn every_part_of_speech_has_a_code() {
        for pos in PartOfSpeech::iter() {
            assert!(!by_part_of_speech(pos).is_empty());
        }
    }
}
