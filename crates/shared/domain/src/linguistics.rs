//! Token features produced by the linguistic pipeline and the semantic codes
//! assigned to them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Coarse Universal Dependencies part-of-speech.
///
/// Tags outside the known set (including `AUX`, `PUNCT`, `X`, ...) map to
/// [`PartOfSpeech::Other`]. Tags are matched exactly, so `noun` is `Other`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(from = "String", into = "&'static str")]
pub enum PartOfSpeech {
    Noun,
    Propn,
    Verb,
    Adj,
    Adv,
    Num,
    Adp,
    Det,
    Pron,
    Other,
}

impl PartOfSpeech {
    /// Parses a UPOS tag, mapping anything unknown to [`PartOfSpeech::Other`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Other)
    }

    /// The upper-case UPOS name (`OTHER` for [`PartOfSpeech::Other`]).
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        self.into()
    }
}

/// USAS core tags a lexicon may file a UPOS tag under, in lookup order.
///
/// Covers every Universal Dependencies tag, not only the ones
/// [`PartOfSpeech`] distinguishes. Unknown tags have none.
#[must_use]
pub fn usas_core(upos: &str) -> &'static [&'static str] {
    match upos {
        "NOUN" => &["noun"],
        "PROPN" => &["pnoun"],
        "VERB" | "AUX" => &["verb"],
        "ADJ" => &["adj"],
        "ADV" => &["adv"],
        "NUM" => &["num"],
        "ADP" => &["prep"],
        "DET" => &["det", "art"],
        "PRON" => &["pron"],
        "CCONJ" | "SCONJ" => &["conj"],
        "PART" => &["part"],
        "INTJ" => &["intj"],
        "SYM" | "X" => &["fo"],
        "PUNCT" | "SPACE" => &["punc"],
        _ => &[],
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

/// A USAS semantic field code such as `E1.1+` or `Z99`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticCode(Cow<'static, str>);

impl SemanticCode {
    pub const EMOTION_POSITIVE: Self = Self::from_static("E1.1+");
    pub const EMOTION_NEGATIVE: Self = Self::from_static("E1.1-");
    pub const MOVEMENT: Self = Self::from_static("M1");
    pub const SPEECH: Self = Self::from_static("Q2.2");
    pub const THOUGHT: Self = Self::from_static("X2.1");
    pub const EVALUATION_POSITIVE: Self = Self::from_static("A5.1+");
    pub const EVALUATION_NEGATIVE: Self = Self::from_static("A5.1-");
    pub const TIME: Self = Self::from_static("T1");
    pub const PLACE: Self = Self::from_static("M7");
    pub const OBJECT: Self = Self::from_static("O2");
    pub const PERSONAL_NAME: Self = Self::from_static("Z3");
    pub const ACTIVITY: Self = Self::from_static("A3+");
    pub const EVALUATION: Self = Self::from_static("A5");
    pub const DEGREE: Self = Self::from_static("A13");
    pub const NUMBER: Self = Self::from_static("N1");
    pub const GRAMMATICAL: Self = Self::from_static("Z5");
    pub const PRONOUN: Self = Self::from_static("Z8");
    pub const UNMATCHED: Self = Self::from_static("Z99");

    #[must_use]
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SemanticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SemanticCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SemanticCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SemanticCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<SemanticCode> for String {
    fn from(code: SemanticCode) -> Self {
        code.0.into_owned()
    }
}

/// What the semantic taggers look at for one token.
///
/// The fallback only sees the coarse [`PartOfSpeech`]; lexicon lookup uses
/// the raw UPOS tag so that `AUX`, `CCONJ` and friends still find entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenFeatures<'a> {
    pub lemma: &'a str,
    pub pos: PartOfSpeech,
    pub upos: &'a str,
}

impl<'a> TokenFeatures<'a> {
    #[must_use]
    pub fn new(lemma: &'a str, pos: PartOfSpeech) -> Self {
        Self { lemma, pos, upos: pos.as_tag() }
    }

    /// Features for a token as the pipeline reports it.
    #[must_use]
    pub fn from_upos(lemma: &'a str, upos: &'a str) -> Self {
        Self { lemma, pos: PartOfSpeech::from_tag(upos), upos }
    }
}
