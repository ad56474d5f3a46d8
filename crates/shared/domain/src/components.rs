use crate::constants::{LEMMATIZER, PARSER, SEMANTIC_TAGGER, TAGGER};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Annotation components available to the analysis pipeline.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PipelineComponents: u8 {
        /// Part-of-speech tagging.
        const TAGGER = 1 << 0;
        /// Dependency parsing.
        const PARSER = 1 << 1;
        const LEMMATIZER = 1 << 2;
        /// Lexicon-driven primary semantic tagger.
        const SEMANTIC = 1 << 3;

        const LINGUISTIC = Self::TAGGER.bits() | Self::PARSER.bits() | Self::LEMMATIZER.bits();
        const ALL = Self::LINGUISTIC.bits() | Self::SEMANTIC.bits();
    }
}

const NAMED: [(PipelineComponents, &str); 4] = [
    (PipelineComponents::TAGGER, TAGGER),
    (PipelineComponents::PARSER, PARSER),
    (PipelineComponents::LEMMATIZER, LEMMATIZER),
    (PipelineComponents::SEMANTIC, SEMANTIC_TAGGER),
];

impl PipelineComponents {
    /// Component names in pipeline order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMED.into_iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, name)| name)
    }
}

impl Default for PipelineComponents {
    fn default() -> Self {
        Self::LINGUISTIC
    }
}

impl From<&str> for PipelineComponents {
    fn from(name: &str) -> Self {
        match name {
            "all" | "*" => Self::ALL,
            _ => NAMED
                .iter()
                .find(|(_, known)| known.eq_ignore_ascii_case(name))
                .map_or_else(Self::empty, |(flag, _)| *flag),
        }
    }
}

impl Serialize for PipelineComponents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.names())
    }
}

impl<'de> Deserialize<'de> for PipelineComponents {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().map(|name| Self::from(name.as_str())).collect())
    }
}
