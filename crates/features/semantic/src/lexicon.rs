//! # USAS Single-Word Lexicon
//!
//! Tab-separated lexicon backing the primary tagger. The header names the
//! columns, in any order; `lemma`, `pos` and `semantic_tags` are required and
//! extra columns are ignored:
//!
//! ```text
//! lemma	semantic_tags	pos
//! # comments and blank lines are skipped
//! bank	I1.1 M7	noun
//! ```
//!
//! `semantic_tags` holds whitespace-separated codes, best candidate first.

use crate::error::{LexiconError, LexiconErrorExt};
use corbas_domain::linguistics::{SemanticCode, usas_core};
use fxhash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const LEMMA: &str = "lemma";
const POS: &str = "pos";
const SEMANTIC_TAGS: &str = "semantic_tags";

/// Ranked candidate codes keyed by lower-cased lemma, then USAS core tag.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, FxHashMap<String, Vec<SemanticCode>>>,
    len: usize,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    lemma: usize,
    pos: usize,
    tags: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, LexiconError> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let find = |wanted: &'static str| {
            names.iter().position(|name| name.eq_ignore_ascii_case(wanted)).ok_or_else(|| {
                LexiconError::MissingColumn { message: wanted.into(), context: None }
            })
        };

        Ok(Self { lemma: find(LEMMA)?, pos: find(POS)?, tags: find(SEMANTIC_TAGS)? })
    }

    fn width(self) -> usize {
        self.lemma.max(self.pos).max(self.tags) + 1
    }
}

impl Lexicon {
    /// Loads a lexicon file.
    ///
    /// # Errors
    /// See [`Lexicon::from_tsv_reader`]; I/O errors carry the path as context.
    pub fn from_tsv_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).context(format!("Opening {}", path.display()))?;
        Self::from_tsv_reader(BufReader::new(file))
    }

    /// Parses a lexicon from any buffered reader.
    ///
    /// # Errors
    /// * [`LexiconError::Io`] when reading fails.
    /// * [`LexiconError::MissingColumn`] when the header lacks a required
    ///   column or the input has no header at all.
    /// * [`LexiconError::Malformed`] for rows with too few columns or an empty
    ///   lemma, POS or tag list; the context names the line.
    pub fn from_tsv_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut lines = reader.lines().enumerate().filter(|(_, line)| {
            line.as_ref().map_or(true, |line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
        });

        let columns = match lines.next() {
            Some((_, header)) => Columns::from_header(&header.context("Reading header")?)?,
            None => {
                return Err(LexiconError::MissingColumn {
                    message: "empty lexicon, expected a header row".into(),
                    context: None,
                });
            }
        };

        let mut lexicon = Self::default();
        let mut duplicates = 0_usize;

        for (index, line) in lines {
            let line_no = index + 1;
            let line = line.context(format!("Reading line {line_no}"))?;
            let (lemma, pos, codes) =
                parse_row(&line, columns).context(format!("line {line_no}"))?;

            let by_pos = lexicon.entries.entry(lemma).or_default();
            if by_pos.contains_key(&pos) {
                duplicates += 1;
            } else {
                by_pos.insert(pos, codes);
                lexicon.len += 1;
            }
        }

        debug!(entries = lexicon.len(), duplicates, "Parsed semantic lexicon");
        Ok(lexicon)
    }

    /// Candidate codes for a lemma, trying each USAS core tag of the UPOS tag
    /// `upos` in turn.
    ///
    /// Returns `None` when no entry exists or the tag has no USAS mapping.
    #[must_use]
    pub fn candidates(&self, lemma: &str, upos: &str) -> Option<&[SemanticCode]> {
        let by_pos = self.entries.get(lemma.to_lowercase().as_str())?;
        usas_core(upos).iter().find_map(|core| by_pos.get(*core).map(Vec::as_slice))
    }

    /// Number of distinct (lemma, USAS POS) entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn parse_row(
    line: &str,
    columns: Columns,
) -> Result<(String, String, Vec<SemanticCode>), LexiconError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() < columns.width() {
        return Err(LexiconError::Malformed {
            message: format!("expected {} columns, found {}", columns.width(), fields.len())
                .into(),
            context: None,
        });
    }

    let lemma = fields[columns.lemma];
    let pos = fields[columns.pos];
    if lemma.is_empty() || pos.is_empty() {
        return Err(LexiconError::Malformed {
            message: "empty lemma or pos".into(),
            context: None,
        });
    }

    let codes: Vec<SemanticCode> = fields[columns.tags]
        .split_whitespace()
        .map(|code| SemanticCode::new(code.to_owned()))
        .collect();
    if codes.is_empty() {
        return Err(LexiconError::Malformed {
            message: format!("no semantic tags for '{lemma}'").into(),
            context: None,
        });
    }

    Ok((lemma.to_lowercase(), pos.to_lowercase(), codes))
}
