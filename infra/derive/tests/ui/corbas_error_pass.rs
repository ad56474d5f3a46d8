use corbas_derive::corbas_error;
use std::borrow::Cow;

#[corbas_error]
pub enum LexiconError {
    #[error("Lexicon I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed lexicon row{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open() -> Result<(), LexiconError> {
    let _ = std::fs::read("missing.tsv").context("Reading lexicon")?;
    Err(LexiconError::from("unreachable")).context("Fallback")
}

fn main() {
    let err = LexiconError::from("boom");
    assert!(matches!(err, LexiconError::Internal { .. }));
    let _ = open();
}
