use std::borrow::Cow;

/// Errors raised while loading a semantic lexicon.
#[corbas_derive::corbas_error]
pub enum LexiconError {
    #[error("Lexicon I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Header without one of the required columns.
    #[error("Lexicon header is missing column{}: {message}", format_context(.context))]
    MissingColumn { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Malformed lexicon row{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
