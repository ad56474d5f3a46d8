use std::borrow::Cow;

/// Errors of the analysis feature.
#[corbas_derive::corbas_error]
pub enum AnalysisError {
    /// The request carried no text to analyze.
    #[error("{message}")]
    InvalidRequest { message: Cow<'static, str> },

    /// The pipeline could not be reached or its reply could not be decoded.
    #[error("Pipeline request failed{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The pipeline answered with a non-success status.
    #[error("Pipeline returned status {status}{}: {body}", format_context(.context))]
    Upstream { status: u16, body: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal analysis error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl AnalysisError {
    pub(crate) const NO_TEXT: &'static str = "No text provided";

    #[must_use]
    pub const fn no_text() -> Self {
        Self::InvalidRequest { message: Cow::Borrowed(Self::NO_TEXT) }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::AnalysisError;
    use crate::model::ErrorResponse;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};

    impl AnalysisError {
        #[must_use]
        pub const fn status(&self) -> StatusCode {
            match self {
                Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
                Self::Transport { .. } | Self::Upstream { .. } | Self::Internal { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }
    }

    impl IntoResponse for AnalysisError {
        fn into_response(self) -> Response {
            let status = self.status();
            (status, Json(ErrorResponse { error: self.to_string() })).into_response()
        }
    }
}
