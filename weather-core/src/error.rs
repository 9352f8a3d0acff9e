use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single fetch.
///
/// Nothing is recovered inside the crate: each variant reaches the caller as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or no response arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A response arrived with a non-2xx status. Displays as the status text only.
    #[error("{status_text}")]
    Http {
        status: StatusCode,
        status_text: String,
    },

    /// A 2xx body that is not the expected JSON.
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// The endpoint and parameters did not form a URL.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl FetchError {
    pub(crate) fn from_status(status: StatusCode) -> Self {
        let status_text = status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.as_str().to_owned());

        FetchError::Http { status, status_text }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_status_text_only() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn unknown_status_falls_back_to_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = FetchError::from_status(status);
        assert_eq!(err.to_string(), "599");
    }

    #[test]
    fn parse_error_keeps_decoder_message() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let expected = source.to_string();
        let err = FetchError::from(source);
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.status(), None);
    }
}
