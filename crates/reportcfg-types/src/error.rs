use std::fmt;

/// Result type for reportcfg-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading report documents
#[derive(Debug)]
pub enum Error {
    /// JSON payload could not be decoded
    Json(serde_json::Error),

    /// A dimension value the catalogs do not know about
    UnknownVariant {
        dimension: &'static str,
        value: String,
    },
}

impl Error {
    pub(crate) fn unknown(dimension: &'static str, value: impl Into<String>) -> Self {
        Error::UnknownVariant {
            dimension,
            value: value.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::UnknownVariant { dimension, value } => {
                write!(f, "Unknown {} value: {}", dimension, value)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::UnknownVariant { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let err = Error::unknown("visualization", "radar");
        assert_eq!(err.to_string(), "Unknown visualization value: radar");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_json_error_has_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);

        assert!(err.to_string().starts_with("JSON error:"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
