use thiserror::Error;

/// Result type for blob operations
pub type BlobResult<T> = Result<T, BlobError>;

/// Errors that can occur while writing blobs.
///
/// `Display` is the raw backend message; callers add their own context.
#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    #[error("{source}")]
    Backend {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BlobError {
    /// Create a backend error from any error type
    pub fn backend<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend {
            source: Box::new(error),
        }
    }

    /// Create a backend error from a rendered message
    pub fn backend_message<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            source: message.into().into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display_is_the_raw_message() {
        let err = BlobError::backend_message("NoSuchBucket: the bucket does not exist");
        assert_eq!(err.to_string(), "NoSuchBucket: the bucket does not exist");

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        assert_eq!(BlobError::backend(io).to_string(), "connection refused");
    }

    #[test]
    fn invalid_is_prefixed() {
        assert_eq!(
            BlobError::invalid("empty key").to_string(),
            "Invalid request: empty key"
        );
    }
}
