//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Manifest/Fetch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid snippet manifest: {message}")]
    Manifest { message: String },

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Browser Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Browser API error: {message}")]
    Browser { message: String },

    #[error("Clipboard write failed: {message}")]
    Clipboard { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    // ─────────────────────────────────────────────────────────────
    // Thumbnail Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported thumbnail data (expected an image data URL)")]
    UnsupportedThumbnail,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }

    pub fn fetch(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn browser(message: impl Into<String>) -> Self {
        Self::Browser {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::fetch("snippets/a.rs", "HTTP 404");
        assert_eq!(err.to_string(), "Failed to fetch snippets/a.rs: HTTP 404");

        let err = Error::UnsupportedThumbnail;
        assert!(err.to_string().contains("image data URL"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_with_context_preserves_variant() {
        let result: std::result::Result<(), Error> = Err(Error::storage("quota exceeded"));
        let err = result
            .with_context(|| "saving workspace".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
    }
}
