//! Domain types: snippets, tutorials, thumbnails

use serde::{Deserialize, Serialize};

use crate::embed::convert_to_embed_url;
use crate::error::{Error, Result};

/// Preview image attached to a snippet, held as a `data:image/...` URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Thumbnail(String);

impl Thumbnail {
    /// Wrap a data URL produced by reading an image file.
    ///
    /// Only `data:image/*` URLs are accepted.
    pub fn from_data_url(data_url: impl Into<String>) -> Result<Self> {
        let data_url = data_url.into();
        if data_url.starts_with("data:image/") {
            Ok(Self(data_url))
        } else {
            Err(Error::UnsupportedThumbnail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Thumbnail {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_data_url(value)
    }
}

impl From<Thumbnail> for String {
    fn from(value: Thumbnail) -> Self {
        value.0
    }
}

/// A titled, language-tagged block of source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub title: String,
    /// Highlighter language tag, e.g. `rust`, `js`, `html`
    pub language: String,
    /// Plain source text, never escaped
    pub code: String,
    pub thumbnail: Option<Thumbnail>,
}

impl Snippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
            thumbnail: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: Option<Thumbnail>) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// CSS class the highlighter keys on
    pub fn language_class(&self) -> String {
        language_class(&self.language)
    }
}

/// `language-<tag>` class for a language tag
pub fn language_class(language: &str) -> String {
    format!("language-{}", language)
}

/// A titled reference to an external video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tutorial {
    pub title: String,
    pub duration: Option<String>,
    /// URL as entered by the user
    pub url: String,
    pub description: Option<String>,
}

impl Tutorial {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: None,
            url: url.into(),
            description: None,
        }
    }

    /// Player-ready URL, or `None` if the link is not recognized
    pub fn embed_url(&self) -> Option<String> {
        convert_to_embed_url(&self.url)
    }
}

/// Treat empty or whitespace-only form values as absent
pub fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_accepts_image_data_urls() {
        let thumb = Thumbnail::from_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert!(thumb.as_str().starts_with("data:image/png"));
    }

    #[test]
    fn test_thumbnail_rejects_other_data() {
        assert!(matches!(
            Thumbnail::from_data_url("data:text/html;base64,PHNjcmlwdD4="),
            Err(Error::UnsupportedThumbnail)
        ));
        assert!(Thumbnail::from_data_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn test_thumbnail_deserialize_validates() {
        let ok: std::result::Result<Thumbnail, _> =
            serde_json::from_str("\"data:image/gif;base64,R0lGOD==\"");
        assert!(ok.is_ok());

        let bad: std::result::Result<Thumbnail, _> = serde_json::from_str("\"http://x/y.png\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_language_class() {
        let snippet = Snippet::new("Demo", "rust", "fn main() {}");
        assert_eq!(snippet.language_class(), "language-rust");
    }

    #[test]
    fn test_tutorial_embed_url() {
        let tutorial = Tutorial::new("Intro", "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(
            tutorial.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );

        let tutorial = Tutorial::new("Broken", "https://example.com/clip.mp4");
        assert_eq!(tutorial.embed_url(), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   "), None);
        assert_eq!(non_empty("12:30").as_deref(), Some("12:30"));
    }
}
