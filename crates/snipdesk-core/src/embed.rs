//! Conversion of shared video links into player-ready embed URLs.

use std::sync::LazyLock;

use regex::Regex;

/// YouTube `watch?v=` and `youtu.be/` links, capturing the 11-character id.
static YOUTUBE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("YouTube regex is valid")
});

/// Vimeo numeric video links, capturing the id.
static VIMEO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?vimeo\.com/(\d+)").expect("Vimeo regex is valid")
});

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIMEO_EMBED_BASE: &str = "https://player.vimeo.com/video/";

/// Convert a shared video link to an embed URL.
///
/// Rules are tried in order and the first match wins:
/// 1. YouTube watch/short links
/// 2. Vimeo numeric links
/// 3. URLs already containing `embed` or `player` (returned unchanged)
///
/// Anything else yields `None`.
pub fn convert_to_embed_url(url: &str) -> Option<String> {
    if let Some(caps) = YOUTUBE_PATTERN.captures(url) {
        return Some(format!("{}{}", YOUTUBE_EMBED_BASE, &caps[1]));
    }

    if let Some(caps) = VIMEO_PATTERN.captures(url) {
        return Some(format!("{}{}", VIMEO_EMBED_BASE, &caps[1]));
    }

    if url.contains("embed") || url.contains("player") {
        return Some(url.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_short_link() {
        assert_eq!(
            convert_to_embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_youtube_watch_link_variants() {
        for input in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
        ] {
            assert_eq!(
                convert_to_embed_url(input).as_deref(),
                Some("https://www.youtube.com/embed/dQw4w9WgXcQ"),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_youtube_id_with_dash_and_underscore() {
        assert_eq!(
            convert_to_embed_url("https://youtu.be/a-b_c-d_e-f").as_deref(),
            Some("https://www.youtube.com/embed/a-b_c-d_e-f")
        );
    }

    #[test]
    fn test_youtube_id_too_short_is_rejected() {
        assert_eq!(convert_to_embed_url("https://youtu.be/short"), None);
    }

    #[test]
    fn test_vimeo_numeric_link() {
        assert_eq!(
            convert_to_embed_url("https://vimeo.com/76979871").as_deref(),
            Some("https://player.vimeo.com/video/76979871")
        );

        assert_eq!(
            convert_to_embed_url("www.vimeo.com/123").as_deref(),
            Some("https://player.vimeo.com/video/123")
        );
    }

    #[test]
    fn test_embed_urls_are_returned_unchanged() {
        for input in [
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://player.vimeo.com/video/76979871",
            "https://example.com/embed/clip",
        ] {
            assert_eq!(convert_to_embed_url(input).as_deref(), Some(input));
        }
    }

    #[test]
    fn test_conversion_is_idempotent_on_its_own_output() {
        for input in ["https://youtu.be/dQw4w9WgXcQ", "https://vimeo.com/42"] {
            let once = convert_to_embed_url(input).unwrap();
            let twice = convert_to_embed_url(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_unrecognized_urls_yield_none() {
        for input in [
            "",
            "not a url",
            "https://example.com/video.mp4",
            "https://vimeo.com/channels/staffpicks",
        ] {
            assert_eq!(convert_to_embed_url(input), None, "input: {input}");
        }
    }
}
