use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// The four URL shapes a video id can be pulled from.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"youtube\.com/watch\?(?:[^#\s]*&)?v=([A-Za-z0-9_-]{11})",
        r"youtube\.com/embed/([A-Za-z0-9_-]{11})",
        r"youtube\.com/shorts/([A-Za-z0-9_-]{11})",
        r"youtu\.be/([A-Za-z0-9_-]{11})",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("video id pattern must compile"))
    .collect()
});

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a raw identifier, e.g. one received as a query parameter.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Pulls the video id out of a watch/embed/shorts/short-link URL.
    /// Returns `None` for anything else.
    pub fn extract(url: &str) -> Option<Self> {
        VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
            pattern
                .captures(url)
                .and_then(|captures| captures.get(1))
                .map(|id| Self(id.as_str().to_string()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_watch_url() {
        let id = VideoId::extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id, Some(VideoId::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn extracts_from_watch_url_with_leading_params() {
        let id = VideoId::extract("https://www.youtube.com/watch?list=PL123&v=dQw4w9WgXcQ");
        assert_eq!(id, Some(VideoId::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn extracts_from_embed_url() {
        let id = VideoId::extract("https://www.youtube.com/embed/dQw4w9WgXcQ?start=10");
        assert_eq!(id, Some(VideoId::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn extracts_from_shorts_url() {
        let id = VideoId::extract("https://youtube.com/shorts/abc123XYZ_-");
        assert_eq!(id, Some(VideoId::new("abc123XYZ_-")));
    }

    #[test]
    fn extracts_from_short_link() {
        let id = VideoId::extract("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(id, Some(VideoId::new("dQw4w9WgXcQ")));
    }

    #[test]
    fn rejects_unrelated_urls() {
        assert_eq!(VideoId::extract("https://vimeo.com/123456789"), None);
        assert_eq!(VideoId::extract("not a url at all"), None);
        assert_eq!(VideoId::extract("https://youtube.com/watch?v=short"), None);
    }
}
