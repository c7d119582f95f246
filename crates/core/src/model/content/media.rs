use std::fmt;

use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("video locator cannot be empty")]
    EmptyVideoUrl,

    #[error("{kind} block requires {field}")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

//
// ─── VIDEO LOCATOR ─────────────────────────────────────────────────────────────
//

/// Opaque locator of an embedded video.
///
/// Watch tracking compares locators as plain strings, so the authored spelling
/// from the course document is preserved.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoUrl(String);

impl VideoUrl {
    /// Take a locator from a course document, trimmed but otherwise as written.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::EmptyVideoUrl` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ContentError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(ContentError::EmptyVideoUrl);
        }
        Ok(Self(s.to_string()))
    }

    /// Wraps a locator as-is. Intended for tests and synthetic content.
    #[must_use]
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the locator is an absolute http(s) URL an embedded frame can load.
    #[must_use]
    pub fn is_web_link(&self) -> bool {
        Url::parse(&self.0).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
    }
}

impl fmt::Debug for VideoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VideoUrl({})", self.0)
    }
}

impl fmt::Display for VideoUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
