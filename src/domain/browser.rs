use regex::bytes::Regex;
use serde::Serialize;

use crate::domain::error::DomainError;

// ASCII-only word characters and case folding; bytes >= 0x80 are non-word.
const FIREFOX_PATTERN: &str = r"(?i-u)\bfirefox\b";

/// Word-boundary browser test over a raw `User-Agent` value.
///
/// Matches on header bytes so obs-text values are still inspected.
/// Compiled once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct BrowserMatcher {
    pattern: Regex,
}

impl BrowserMatcher {
    pub fn firefox() -> Result<Self, DomainError> {
        Ok(Self {
            pattern: Regex::new(FIREFOX_PATTERN)?,
        })
    }

    #[must_use]
    pub fn matches(&self, user_agent: impl AsRef<[u8]>) -> bool {
        self.pattern.is_match(user_agent.as_ref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub is_firefox: bool,
}

impl PageData {
    /// A missing header reads as empty and never matches.
    #[must_use]
    pub fn from_user_agent(matcher: &BrowserMatcher, user_agent: Option<&[u8]>) -> Self {
        Self {
            is_firefox: matcher.matches(user_agent.unwrap_or_default()),
        }
    }
}
