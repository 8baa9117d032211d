use std::fmt;

use crate::error::{Result, StorageError};

/// Characters the store rejects inside a path segment.
const FORBIDDEN: &[char] = &['.', '#', '$', '[', ']', '/'];

/// A slash-separated location in the database tree, e.g. `seasons/2022/events`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbPath {
    segments: Vec<String>,
}

impl DbPath {
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse externally supplied path text. Leading and trailing slashes are
    /// tolerated; empty or forbidden segments are not.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim_matches('/');
        let mut path = Self::root();
        if trimmed.is_empty() {
            return Ok(path);
        }
        for segment in trimmed.split('/') {
            if !is_valid_segment(segment) {
                return Err(StorageError::InvalidPath(segment.to_string()));
            }
            path.segments.push(segment.to_string());
        }
        Ok(path)
    }

    /// Extend the path with one more segment. Callers pass internally
    /// generated segments here; externally supplied text goes through
    /// [`DbPath::parse`].
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let segment = segment.into();
        debug_assert!(is_valid_segment(&segment), "bad path segment {segment:?}");
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.contains(FORBIDDEN)
}

impl fmt::Display for DbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
