//! Error types with fix suggestions
//!
//! Reading and writing through a [`Path`](crate::Path) never fails: absence is
//! absorbed into nil. The only fallible surface is turning text into a path.

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Errors raised while parsing a textual path such as `b.c[0].d`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    // ─────────────────────────────────────────────────────────────
    // Path syntax errors (PF-010 to PF-013)
    // ─────────────────────────────────────────────────────────────
    #[error("PF-010: Empty segment in path '{path}'")]
    EmptySegment { path: String },

    #[error("PF-011: Unclosed '[' in path '{path}'")]
    UnclosedBracket { path: String },

    #[error("PF-012: Invalid index '{segment}' in path '{path}'")]
    InvalidIndex { segment: String, path: String },

    #[error("PF-013: Unexpected '{character}' at position {position} in path '{path}'")]
    UnexpectedCharacter {
        character: char,
        position: usize,
        path: String,
    },
}

impl PathError {
    /// The offending path text.
    pub fn path(&self) -> &str {
        match self {
            PathError::EmptySegment { path }
            | PathError::UnclosedBracket { path }
            | PathError::InvalidIndex { path, .. }
            | PathError::UnexpectedCharacter { path, .. } => path,
        }
    }
}

impl FixSuggestion for PathError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PathError::EmptySegment { .. } => Some("Remove doubled or trailing dots: use a.b.c"),
            PathError::UnclosedBracket { .. } => Some("Close the index bracket: a[0].b"),
            PathError::InvalidIndex { .. } => {
                Some("Indexes must be non-negative integers; use a dotted segment for field names")
            }
            PathError::UnexpectedCharacter { .. } => {
                Some("Follow an index with '.', '[' or end of path: a[0].b or a[0][1]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_in_messages() {
        let err = PathError::EmptySegment { path: "a..b".into() };
        assert_eq!(err.to_string(), "PF-010: Empty segment in path 'a..b'");

        let err = PathError::InvalidIndex {
            segment: "x".into(),
            path: "a[x]".into(),
        };
        assert!(err.to_string().starts_with("PF-012"));
    }

    #[test]
    fn every_variant_has_a_suggestion() {
        let errors = [
            PathError::EmptySegment { path: "a.".into() },
            PathError::UnclosedBracket { path: "a[0".into() },
            PathError::InvalidIndex {
                segment: "-1".into(),
                path: "a[-1]".into(),
            },
            PathError::UnexpectedCharacter {
                character: 'x',
                position: 4,
                path: "a[0]x".into(),
            },
        ];
        for err in &errors {
            assert!(err.fix_suggestion().is_some(), "{err:?}");
            assert!(!err.path().is_empty());
        }
    }
}
