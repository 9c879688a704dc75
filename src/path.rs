//! Paths into nested values
//!
//! A [`Path`] is an ordered list of [`Key`]s. Paths are built from literals
//! (`path!["b", "c", 0]`), from key lists, or parsed from text:
//! - `a.b.c` (dot notation)
//! - `$.a.b.c` (optional `$` root prefix)
//! - `a[0].b`, `a[0][1]` (bracketed indexes)
//! - `a.0.b` (a numeric dotted segment is an index)
//!
//! Paths never change once built; [`Path::join`] and [`path_flow`] produce new
//! paths.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathError;

/// One step of a path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Sequence position: [0]
    Index(usize),
    /// Mapping field: .field
    Field(String),
}

impl Key {
    /// The sequence position this key addresses, if any.
    ///
    /// Field names only count when they are the canonical spelling of an
    /// integer (`"2"`, not `"02"` or `"+2"`).
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(idx) => Some(*idx),
            Key::Field(name) => {
                let idx = name.parse::<usize>().ok()?;
                (idx.to_string() == *name).then_some(idx)
            }
        }
    }

    /// The mapping field this key addresses; indexes become their decimal text.
    pub fn as_field(&self) -> Cow<'_, str> {
        match self {
            Key::Index(idx) => Cow::Owned(idx.to_string()),
            Key::Field(name) => Cow::Borrowed(name),
        }
    }
}

impl From<usize> for Key {
    fn from(idx: usize) -> Self {
        Key::Index(idx)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(idx) => write!(f, "[{idx}]"),
            Key::Field(name) => f.write_str(name),
        }
    }
}

/// An immutable sequence of keys locating a value inside nested containers
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PathRepr", into = "Vec<Key>")]
pub struct Path(Vec<Key>);

/// Accepted config shapes: `"b.c[0]"` or `["b", "c", 0]`
#[derive(Deserialize)]
#[serde(untagged)]
enum PathRepr {
    Text(String),
    Keys(Vec<Key>),
}

impl TryFrom<PathRepr> for Path {
    type Error = PathError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        match repr {
            PathRepr::Text(text) => Path::parse(&text),
            PathRepr::Keys(keys) => Ok(Path(keys)),
        }
    }
}

impl From<Path> for Vec<Key> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl Path {
    /// The empty path, addressing the root itself
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        Path(keys.into_iter().map(Into::into).collect())
    }

    /// Parse a textual path into keys
    ///
    /// Examples:
    /// - "$.price.currency" → [Field("price"), Field("currency")]
    /// - "items[0].name" → [Field("items"), Index(0), Field("name")]
    pub fn parse(text: &str) -> Result<Self, PathError> {
        // Remove $. prefix if present
        let (body, mut offset) = if let Some(rest) = text.strip_prefix("$.") {
            (rest, 2)
        } else if text == "$" {
            return Ok(Self::root());
        } else {
            (text, 0)
        };

        if body.is_empty() {
            return Ok(Self::root());
        }

        let mut keys = Vec::new();

        for part in body.split('.') {
            parse_part(part, offset, text, &mut keys)?;
            offset += part.len() + 1;
        }

        Ok(Path(keys))
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path with `key` appended
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.into());
        Path(keys)
    }

    /// A new path made of this path's keys followed by `more`
    pub fn join<I, K>(&self, more: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let mut keys = self.0.clone();
        keys.extend(more.into_iter().map(Into::into));
        Path(keys)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }
}

/// Parse one dot-separated part: `field`, `field[0]`, `[0][1]`, `0`
fn parse_part(part: &str, offset: usize, text: &str, keys: &mut Vec<Key>) -> Result<(), PathError> {
    if part.is_empty() {
        return Err(PathError::EmptySegment {
            path: text.to_string(),
        });
    }

    let (field, mut rest) = match part.find('[') {
        Some(bracket_pos) => part.split_at(bracket_pos),
        None => (part, ""),
    };

    if !field.is_empty() {
        let key = Key::Field(field.to_string());
        // Numeric segment treated as array index (e.g., "items.0")
        keys.push(match key.as_index() {
            Some(idx) if rest.is_empty() => Key::Index(idx),
            _ => key,
        });
    }

    while !rest.is_empty() {
        if !rest.starts_with('[') {
            let position = offset + part.len() - rest.len();
            return Err(PathError::UnexpectedCharacter {
                character: rest.chars().next().unwrap_or_default(),
                position,
                path: text.to_string(),
            });
        }

        let close = rest.find(']').ok_or_else(|| PathError::UnclosedBracket {
            path: text.to_string(),
        })?;

        let index_str = &rest[1..close];
        let idx: usize = index_str.parse().map_err(|_| PathError::InvalidIndex {
            segment: index_str.to_string(),
            path: text.to_string(),
        })?;
        keys.push(Key::Index(idx));

        rest = &rest[close + 1..];
    }

    Ok(())
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 && matches!(key, Key::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Path::new(iter)
    }
}

impl AsRef<[Key]> for Path {
    fn as_ref(&self) -> &[Key] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Path`] from a list of keys: `path!["b", "c", 0]`
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($key:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::Key::from($key)),+])
    };
}

/// Curried path builder
///
/// `path_flow(base)` returns a function extending `base` with more keys. The
/// base path is shared by every call and never modified.
pub fn path_flow(base: impl Into<Path>) -> impl Fn(Path) -> Path {
    let base = base.into();
    move |more: Path| base.join(more.0)
}
