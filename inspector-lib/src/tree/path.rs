//! Structural paths.
//!
//! A path is a `.`-joined list of segments starting at the root sentinel `$`.
//! Expand-path patterns may also contain the wildcard segment `*`, which
//! matches every child at that depth; resolved paths never do.
//!
//! Segments are not escaped, so a key containing `.` cannot be addressed
//! unambiguously.

use serde::Deserialize;

/// Path of the root node.
pub const ROOT_PATH: &str = "$";

/// Segment matching every child.
pub const WILDCARD: &str = "*";

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Paths that expand every node down to `level` nodes deep.
///
/// `wildcard_paths_from_level(3)` is `["$", "$.*", "$.*.*"]`. Levels of zero or
/// less produce nothing.
pub fn wildcard_paths_from_level(level: i32) -> Vec<String> {
    let level = usize::try_from(level).unwrap_or(0);
    (0..level)
        .map(|depth| {
            std::iter::once(ROOT_PATH)
                .chain(std::iter::repeat_n(WILDCARD, depth))
                .collect::<Vec<_>>()
                .join(".")
        })
        .collect()
}

/// Path of the child `name` under `parent`.
pub fn child_path(parent: &str, name: &str) -> String {
    format!("{parent}{SEPARATOR}{name}")
}

/// Split a path pattern into its segments.
pub fn segments(pattern: &str) -> Vec<&str> {
    pattern.split(SEPARATOR).collect()
}

/// Whether `segment` may stand for the root in a pattern.
pub fn matches_root(segment: &str) -> bool {
    segment == ROOT_PATH || segment == WILDCARD
}

/// Paths that should be expanded on top of the level-based ones.
///
/// Accepts either a single path or a list of paths. When deserialized, list
/// entries that are not strings are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandPaths(Vec<String>);

impl ExpandPaths {
    /// No explicit paths.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.0.push(path.into());
    }
}

impl From<&str> for ExpandPaths {
    fn from(path: &str) -> Self {
        Self(vec![path.to_string()])
    }
}

impl From<String> for ExpandPaths {
    fn from(path: String) -> Self {
        Self(vec![path])
    }
}

impl From<Vec<String>> for ExpandPaths {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl From<Vec<&str>> for ExpandPaths {
    fn from(paths: Vec<&str>) -> Self {
        Self(paths.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExpandPaths {
    fn from(paths: [&str; N]) -> Self {
        Self(paths.into_iter().map(String::from).collect())
    }
}

impl<T: Into<ExpandPaths>> From<Option<T>> for ExpandPaths {
    fn from(paths: Option<T>) -> Self {
        paths.map(Into::into).unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for ExpandPaths {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<serde_json::Value>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(path) => Self(vec![path]),
            Raw::Many(items) => Self(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        serde_json::Value::String(path) => Some(path),
                        _ => None,
                    })
                    .collect(),
            ),
        })
    }
}
