//! Path-addressed expansion state.

use std::collections::BTreeMap;

/// Which structural paths are expanded.
///
/// A missing entry means "use the item's default", which is collapsed unless
/// the adapter hints otherwise. An explicit `false` records that the user
/// collapsed a node that would otherwise default to expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    paths: BTreeMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicit entry for `path`, if any.
    pub fn get(&self, path: &str) -> Option<bool> {
        self.paths.get(path).copied()
    }

    pub fn set(&mut self, path: impl Into<String>, expanded: bool) {
        self.paths.insert(path.into(), expanded);
    }

    /// Mark `path` as expanded.
    pub fn expand(&mut self, path: impl Into<String>) {
        self.set(path, true);
    }

    /// Effective expansion of `path`: the explicit entry, then `hint`, then
    /// collapsed.
    pub fn is_expanded(&self, path: &str, hint: Option<bool>) -> bool {
        self.get(path).or(hint).unwrap_or(false)
    }

    /// Flip `path` given its `current` effective state. Returns the new state.
    pub fn toggle(&mut self, path: impl Into<String>, current: bool) -> bool {
        let expanded = !current;
        self.set(path, expanded);
        expanded
    }

    /// Paths explicitly marked expanded, in path order.
    pub fn expanded_paths(&self) -> impl Iterator<Item = &str> {
        self.paths
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(path, _)| path.as_str())
    }

    /// Copy every expanded path of `previous` into `self`.
    ///
    /// Collapsed entries of `previous` are not carried over.
    pub fn merge_expanded_from(&mut self, previous: &ExpansionState) {
        for path in previous.expanded_paths() {
            self.expand(path);
        }
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut state = Self::new();
        for path in iter {
            state.expand(path);
        }
        state
    }
}
