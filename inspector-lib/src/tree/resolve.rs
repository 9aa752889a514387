//! Expansion-state resolution.

use log::{debug, trace};

use super::adapter::TreeAdapter;
use super::path::{
    ROOT_PATH, WILDCARD, child_path, matches_root, segments, wildcard_paths_from_level,
};
use super::state::ExpansionState;

/// Compute which paths are expanded.
///
/// Every pattern in `wildcard_paths_from_level(expand_level)` followed by
/// `expand_paths` is walked against the actual data: concrete segments look up
/// one named child, `*` fans out over all children. A branch only descends
/// into values that have children, and a pattern that is fully consumed marks the
/// path it reached. Patterns that do not match contribute nothing.
///
/// Every path expanded in `previous` stays expanded.
pub fn resolve<A>(
    root: &A::Data,
    adapter: &A,
    expand_paths: &[String],
    expand_level: i32,
    previous: &ExpansionState,
) -> ExpansionState
where
    A: TreeAdapter + ?Sized,
{
    let patterns = wildcard_paths_from_level(expand_level);
    let mut state = ExpansionState::new();

    for pattern in patterns.iter().chain(expand_paths) {
        let segments = segments(pattern);
        let Some((first, rest)) = segments.split_first() else {
            continue;
        };
        if !matches_root(first) || !adapter.has_children(root) {
            trace!("expand path {pattern:?} does not match the root");
            continue;
        }
        populate(adapter, root, rest, ROOT_PATH.to_string(), &mut state);
    }

    state.merge_expanded_from(previous);
    debug!(
        "resolved {} expanded paths (level {expand_level}, {} explicit patterns)",
        state.len(),
        expand_paths.len()
    );
    state
}

fn populate<A>(
    adapter: &A,
    data: &A::Data,
    rest: &[&str],
    path: String,
    state: &mut ExpansionState,
) where
    A: TreeAdapter + ?Sized,
{
    let Some((segment, rest)) = rest.split_first() else {
        state.expand(path);
        return;
    };

    if *segment == WILDCARD {
        let children = match adapter.children(data) {
            Ok(children) => children.unwrap_or_default(),
            Err(err) => {
                debug!("stopping expansion below {path}: {err}");
                return;
            }
        };
        for child in children {
            if adapter.has_children(&child.data) {
                populate(adapter, &child.data, rest, child_path(&path, child.segment()), state);
            }
        }
    } else if let Some(child) = adapter.child(data, segment) {
        if adapter.has_children(&child) {
            populate(adapter, &child, rest, child_path(&path, segment), state);
        }
    }
}
