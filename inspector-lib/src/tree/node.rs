//! Rendered tree rows.

use super::adapter::Label;
use super::fragment::Fragment;

/// Gutter glyph of a collapsed node.
pub const ARROW_COLLAPSED: &str = "▶";

/// Gutter glyph of an expanded node.
pub const ARROW_EXPANDED: &str = "▼";

/// Gutter filler that keeps childless rows aligned with their siblings.
pub const PLACEHOLDER: &str = " ";

/// One rendered node and, when expanded, its rendered children.
///
/// Collapsed nodes never have `children`: the engine does not descend into
/// them at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub path: String,
    pub name: Option<String>,
    pub depth: usize,
    pub expanded: bool,
    pub synthetic: bool,
    pub non_enumerable: bool,
    /// The node has children and gets an expand arrow.
    pub show_arrow: bool,
    /// No arrow, but keep the gutter so the row lines up with its siblings.
    pub show_placeholder: bool,
    pub label: Label,
    pub children: Vec<TreeNode>,
}

/// Which part of a node a [`Row`] shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// The node's own line: gutter plus label content.
    Header,
    /// The label footer after the children region.
    Footer,
}

/// A single visible line of a rendered tree.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub node: &'a TreeNode,
    pub kind: RowKind,
}

impl<'a> Row<'a> {
    pub fn depth(&self) -> usize {
        self.node.depth
    }

    /// Gutter glyph; footers align with the header's content.
    pub fn gutter(&self) -> Option<&'static str> {
        match self.kind {
            RowKind::Header => self.node.gutter(),
            RowKind::Footer => self.node.gutter().map(|_| PLACEHOLDER),
        }
    }

    pub fn content(&self) -> &'a Fragment {
        match (self.kind, &self.node.label.footer) {
            (RowKind::Footer, Some(footer)) => footer,
            _ => &self.node.label.content,
        }
    }

    /// Activating this row toggles its node.
    pub fn is_toggleable(&self) -> bool {
        self.kind == RowKind::Header && self.node.show_arrow
    }
}

impl TreeNode {
    /// Gutter glyph for the header row.
    pub fn gutter(&self) -> Option<&'static str> {
        if self.show_arrow {
            Some(if self.expanded {
                ARROW_EXPANDED
            } else {
                ARROW_COLLAPSED
            })
        } else if self.show_placeholder {
            Some(PLACEHOLDER)
        } else {
            None
        }
    }

    fn shows_footer(&self) -> bool {
        self.expanded && self.label.footer.is_some()
    }

    /// Number of visible rows, children and footer included.
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(TreeNode::height).sum::<usize>()
            + usize::from(self.shows_footer())
    }

    /// All visible rows in display order.
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut rows = Vec::with_capacity(self.height());
        self.collect_rows(&mut rows);
        rows
    }

    fn collect_rows<'a>(&'a self, rows: &mut Vec<Row<'a>>) {
        rows.push(Row {
            node: self,
            kind: RowKind::Header,
        });
        for child in &self.children {
            child.collect_rows(rows);
        }
        if self.shows_footer() {
            rows.push(Row {
                node: self,
                kind: RowKind::Footer,
            });
        }
    }

    /// The node an interaction with `row` should toggle.
    ///
    /// Only a node's own header row targets it. Rows inside a child's region
    /// belong to that child and never toggle an ancestor; footers and rows of
    /// childless nodes toggle nothing.
    pub fn toggle_target(&self, row: usize) -> Option<&TreeNode> {
        if row == 0 {
            return self.show_arrow.then_some(self);
        }
        let mut offset = 1;
        for child in &self.children {
            let height = child.height();
            if row < offset + height {
                return child.toggle_target(row - offset);
            }
            offset += height;
        }
        None
    }

    /// Find a rendered node by path.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(self.path.as_str()) {
            return None;
        }
        self.children.iter().find_map(|child| child.find(path))
    }

    /// Row index of the header of the node at `path`.
    pub fn row_of(&self, path: &str) -> Option<usize> {
        self.rows()
            .iter()
            .position(|row| row.kind == RowKind::Header && row.node.path == path)
    }
}
