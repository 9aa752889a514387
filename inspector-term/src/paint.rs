//! Painters for rendered trees and tables.

use inspector_lib::table::{ColumnHeader, Table};
use inspector_lib::tree::{Fragment, TreeNode};
use inspector_lib::Token;

use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::style::{Rgb, Style};
use crate::text::{display_width, truncate_to_width};
use crate::theme::Theme;

/// Columns of indentation per tree depth.
pub const INDENT: u16 = 2;

/// Widest a table column gets.
pub const MAX_COLUMN_WIDTH: u16 = 32;

const COLUMN_SEPARATOR: &str = "│";

/// Cursor and scroll position over a list of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Selected row.
    pub cursor: usize,
    /// First visible row.
    pub offset: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor by `delta` rows, staying within `len` rows.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        self.move_to(self.cursor.saturating_add_signed(delta), len);
    }

    /// Put the cursor on `row`, staying within `len` rows.
    pub fn move_to(&mut self, row: usize, len: usize) {
        self.cursor = row.min(len.saturating_sub(1));
    }

    /// Scroll by `delta` rows, dragging the cursor along when it leaves the
    /// `height` visible rows.
    pub fn scroll_by(&mut self, delta: isize, len: usize, height: usize) {
        let max_offset = len.saturating_sub(height);
        self.offset = self.offset.saturating_add_signed(delta).min(max_offset);
        if self.cursor < self.offset {
            self.cursor = self.offset;
        } else if height > 0 && self.cursor >= self.offset + height {
            self.cursor = self.offset + height - 1;
        }
        self.move_to(self.cursor, len);
    }

    /// Scroll just enough for the cursor to be among the `height` visible rows.
    pub fn follow_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + height {
            self.offset = self.cursor + 1 - height;
        }
    }

    /// Content row shown at screen row `y` of `area`.
    pub fn row_at(&self, area: Rect, y: u16) -> Option<usize> {
        (y >= area.y && y < area.bottom()).then(|| self.offset + usize::from(y - area.y))
    }
}

/// Paint `fragment` from column `x`, clipped at `max_x`. Returns the column
/// after the text.
pub fn paint_fragment(
    buffer: &mut Buffer,
    x: u16,
    y: u16,
    fragment: &Fragment,
    max_x: u16,
    theme: &Theme,
    bg: Rgb,
) -> u16 {
    fragment.spans().iter().fold(x, |x, span| {
        buffer.put_str(x, y, &span.text, max_x, theme.token(span.token), bg)
    })
}

/// Paint the visible rows of a rendered tree into `area`.
pub fn paint_tree(
    buffer: &mut Buffer,
    area: Rect,
    root: &TreeNode,
    viewport: &Viewport,
    theme: &Theme,
) {
    for y in area.y..area.bottom() {
        buffer.fill_row(y, area.x, area.right(), theme.background);
    }

    let rows = root.rows();
    let visible = rows
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(usize::from(area.height));
    for (y, (line, row)) in (area.y..).zip(visible) {
        let bg = if line == viewport.cursor {
            theme.selection
        } else {
            theme.background
        };
        buffer.fill_row(y, area.x, area.right(), bg);

        let indent = u16::try_from(row.depth())
            .unwrap_or(u16::MAX)
            .saturating_mul(INDENT);
        let mut x = area.x.saturating_add(indent);
        if let Some(glyph) = row.gutter() {
            x = buffer.put_str(x, y, glyph, area.right(), Style::new(theme.arrow), bg);
            x = buffer.put_str(x, y, " ", area.right(), theme.text(), bg);
        }
        paint_fragment(buffer, x, y, row.content(), area.right(), theme, bg);
    }
}

/// Column widths of a table, index column first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub widths: Vec<u16>,
}

impl TableLayout {
    pub fn new(table: &Table) -> Self {
        // Leave room for " ▲" after every label.
        let header_width = |header: &ColumnHeader| display_width(&header.label) + 2;

        let index = table
            .rows
            .iter()
            .map(|row| display_width(&row.header))
            .fold(header_width(&table.index), usize::max);
        let columns = table.columns.iter().enumerate().map(|(i, column)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i)?.as_ref())
                .map(|cell| display_width(&cell.plain_text()))
                .fold(header_width(column), usize::max)
        });

        let widths = std::iter::once(index)
            .chain(columns)
            .map(|width| {
                u16::try_from(width)
                    .unwrap_or(MAX_COLUMN_WIDTH)
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect();
        Self { widths }
    }

    /// Number of columns, index column included.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Width of `column`; zero past the last one.
    pub fn width(&self, column: usize) -> u16 {
        self.widths.get(column).copied().unwrap_or(0)
    }

    /// Offset of column `column` from the table's left edge.
    pub fn column_x(&self, column: usize) -> u16 {
        self.widths
            .iter()
            .take(column)
            .fold(0u16, |x, width| x.saturating_add(*width).saturating_add(1))
    }

    /// Column under offset `x` from the table's left edge. Separators belong
    /// to the column on their left.
    pub fn column_at(&self, x: u16) -> Option<usize> {
        let mut right = 0u16;
        for (i, width) in self.widths.iter().enumerate() {
            right = right.saturating_add(*width).saturating_add(1);
            if x < right {
                return Some(i);
            }
        }
        None
    }
}

/// Paint a table into `area`: a header row, then the rows in `viewport`.
///
/// Column `selected` (0 is the index column) gets an underlined header.
pub fn paint_table(
    buffer: &mut Buffer,
    area: Rect,
    table: &Table,
    layout: &TableLayout,
    selected: usize,
    viewport: &Viewport,
    theme: &Theme,
) {
    if area.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        buffer.fill_row(y, area.x, area.right(), theme.background);
    }

    let y = area.y;
    buffer.fill_row(y, area.x, area.right(), theme.header);
    let headers = std::iter::once(&table.index).chain(&table.columns);
    for (i, header) in headers.enumerate() {
        let (x, max_x) = column_span(area, layout, i);
        let label_width = usize::from(layout.width(i)).saturating_sub(2);
        let mut style = theme.text().bold();
        if i == selected {
            style = style.underline();
        }
        let mut x = buffer.put_str(
            x,
            y,
            &truncate_to_width(&header.label, label_width),
            max_x,
            style,
            theme.header,
        );
        if let Some(direction) = header.sort {
            x = buffer.put_str(x, y, " ", max_x, style, theme.header);
            buffer.put_str(
                x,
                y,
                direction.glyph(),
                max_x,
                theme.token(Token::SortIcon),
                theme.header,
            );
        }
        paint_separator(buffer, max_x, y, area, theme, theme.header);
    }

    let body = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    let visible = table
        .rows
        .iter()
        .enumerate()
        .skip(viewport.offset)
        .take(usize::from(body.height));
    for (y, (line, row)) in (body.y..).zip(visible) {
        let bg = if line == viewport.cursor {
            theme.selection
        } else {
            theme.background
        };
        buffer.fill_row(y, area.x, area.right(), bg);

        let (x, max_x) = column_span(area, layout, 0);
        let header = truncate_to_width(&row.header, usize::from(layout.width(0)));
        buffer.put_str(x, y, &header, max_x, theme.text(), bg);
        paint_separator(buffer, max_x, y, area, theme, bg);

        for (i, cell) in row.cells.iter().enumerate() {
            let (x, max_x) = column_span(area, layout, i + 1);
            if let Some(cell) = cell {
                paint_fragment(buffer, x, y, cell, max_x, theme, bg);
            }
            paint_separator(buffer, max_x, y, area, theme, bg);
        }
    }
}

/// Screen columns `x..max_x` of column `column`.
fn column_span(area: Rect, layout: &TableLayout, column: usize) -> (u16, u16) {
    let x = area.x.saturating_add(layout.column_x(column));
    let max_x = x
        .saturating_add(layout.width(column))
        .min(area.right());
    (x, max_x)
}

fn paint_separator(buffer: &mut Buffer, x: u16, y: u16, area: Rect, theme: &Theme, bg: Rgb) {
    buffer.put_str(
        x,
        y,
        COLUMN_SEPARATOR,
        area.right(),
        Style::new(theme.border),
        bg,
    );
}

/// Paint a one-line status bar in inverted colors.
pub fn paint_status(buffer: &mut Buffer, area: Rect, text: &str, theme: &Theme) {
    let bg = theme.foreground;
    for y in area.y..area.bottom() {
        buffer.fill_row(y, area.x, area.right(), bg);
    }
    let text = truncate_to_width(text, usize::from(area.width));
    buffer.put_str(area.x, area.y, &text, area.right(), Style::new(theme.background), bg);
}
