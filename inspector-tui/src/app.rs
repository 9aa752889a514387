//! Interactive inspector: input handling and painting for one document.

use std::io;

use inspector_lib::object::{KeySort, ObjectOptions, ObjectTreeAdapter};
use inspector_lib::table::Table;
use inspector_lib::tree::{Row, RowKind};
use inspector_lib::{
    DomInspector, ObjectInspector, ObjectNode, TableView, TreeAdapter, TreeView,
};
use inspector_term::{
    Buffer, Event, Key, MouseButton, Rect, TableLayout, Terminal, Theme, Viewport, paint_status,
    paint_table, paint_tree,
};
use log::{debug, info};

use crate::input::Document;
use crate::settings::{Settings, ThemeChoice};

enum Screen {
    Object(ObjectInspector),
    Dom(DomInspector),
    Table {
        view: TableView,
        /// Selected column; 0 is the index column.
        column: usize,
    },
}

pub struct App {
    screen: Screen,
    theme: Theme,
    viewport: Viewport,
    quit: bool,
}

impl App {
    pub fn new(document: Document, settings: &Settings) -> Self {
        let screen = match document {
            Document::Object(value) => {
                let options = ObjectOptions {
                    show_non_enumerable: settings.show_non_enumerable,
                    sort_object_keys: if settings.sort_keys {
                        KeySort::Alphabetical
                    } else {
                        KeySort::Insertion
                    },
                    ..ObjectOptions::default()
                };
                let view = TreeView::new(ObjectTreeAdapter::new(options), ObjectNode::Value(value));
                Screen::Object(configure(view, settings))
            }
            Document::Dom(node) => Screen::Dom(configure(DomInspector::inspect(node), settings)),
            Document::Table(value) => {
                let mut view = TableView::new(value);
                view.set_columns(settings.columns.clone());
                Screen::Table { view, column: 0 }
            }
        };
        let theme = match settings.theme {
            ThemeChoice::Light => Theme::light(),
            ThemeChoice::Dark => Theme::dark(),
        };

        Self {
            screen,
            theme,
            viewport: Viewport::new(),
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Draw and handle events until the user quits.
    pub fn run(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        info!("Inspector started");
        while !self.should_quit() {
            terminal.draw(|buffer| self.paint(buffer))?;
            let (width, height) = terminal.size();
            for event in terminal.poll(None)? {
                self.handle(event, Rect::from_size(width, height));
            }
        }
        info!("Inspector closed");
        Ok(())
    }

    /// React to `event` on a screen of size `area`.
    pub fn handle(&mut self, event: Event, area: Rect) {
        debug!("Event: {event:?}");
        let (body, _) = area.split_bottom(1);
        match event {
            Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => self.quit = true,
            Event::Key {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.ctrl => self.quit = true,
            Event::Resize { .. } => {}
            event => match &mut self.screen {
                Screen::Object(view) => {
                    if !object_event(view, &event) {
                        tree_event(view, &mut self.viewport, &event, body);
                    }
                }
                Screen::Dom(view) => tree_event(view, &mut self.viewport, &event, body),
                Screen::Table { view, column } => {
                    table_event(view, column, &mut self.viewport, &event, body)
                }
            },
        }
    }

    pub fn paint(&mut self, buffer: &mut Buffer) {
        let area = Rect::from_size(buffer.width(), buffer.height());
        let (body, status) = area.split_bottom(1);
        let theme = &self.theme;
        let text = match &mut self.screen {
            Screen::Object(view) => {
                paint_tree(buffer, body, &view.render(), &self.viewport, theme);
                let options = view.adapter().options();
                // State first; the key hints are the part a narrow screen cuts.
                format!(
                    " q quit  level {}  non-enumerable {}  sort {}  (+/- n s enter)",
                    view.expand_level(),
                    if options.show_non_enumerable { "on" } else { "off" },
                    sort_label(&options.sort_object_keys),
                )
            }
            Screen::Dom(view) => {
                paint_tree(buffer, body, &view.render(), &self.viewport, theme);
                format!(" q quit  level {}  (+/- enter)", view.expand_level())
            }
            Screen::Table { view, column } => match view.table() {
                Some(table) => {
                    let layout = TableLayout::new(&table);
                    paint_table(buffer, body, &table, &layout, *column, &self.viewport, theme);
                    format!(
                        " q quit  left/right column  enter sort  i index  {} rows",
                        table.rows.len()
                    )
                }
                None => {
                    for y in body.y..body.bottom() {
                        buffer.fill_row(y, body.x, body.right(), theme.background);
                    }
                    " q quit  input is not tabular".to_string()
                }
            },
        };
        paint_status(buffer, status, &text, theme);
    }
}

fn configure<A: TreeAdapter>(view: TreeView<A>, settings: &Settings) -> TreeView<A> {
    let view = view
        .with_expand_level(settings.expand_level)
        .with_expand_paths(settings.expand_paths.clone());
    match &settings.name {
        Some(name) => view.with_name(name.clone()),
        None => view,
    }
}

/// Object-only keys. Returns whether `event` was consumed.
fn object_event(view: &mut ObjectInspector, event: &Event) -> bool {
    let Event::Key {
        key: Key::Char(c), ..
    } = event
    else {
        return false;
    };
    match c {
        'n' => view.update_adapter(|adapter| {
            let options = adapter.options_mut();
            options.show_non_enumerable = !options.show_non_enumerable;
        }),
        's' => view.update_adapter(|adapter| {
            let options = adapter.options_mut();
            options.sort_object_keys = next_sort(&options.sort_object_keys);
        }),
        _ => return false,
    }
    true
}

/// Insertion, then a-z, then z-a.
fn next_sort(sort: &KeySort) -> KeySort {
    match sort {
        KeySort::Insertion => KeySort::Alphabetical,
        KeySort::Alphabetical => KeySort::custom(|a, b| b.display_name().cmp(&a.display_name())),
        KeySort::Custom(_) => KeySort::Insertion,
    }
}

fn sort_label(sort: &KeySort) -> &'static str {
    match sort {
        KeySort::Insertion => "insertion",
        KeySort::Alphabetical => "a-z",
        KeySort::Custom(_) => "z-a",
    }
}

fn tree_event<A: TreeAdapter>(
    view: &mut TreeView<A>,
    viewport: &mut Viewport,
    event: &Event,
    body: Rect,
) {
    let root = view.render();
    let rows = root.rows();
    let len = rows.len();
    let page = usize::from(body.height).max(1);
    let step = isize::try_from(page).unwrap_or(isize::MAX);

    match *event {
        Event::Key { key, .. } => match key {
            Key::Up => viewport.move_by(-1, len),
            Key::Down => viewport.move_by(1, len),
            Key::PageUp => viewport.move_by(-step, len),
            Key::PageDown => viewport.move_by(step, len),
            Key::Home => viewport.move_to(0, len),
            Key::End => viewport.move_to(usize::MAX, len),
            Key::Enter | Key::Char(' ') => {
                if let Some(node) = root.toggle_target(viewport.cursor) {
                    view.toggle(node);
                }
            }
            Key::Right => match rows.get(viewport.cursor) {
                Some(row) if row.kind == RowKind::Header && row.node.show_arrow => {
                    if row.node.expanded {
                        viewport.move_by(1, len);
                    } else {
                        view.toggle(row.node);
                    }
                }
                _ => {}
            },
            Key::Left => match rows.get(viewport.cursor) {
                Some(row)
                    if row.kind == RowKind::Header && row.node.show_arrow && row.node.expanded =>
                {
                    view.toggle(row.node);
                }
                _ => {
                    if let Some(parent) = parent_row(&rows, viewport.cursor) {
                        viewport.move_to(parent, len);
                    }
                }
            },
            Key::Char('+') => view.set_expand_level(view.expand_level().saturating_add(1)),
            Key::Char('-') => view.set_expand_level(view.expand_level().saturating_sub(1).max(0)),
            _ => {}
        },
        Event::Click {
            y,
            button: MouseButton::Left,
            ..
        } => {
            if let Some(row) = viewport.row_at(body, y).filter(|row| *row < len) {
                viewport.move_to(row, len);
                if let Some(node) = root.toggle_target(row) {
                    view.toggle(node);
                }
            }
        }
        Event::Scroll { delta, .. } => {
            viewport.scroll_by(isize::from(delta), len, page);
        }
        _ => {}
    }

    // Toggles change the row count.
    let len = view.render().height();
    viewport.move_to(viewport.cursor, len);
    viewport.follow_cursor(page);
}

/// Row of the node owning row `index`: the parent for a header, the node's
/// own header for a footer.
fn parent_row(rows: &[Row<'_>], index: usize) -> Option<usize> {
    let row = rows.get(index)?;
    let depth = match row.kind {
        RowKind::Header => row.depth().checked_sub(1)?,
        RowKind::Footer => row.depth(),
    };
    rows[..index]
        .iter()
        .rposition(|r| r.kind == RowKind::Header && r.depth() == depth)
}

fn table_event(
    view: &mut TableView,
    column: &mut usize,
    viewport: &mut Viewport,
    event: &Event,
    body: Rect,
) {
    let Some(table) = view.table() else { return };
    let layout = TableLayout::new(&table);
    let len = table.rows.len();
    let rows_area = Rect::new(body.x, body.y + 1, body.width, body.height.saturating_sub(1));
    let page = usize::from(rows_area.height).max(1);
    let step = isize::try_from(page).unwrap_or(isize::MAX);

    match *event {
        Event::Key { key, .. } => match key {
            Key::Up => viewport.move_by(-1, len),
            Key::Down => viewport.move_by(1, len),
            Key::PageUp => viewport.move_by(-step, len),
            Key::PageDown => viewport.move_by(step, len),
            Key::Home => viewport.move_to(0, len),
            Key::End => viewport.move_to(usize::MAX, len),
            Key::Left => *column = column.saturating_sub(1),
            Key::Right => *column = (*column + 1).min(layout.len().saturating_sub(1)),
            Key::Enter | Key::Char(' ') => sort_by(view, &table, *column),
            Key::Char('i') => view.click_index(),
            _ => {}
        },
        Event::Click {
            x,
            y,
            button: MouseButton::Left,
        } => {
            if y == body.y {
                if let Some(clicked) = layout.column_at(x.saturating_sub(body.x)) {
                    *column = clicked;
                    sort_by(view, &table, clicked);
                }
            } else if let Some(row) = viewport.row_at(rows_area, y).filter(|row| *row < len) {
                viewport.move_to(row, len);
            }
        }
        Event::Scroll { delta, .. } => {
            viewport.scroll_by(isize::from(delta), len, page);
        }
        _ => {}
    }
    viewport.follow_cursor(page);
}

fn sort_by(view: &mut TableView, table: &Table, column: usize) {
    match column.checked_sub(1).and_then(|i| table.columns.get(i)) {
        Some(header) => view.click_column(header.label.clone()),
        None => view.click_index(),
    }
}
