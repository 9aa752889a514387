//! Terminal front end for the inspector: a cell buffer, a diffing crossterm
//! terminal, themes and painters for trees and tables.

pub mod buffer;
pub mod event;
pub mod paint;
pub mod rect;
pub mod style;
pub mod terminal;
pub mod text;
pub mod theme;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use paint::{TableLayout, Viewport, paint_status, paint_table, paint_tree};
pub use rect::Rect;
pub use style::{Rgb, Style, TextStyle};
pub use terminal::Terminal;
pub use theme::Theme;
