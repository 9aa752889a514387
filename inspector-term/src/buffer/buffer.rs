use super::Cell;
use crate::style::{Rgb, Style};
use crate::text::char_width;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    fn position(&self, i: usize) -> (u16, u16) {
        let x = (i % self.width as usize) as u16;
        let y = (i / self.width as usize) as u16;
        (x, y)
    }

    /// Cells of `self` that differ from `other`, with their positions.
    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let (x, y) = self.position(i);
                (x, y, cell)
            })
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let (x, y) = self.position(i);
            (x, y, cell)
        })
    }

    /// Blank every cell with `bg`.
    pub fn fill(&mut self, bg: Rgb) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Blank the columns `from..to` of row `y` with `bg`.
    pub fn fill_row(&mut self, y: u16, from: u16, to: u16, bg: Rgb) {
        for x in from..to.min(self.width) {
            self.set(x, y, Cell::blank(bg));
        }
    }

    /// Write `text` from column `x`, never touching column `max_x` or beyond.
    ///
    /// Double-width characters that would straddle `max_x` are dropped.
    /// Returns the column after the last written character.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, max_x: u16, style: Style, bg: Rgb) -> u16 {
        let max_x = max_x.min(self.width);
        let mut x = x;
        for ch in text.chars() {
            let ch_w = char_width(ch) as u16;
            if ch_w == 0 {
                continue;
            }
            if x + ch_w > max_x {
                break;
            }
            self.set(x, y, Cell::new(ch).styled(style).with_bg(bg));
            if ch_w == 2 {
                let mut continuation = Cell::blank(bg).styled(style);
                continuation.wide_continuation = true;
                self.set(x + 1, y, continuation);
            }
            x += ch_w;
        }
        x
    }

    /// The characters of row `y`, for inspection.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }
}
