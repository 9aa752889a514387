use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event,
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::{debug, trace};

use crate::buffer::{Buffer, Cell};
use crate::event::Event;
use crate::text::char_width;

/// Full-screen terminal session with double-buffered, diffed output.
///
/// Raw mode, the alternate screen and mouse capture are set up on creation
/// and restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    /// The screen content is unknown; repaint every cell.
    invalidated: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        debug!("terminal {width}x{height}");
        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            invalidated: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` (forever with `None`) for input and return every
    /// pending event.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();
        match timeout {
            Some(timeout) => {
                if event::poll(timeout)? {
                    raw.push(event::read()?);
                }
            }
            None => raw.push(event::read()?),
        }
        if !raw.is_empty() {
            while event::poll(Duration::ZERO)? {
                raw.push(event::read()?);
            }
        }
        Ok(raw.into_iter().filter_map(Event::from_crossterm).collect())
    }

    /// Paint a frame with `paint` and write the cells that changed.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            self.invalidated = true;
        }

        self.current_buffer.clear();
        paint(&mut self.current_buffer);
        self.flush()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    /// Repaint every cell on the next draw.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    fn flush(&mut self) -> io::Result<()> {
        let changes: Vec<(u16, u16, Cell)> = if std::mem::take(&mut self.invalidated) {
            queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            self.current_buffer.cells().map(|(x, y, c)| (x, y, *c)).collect()
        } else {
            self.current_buffer
                .diff(&self.previous_buffer)
                .map(|(x, y, c)| (x, y, *c))
                .collect()
        };
        trace!("writing {} cells", changes.len());

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last: Option<Cell> = None;

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in changes {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last.is_none_or(|l| l.style != cell.style) {
                queue!(self.stdout, SetAttribute(Attribute::Reset))?;
                if cell.style.bold {
                    queue!(self.stdout, SetAttribute(Attribute::Bold))?;
                }
                if cell.style.dim {
                    queue!(self.stdout, SetAttribute(Attribute::Dim))?;
                }
                if cell.style.italic {
                    queue!(self.stdout, SetAttribute(Attribute::Italic))?;
                }
                if cell.style.underline {
                    queue!(self.stdout, SetAttribute(Attribute::Underlined))?;
                }
                // Reset dropped the colors too.
                last = None;
            }
            if last.is_none_or(|l| l.fg != cell.fg) {
                let fg = cell.fg;
                queue!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b,
                    })
                )?;
            }
            if last.is_none_or(|l| l.bg != cell.bg) {
                let bg = cell.bg;
                queue!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: bg.r,
                        g: bg.g,
                        b: bg.b,
                    })
                )?;
            }
            last = Some(cell);

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
