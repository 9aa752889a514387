use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

/// Input events the inspector reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed.
    Click { x: u16, y: u16, button: MouseButton },
    /// Wheel scroll; positive `delta` scrolls down.
    Scroll { x: u16, y: u16, delta: i16 },
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifiers: Modifiers::new(),
        }
    }

    /// Map a crossterm event. Key releases, mouse moves and keys without a
    /// [`Key`] counterpart map to `None`.
    pub fn from_crossterm(event: CtEvent) -> Option<Self> {
        match event {
            CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Self::Key {
                key: Key::from_code(key.code)?,
                modifiers: key.modifiers.into(),
            }),
            CtEvent::Mouse(mouse) => {
                let (x, y) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(button) => Some(Self::Click {
                        x,
                        y,
                        button: button.into(),
                    }),
                    MouseEventKind::ScrollDown => Some(Self::Scroll { x, y, delta: 1 }),
                    MouseEventKind::ScrollUp => Some(Self::Scroll { x, y, delta: -1 }),
                    _ => None,
                }
            }
            CtEvent::Resize(width, height) => Some(Self::Resize { width, height }),
            _ => None,
        }
    }
}

impl Key {
    pub fn from_code(code: crossterm::event::KeyCode) -> Option<Self> {
        use crossterm::event::KeyCode;
        Some(match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => return None,
        })
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
