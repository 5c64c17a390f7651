use std::{
    io::{self, stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use engine::{InputSource, Key, Surface};

/// a [`Surface`] backed by a crossterm terminal. commands are queued until [`Surface::flush`].
pub struct Terminal<W: Write> {
    out: W,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for Terminal<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            queue!(self.out, Show)
        } else {
            queue!(self.out, Hide)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// non-blocking keyboard over crossterm's event queue.
#[derive(Default)]
pub struct KeyboardInput {
    pending: Option<Key>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// blocks until any key is pressed.
    pub fn wait_for_any_key(&mut self) -> io::Result<()> {
        // drain key presses left over from the game.
        self.pending = None;
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        loop {
            if let Event::Key(key_event) = event::read()? {
                if map_key_event(key_event).is_some() {
                    return Ok(());
                }
            }
        }
    }
}

impl InputSource for KeyboardInput {
    fn key_available(&mut self) -> io::Result<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        // skip resizes, focus changes and key releases until a key press turns up.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = map_key_event(key_event) {
                    self.pending = Some(key);
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        if let Some(key) = self.pending.take() {
            return Ok(key);
        }
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = map_key_event(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}

/// translates a crossterm key event. returns `None` for anything that isn't a key press.
pub fn map_key_event(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    let key = match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Interrupt
        }
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Char('w' | 'W') => Key::W,
        KeyCode::Char('s' | 'S') => Key::S,
        _ => Key::Other,
    };
    Some(key)
}

pub fn size() -> io::Result<(u16, u16)> {
    terminal::size()
}

/// raw mode, alternate screen and a hidden cursor for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            Hide,
            MoveTo(0, 0)
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), terminal::LeaveAlternateScreen, Show);
    }
}
