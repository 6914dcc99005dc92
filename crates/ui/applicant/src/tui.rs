use std::io::{Stdout, stdout};
use std::ops::{Deref, DerefMut};

use color_eyre::Result;
use crossterm::{
    cursor,
    event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;

pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal events the application reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Error(String),
}

/// What a component wants done with an event it handled.
///
/// `Stop` carries the resulting action and keeps the event from reaching
/// components further down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse<T> {
    Stop(T),
}

/// Owns the terminal and its input stream.
///
/// Events are awaited one at a time; there is no background polling task.
pub struct Tui {
    terminal: ratatui::Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
}

impl Tui {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: ratatui::Terminal::new(CrosstermBackend::new(stdout()))?,
            events: EventStream::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.terminal.flush()?;
        restore()
    }

    /// Next relevant terminal event; `None` once the input stream has ended.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            match self.events.next().await? {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    return Some(Event::Key(key));
                }
                Ok(CrosstermEvent::Resize(w, h)) => return Some(Event::Resize(w, h)),
                Ok(_) => continue,
                Err(err) => return Some(Event::Error(err.to_string())),
            }
        }
    }
}

/// Leave the alternate screen and raw mode. Safe to call more than once.
pub fn restore() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        crossterm::execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
    }
    Ok(())
}

impl Deref for Tui {
    type Target = ratatui::Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore();
    }
}
