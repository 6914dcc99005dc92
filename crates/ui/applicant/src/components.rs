use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    state::State,
    tui::{Event, EventResponse, Frame},
};

pub mod application_form;
pub mod confirmation;
pub mod popup;

/// `Component` is a visual and interactive element of the user interface.
///
/// Components read the shared [`State`] but never mutate it; they express
/// intent by returning [`Action`]s, which the application loop applies.
pub trait Component {
    fn handle_events(
        &mut self,
        event: &Event,
        state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        let r = match event {
            Event::Key(key_event) => self.handle_key_events(*key_event, state)?,
            _ => None,
        };
        Ok(r)
    }

    fn handle_key_events(
        &mut self,
        _key: KeyEvent,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()>;
}
