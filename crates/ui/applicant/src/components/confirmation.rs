use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use job_application::Confirmation;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::{
    action::Action,
    components::{
        Component,
        popup::{centered_rect_fixed, draw_popup_frame},
    },
    state::State,
    tui::{EventResponse, Frame},
};

/// Modal summary shown after an accepted submission:
/// - Enter / Esc: close (emit Action::CloseConfirmation)
/// - Ctrl+C: quit the application
///
/// The summary is captured when the popup opens; later edits don't change it.
/// Each summary line takes exactly one row; values wider than the dialog are
/// cut at the border.
pub struct ConfirmationPopup {
    summary: Confirmation,
    min_width: u16,
}

impl ConfirmationPopup {
    pub fn new(summary: Confirmation) -> Self {
        Self {
            summary,
            min_width: 64,
        }
    }

    /// Set a minimum width for the dialog (default: 64).
    pub fn min_width(mut self, w: u16) -> Self {
        self.min_width = w.max(20);
        self
    }

    /// Border, one row per summary line, spacer and hint.
    fn height(&self) -> u16 {
        self.summary.lines.len() as u16 + 4
    }
}

impl Component for ConfirmationPopup {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            KeyCode::Enter | KeyCode::Esc => Some(Action::CloseConfirmation),
            _ => None,
        };
        // Modal: swallow everything else so the form underneath stays put.
        Ok(Some(EventResponse::Stop(action.unwrap_or(Action::Render))))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }

        let dialog = centered_rect_fixed(area, self.min_width, self.height());
        let inner = draw_popup_frame(f, dialog, self.summary.title);

        let mut lines: Vec<Line> = self
            .summary
            .lines
            .iter()
            .map(|l| {
                Line::from(vec![
                    Span::styled(format!("{}: ", l.label), Style::default().fg(Color::White)),
                    Span::styled(l.value.as_str(), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();

        lines.push(Line::raw(""));
        lines.push(
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::White)),
                Span::raw("/"),
                Span::styled("Esc", Style::default().fg(Color::White)),
                Span::raw(": Close"),
            ])
            .fg(Color::DarkGray),
        );

        f.render_widget(Paragraph::new(Text::from(lines)), inner);
        Ok(())
    }
}
