use color_eyre::Result;
use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use form::{ChangeEvent, FormField, FormFieldKind, toggle_option};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    action::Action,
    components::{
        Component,
        popup::{centered_rect_fixed, draw_popup_frame},
    },
    state::State,
    tui::{EventResponse, Frame},
};

const SUBMIT_LABEL: &str = "[ Submit ]";

/// Main view: every active field of the application plus a submit button.
///
/// Focus is an index into the active fields; one past the last field is the
/// submit button. The ring is recomputed on every key, so fields appearing or
/// disappearing after a position change are picked up immediately.
pub struct ApplicationForm {
    focused: usize,
    editing: bool,
    input: Input,
    option_cursor: usize,
    scroll: u16,
    width: u16,
}

impl ApplicationForm {
    pub fn new(width: u16) -> Self {
        Self {
            focused: 0,
            editing: false,
            input: Input::default(),
            option_cursor: 0,
            scroll: 0,
            width: width.max(30),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn ring_len(state: &State) -> usize {
        state.active_fields().len() + 1
    }

    fn clamp_focus(&mut self, state: &State) {
        let len = Self::ring_len(state);
        if self.focused >= len {
            self.focused = len - 1;
            self.option_cursor = 0;
        }
    }

    fn focused_field<'s>(&self, state: &'s State) -> Option<&'s FormField> {
        state.active_fields().get(self.focused).copied()
    }

    fn on_submit_button(&self, state: &State) -> bool {
        self.focused + 1 == Self::ring_len(state)
    }

    fn focus_next(&mut self, state: &State) {
        self.focused = (self.focused + 1) % Self::ring_len(state);
        self.option_cursor = 0;
    }

    fn focus_prev(&mut self, state: &State) {
        let len = Self::ring_len(state);
        self.focused = (self.focused + len - 1) % len;
        self.option_cursor = 0;
    }

    fn start_editing(&mut self, field: &FormField, state: &State) {
        let current = state.form.values().text(&field.key).to_string();
        self.input = Input::default().with_value(current);
        self.editing = true;
    }

    fn stop_editing(&mut self) {
        self.editing = false;
        self.input = Input::default();
    }

    fn cycle_select(field: &FormField, state: &State, dir: i32) -> Option<Action> {
        let options = field.options();
        if options.is_empty() {
            return None;
        }
        let current = state.form.values().text(&field.key);
        let idx = options.iter().position(|o| o == current).unwrap_or(0) as i32;
        let next = (idx + dir).rem_euclid(options.len() as i32) as usize;
        Some(Action::Change(ChangeEvent::new(
            field.key.clone(),
            options[next].clone(),
        )))
    }

    fn toggle_checkbox(&self, field: &FormField, state: &State) -> Option<Action> {
        let option = field.options().get(self.option_cursor)?;
        let current = state.form.values().list(&field.key);
        let checked = !current.contains(option);
        let next = toggle_option(current, option, checked);
        Some(Action::Change(ChangeEvent::new(field.key.clone(), next)))
    }

    fn handle_editing_key(
        &mut self,
        key: KeyEvent,
        state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.stop_editing();
            return Ok(Some(EventResponse::Stop(Action::Render)));
        }
        let Some(field) = self.focused_field(state) else {
            self.stop_editing();
            return Ok(Some(EventResponse::Stop(Action::Render)));
        };
        let changed = self
            .input
            .handle_event(&CrosstermEvent::Key(key))
            .is_some_and(|c| c.value);
        let action = if changed {
            Action::Change(ChangeEvent::new(field.key.clone(), self.input.value()))
        } else {
            Action::Render
        };
        Ok(Some(EventResponse::Stop(action)))
    }

    fn display_value(field: &FormField, state: &State) -> String {
        let value = state.form.values().text(&field.key);
        match &field.kind {
            FormFieldKind::Select { .. } if value.is_empty() => "< Select a position >".into(),
            FormFieldKind::Select { .. } => format!("< {value} >"),
            _ => value.to_string(),
        }
    }

    /// Build the scrollable body. Returns the lines plus the first and last
    /// line of the focused item, and the column where an edited value starts.
    fn body_lines(&self, state: &State) -> (Vec<Line<'static>>, (usize, usize), u16) {
        let mut lines: Vec<Line<'static>> = Vec::new();

        if let Some(desc) = &state.schema.description {
            for l in desc.lines() {
                lines.push(Line::from(l.to_string()).fg(Color::Gray));
            }
            lines.push(Line::raw(""));
        }

        let hidden = state.hidden_errors();
        if !hidden.is_empty() {
            lines.push(
                Line::from("Errors:")
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            );
            for (_, msg) in hidden {
                lines.push(Line::from(format!("• {msg}")).fg(Color::Red));
            }
            lines.push(Line::raw(""));
        }

        let mut focus_span = (0, 0);
        let mut cursor_col = 0;

        for (idx, field) in state.active_fields().into_iter().enumerate() {
            let focused = idx == self.focused;
            let start = lines.len();

            let label_style = if focused {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = format!("{}: ", field.label);

            if let FormFieldKind::CheckboxGroup { options } = &field.kind {
                lines.push(Line::from(Span::styled(field.label.clone(), label_style)));
                let checked = state.form.values().list(&field.key);
                for (i, option) in options.iter().enumerate() {
                    let mark = if checked.contains(option) { "[x]" } else { "[ ]" };
                    let style = if focused && i == self.option_cursor {
                        Style::default().fg(Color::Black).bg(Color::White)
                    } else {
                        Style::default().fg(Color::Cyan)
                    };
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("{mark} {option}"), style),
                    ]));
                }
            } else {
                let value = if focused && self.editing {
                    self.input.value().to_string()
                } else {
                    Self::display_value(field, state)
                };
                let value_style = if focused {
                    Style::default().fg(Color::Black).bg(Color::White)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                let label = Span::styled(prefix, label_style);
                if focused {
                    cursor_col = label.width() as u16;
                }
                lines.push(Line::from(vec![label, Span::styled(value, value_style)]));
            }

            if let Some(help) = &field.help {
                if focused {
                    lines.push(Line::from(help.clone()).fg(Color::DarkGray));
                }
            }

            if let Some(err) = state.form.error_for(&field.key) {
                lines.push(Line::from(err.to_string()).fg(Color::Red));
            }

            if focused {
                focus_span = (start, lines.len().saturating_sub(1));
            }
            lines.push(Line::raw(""));
        }

        let submit_style = if self.on_submit_button(state) {
            focus_span = (lines.len(), lines.len());
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(Line::from(Span::styled(SUBMIT_LABEL, submit_style)));

        (lines, focus_span, cursor_col)
    }

    fn ensure_visible(&mut self, focus_span: (usize, usize), height: u16) {
        let (first, last) = (focus_span.0 as u16, focus_span.1 as u16);
        if first < self.scroll {
            self.scroll = first;
        } else if height > 0 && last >= self.scroll + height {
            self.scroll = (last + 1).saturating_sub(height).min(first);
        }
    }

    fn footer(&self) -> Line<'static> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::White));
        let spans = if self.is_editing() {
            vec![key("Enter/Esc"), Span::raw(": Done editing")]
        } else {
            vec![
                key("Up/Down"),
                Span::raw(": Navigate   "),
                key("Enter"),
                Span::raw(": Edit   "),
                key("Ctrl+S"),
                Span::raw(": Submit   "),
                key("Esc"),
                Span::raw(": Quit"),
            ]
        };
        Line::from(spans).fg(Color::DarkGray)
    }
}

impl Component for ApplicationForm {
    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &State,
    ) -> Result<Option<EventResponse<Action>>> {
        self.clamp_focus(state);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(Some(EventResponse::Stop(Action::Quit))),
                KeyCode::Char('s') => {
                    self.stop_editing();
                    return Ok(Some(EventResponse::Stop(Action::Submit)));
                }
                _ => {}
            }
        }

        if self.editing {
            return self.handle_editing_key(key, state);
        }

        let field = self.focused_field(state);
        let action = match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus_prev(state);
                Some(Action::Render)
            }
            KeyCode::Down | KeyCode::Tab => {
                self.focus_next(state);
                Some(Action::Render)
            }
            KeyCode::Left | KeyCode::Right => match field {
                Some(f) if matches!(f.kind, FormFieldKind::Select { .. }) => {
                    let dir = if key.code == KeyCode::Left { -1 } else { 1 };
                    Self::cycle_select(f, state, dir)
                }
                Some(f) if f.is_list() => {
                    let len = f.options().len().max(1);
                    self.option_cursor = if key.code == KeyCode::Left {
                        (self.option_cursor + len - 1) % len
                    } else {
                        (self.option_cursor + 1) % len
                    };
                    Some(Action::Render)
                }
                _ => None,
            },
            KeyCode::Char(' ') => match field {
                Some(f) if f.is_list() => self.toggle_checkbox(f, state),
                _ => None,
            },
            KeyCode::Enter => match field {
                None => Some(Action::Submit),
                Some(f) if f.is_textual() => {
                    self.start_editing(f, state);
                    Some(Action::Render)
                }
                Some(f) if f.is_list() => self.toggle_checkbox(f, state),
                Some(f) => Self::cycle_select(f, state, 1),
            },
            KeyCode::Esc => Some(Action::Quit),
            _ => None,
        };
        Ok(action.map(EventResponse::Stop))
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        if area.width < 5 || area.height < 5 {
            return Ok(());
        }
        self.clamp_focus(state);

        let dialog = centered_rect_fixed(area, self.width, area.height);
        let inner = draw_popup_frame(f, dialog, &state.schema.title);
        let [body, footer] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let (lines, focus_span, cursor_col) = self.body_lines(state);
        self.ensure_visible(focus_span, body.height);

        f.render_widget(
            Paragraph::new(Text::from(lines)).scroll((self.scroll, 0)),
            body,
        );
        f.render_widget(Paragraph::new(self.footer()), footer);

        if self.editing {
            let row = focus_span.0 as u16;
            if row >= self.scroll && row < self.scroll + body.height {
                let x = body.x + cursor_col + self.input.visual_cursor() as u16;
                let y = body.y + row - self.scroll;
                f.set_cursor_position((x.min(body.right().saturating_sub(1)), y));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form::FieldValue;
    use job_application::fields::{ADDITIONAL_SKILLS, FULL_NAME, POSITION, PORTFOLIO_URL};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key to the form and apply whatever it emits, like the app loop does.
    fn send(form: &mut ApplicationForm, state: &mut State, code: KeyCode) -> Option<Action> {
        send_key(form, state, press(code))
    }

    fn send_key(form: &mut ApplicationForm, state: &mut State, key: KeyEvent) -> Option<Action> {
        let EventResponse::Stop(action) = form.handle_key_events(key, state).unwrap()?;
        if let Action::Change(ev) = &action {
            state.form.handle_change(ev.clone()).unwrap();
        }
        Some(action)
    }

    fn focus(form: &mut ApplicationForm, state: &mut State, key: &str) {
        while form.focused_field(state).map(|f| f.key.as_str()) != Some(key) {
            send(form, state, KeyCode::Down);
        }
    }

    #[test]
    fn typing_emits_one_change_per_keystroke() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);

        send(&mut form, &mut state, KeyCode::Enter);
        assert!(form.is_editing());
        let a = send(&mut form, &mut state, KeyCode::Char('A'));
        assert_eq!(a, Some(Action::Change(ChangeEvent::new(FULL_NAME, "A"))));
        send(&mut form, &mut state, KeyCode::Char('d'));
        send(&mut form, &mut state, KeyCode::Char('a'));
        send(&mut form, &mut state, KeyCode::Enter);

        assert!(!form.is_editing());
        assert_eq!(state.form.values().text(FULL_NAME), "Ada");
    }

    #[test]
    fn select_cycles_and_reveals_conditional_fields() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);
        focus(&mut form, &mut state, POSITION);

        send(&mut form, &mut state, KeyCode::Right);
        assert_eq!(state.form.values().text(POSITION), "Developer");
        send(&mut form, &mut state, KeyCode::Right);
        assert_eq!(state.form.values().text(POSITION), "Designer");
        assert!(state.active_fields().iter().any(|f| f.key == PORTFOLIO_URL));

        send(&mut form, &mut state, KeyCode::Left);
        send(&mut form, &mut state, KeyCode::Left);
        assert_eq!(state.form.values().text(POSITION), "");
    }

    #[test]
    fn space_toggles_checkbox_under_cursor() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);
        focus(&mut form, &mut state, ADDITIONAL_SKILLS);

        send(&mut form, &mut state, KeyCode::Char(' '));
        send(&mut form, &mut state, KeyCode::Right);
        send(&mut form, &mut state, KeyCode::Char(' '));
        assert_eq!(
            state.form.values().get(ADDITIONAL_SKILLS),
            Some(&FieldValue::List(vec!["JavaScript".into(), "CSS".into()]))
        );

        send(&mut form, &mut state, KeyCode::Left);
        send(&mut form, &mut state, KeyCode::Char(' '));
        assert_eq!(state.form.values().list(ADDITIONAL_SKILLS), ["CSS".to_string()]);
    }

    #[test]
    fn submit_button_is_last_in_focus_order() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);

        send(&mut form, &mut state, KeyCode::BackTab);
        assert!(form.on_submit_button(&state));
        assert_eq!(send(&mut form, &mut state, KeyCode::Enter), Some(Action::Submit));
    }

    #[test]
    fn ctrl_keys_work_while_editing() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);
        send(&mut form, &mut state, KeyCode::Enter);

        let submit = send_key(
            &mut form,
            &mut state,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
        );
        assert_eq!(submit, Some(Action::Submit));
        assert!(!form.is_editing());

        let quit = send_key(
            &mut form,
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(quit, Some(Action::Quit));
    }

    #[test]
    fn focus_is_clamped_when_fields_disappear() {
        let mut state = State::new();
        let mut form = ApplicationForm::new(72);
        state.form.on_field_change(POSITION, "Designer").unwrap();
        send(&mut form, &mut state, KeyCode::BackTab);
        let last = form.focused;

        state.form.on_field_change(POSITION, "").unwrap();
        form.clamp_focus(&state);
        assert!(form.focused < last);
        assert!(form.on_submit_button(&state));
    }

    #[test]
    fn draw_renders_labels_and_errors() {
        let mut state = State::new();
        state.form.on_submit_attempt();
        let mut form = ApplicationForm::new(72);

        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                form.draw(f, area, &state).unwrap();
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(screen.contains("Job Application Form"));
        assert!(screen.contains("Fields marked * are required."));
        assert!(screen.contains("Full Name *"));
        assert!(screen.contains("Full Name is required"));
        assert!(screen.contains("[ Submit ]"));
    }
}
