use color_eyre::Result;
use job_application::Confirmation;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::{
    action::Action,
    components::{
        Component, application_form::ApplicationForm, confirmation::ConfirmationPopup,
    },
    config::Config,
    state::State,
    tui::{Event, EventResponse, Tui},
};

pub struct App {
    pub config: Config,
    pub state: State,
    pub form: ApplicationForm,
    pub popup: Option<ConfirmationPopup>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let form = ApplicationForm::new(config.ui.form_width);
        Self {
            config,
            state: State::new(),
            form,
            popup: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?;
        tui.enter()?;
        action_tx.send(Action::Render)?;

        loop {
            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Render {
                    debug!("{action:?}");
                }
                self.update(action, &mut tui)?;
            }

            if self.should_quit {
                break;
            }

            let Some(e) = tui.next().await else {
                break;
            };

            match e {
                Event::Resize(w, h) => action_tx.send(Action::Resize(w, h))?,
                Event::Error(msg) => action_tx.send(Action::Error(msg))?,
                Event::Key(_) => {
                    // The popup is modal: when open it sees the key first and stops it.
                    let response = match self.popup.as_mut() {
                        Some(popup) => popup.handle_events(&e, &self.state)?,
                        None => self.form.handle_events(&e, &self.state)?,
                    };
                    if let Some(EventResponse::Stop(action)) = response {
                        action_tx.send(action)?;
                    }
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    /// Apply one action to the state; renders on `Render` / `Resize`.
    fn update(&mut self, action: Action, tui: &mut Tui) -> Result<()> {
        match action {
            Action::Render => self.render(tui)?,
            Action::Resize(w, h) => {
                tui.resize(Rect::new(0, 0, w, h))?;
                self.render(tui)?;
            }
            Action::Quit => self.should_quit = true,
            Action::Error(msg) => error!("terminal error: {msg}"),
            Action::Change(event) => {
                if let Err(err) = self.state.form.handle_change(event) {
                    warn!("dropping change: {err}");
                }
                self.render(tui)?;
            }
            Action::Submit => {
                let outcome = self.state.form.on_submit_attempt();
                if self.state.form.show_confirmation() {
                    info!("application accepted");
                    let summary = Confirmation::from_values(self.state.form.values());
                    self.popup = Some(
                        ConfirmationPopup::new(summary).min_width(self.config.ui.confirmation_width),
                    );
                } else {
                    debug!(?outcome, "application rejected");
                }
                self.render(tui)?;
            }
            Action::CloseConfirmation => {
                self.state.form.close_confirmation();
                self.popup = None;
                self.render(tui)?;
            }
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let Self {
            state, form, popup, ..
        } = self;
        tui.draw(|f| {
            let area = f.area();
            if let Err(err) = form.draw(f, area, state) {
                error!("failed to draw form: {err:?}");
            }
            if let Some(popup) = popup.as_mut() {
                if let Err(err) = popup.draw(f, area, state) {
                    error!("failed to draw confirmation: {err:?}");
                }
            }
        })?;
        Ok(())
    }
}
