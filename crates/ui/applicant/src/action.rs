use form::ChangeEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Render,
    Resize(u16, u16),
    Quit,
    Error(String),
    /// A widget edited a field; carries the complete new value.
    Change(ChangeEvent),
    Submit,
    CloseConfirmation,
}
