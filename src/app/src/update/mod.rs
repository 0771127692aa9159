mod auth;
mod form;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

pub use auth::{LOGIN_REQUIRED, REGISTER_REQUIRED, TOKEN_REQUIRED};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => render(),
        Event::Auth(event) => auth::handle(event, model),
        Event::Form(event) => form::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
