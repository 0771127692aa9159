use crux_core::Command;

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::password_policy;
use crate::update_field;
use crate::Effect;

/// Handle registration form input - live password policy feedback
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::RegistrationInput {
            first_name,
            last_name,
            password,
        } => {
            let issues = password_policy::evaluate(&password, first_name.trim(), last_name.trim());
            update_field!(model.password_issues, issues)
        }
    }
}
