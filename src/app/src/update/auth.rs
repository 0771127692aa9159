use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::auth_client;
use crate::events::{AuthEvent, Event};
use crate::handle_response;
use crate::model::Model;
use crate::password_policy;
use crate::types::{LoginRequest, RegistrationPayload};
use crate::Effect;

pub const REGISTER_REQUIRED: &str = "Todos los campos son requeridos";
pub const LOGIN_REQUIRED: &str = "Email y contraseña son requeridos";
pub const TOKEN_REQUIRED: &str = "Primero obtené un token";

/// Handle authentication-related events
pub fn handle(event: AuthEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        AuthEvent::Register(credentials) => {
            let credentials = credentials.trimmed();
            if credentials.validate().is_err() {
                return model.set_error_and_render(REGISTER_REQUIRED);
            }

            // nothing is sent until the password complies
            model.password_issues = password_policy::evaluate(
                &credentials.password,
                &credentials.first_name,
                &credentials.last_name,
            );
            if !model.password_issues.is_empty() {
                log::debug!(
                    "registration blocked by {} password issue(s)",
                    model.password_issues.len()
                );
                return render();
            }

            match auth_client::register(&RegistrationPayload::from(credentials)) {
                Ok(request) => {
                    model.start_loading();
                    Command::all([render(), request])
                }
                Err(e) => model.set_error_and_render(format!("Failed to create Register request: {e}")),
            }
        }

        AuthEvent::RegisterResponse(result) => handle_response!(model, result, {
            on_success: |model, registered| {
                model.success_message =
                    Some(format!("Registrado. usuario_id: {}", registered.user_id_label()));
                // registering does not log the user in
                model.session.show_logged_out();
            },
        }),

        AuthEvent::Login { email, password } => {
            let request = LoginRequest {
                email: email.trim().to_string(),
                password,
            };
            if request.validate().is_err() {
                return model.set_error_and_render(LOGIN_REQUIRED);
            }

            match auth_client::login(&request) {
                Ok(command) => {
                    model.start_loading();
                    Command::all([render(), command])
                }
                Err(e) => model.set_error_and_render(format!("Failed to create Login request: {e}")),
            }
        }

        AuthEvent::LoginResponse(result) => handle_response!(model, result, {
            on_success: |model, token| {
                model.session.set_token(token.access_token);
                model.session.set_profile(None);
                model.session.show_logged_in();
                model.session.open_modal();
            },
        }),

        AuthEvent::ViewProfile => {
            let Some(token) = model.session.token().map(str::to_owned) else {
                return model.set_error_and_render(TOKEN_REQUIRED);
            };

            model.start_loading();
            Command::all([render(), auth_client::fetch_profile(&token)])
        }

        AuthEvent::ProfileResponse(result) => handle_response!(model, result, {
            on_success: |model, profile| {
                model.session.set_profile(Some(profile.pretty()));
            },
        }),

        AuthEvent::Logout => {
            model.session.show_logged_out();
            model.session.close_modal();
            Command::all([auth_client::logout(), render()])
        }
    }
}
