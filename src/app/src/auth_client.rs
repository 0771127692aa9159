//! Requests against the authentication API
//!
//! Each operation is a single round-trip without retries. The answer comes
//! back as the matching `*Response` event; non-success statuses are already
//! turned into an [`AuthFailure`](crate::types::AuthFailure) carrying the
//! message to show.

use crux_core::Command;
use crux_http::HttpError;

use crate::events::{AuthEvent, Event};
use crate::http_helpers::{build_url, process_json_response};
use crate::types::{LoginRequest, RegistrationPayload};
use crate::{Effect, HttpCmd};

pub const REGISTER_ENDPOINT: &str = "/api/v1/auth/register-json";
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const PROFILE_ENDPOINT: &str = "/api/v1/auth/me";

pub const REGISTER_FALLBACK: &str = "Error de registro";
pub const LOGIN_FALLBACK: &str = "Credenciales inválidas";
pub const PROFILE_FALLBACK: &str = "Token inválido o expirado";

/// `POST /api/v1/auth/register-json`, answered with `RegisterResponse`
pub fn register(payload: &RegistrationPayload) -> Result<Command<Effect, Event>, HttpError> {
    log::debug!("registering {}", payload.email);

    let builder = HttpCmd::post(build_url(REGISTER_ENDPOINT))
        .header("Content-Type", "application/json")
        .body_json(payload)?;

    Ok(builder.build().then_send(|result| {
        Event::Auth(AuthEvent::RegisterResponse(process_json_response(
            "Register",
            REGISTER_FALLBACK,
            result,
        )))
    }))
}

/// `POST /api/v1/auth/login`, answered with `LoginResponse`
pub fn login(request: &LoginRequest) -> Result<Command<Effect, Event>, HttpError> {
    log::debug!("logging in {}", request.email);

    let builder = HttpCmd::post(build_url(LOGIN_ENDPOINT))
        .header("Content-Type", "application/json")
        .body_json(request)?;

    Ok(builder.build().then_send(|result| {
        Event::Auth(AuthEvent::LoginResponse(process_json_response(
            "Login",
            LOGIN_FALLBACK,
            result,
        )))
    }))
}

/// `GET /api/v1/auth/me` with the bearer token, answered with `ProfileResponse`
///
/// Callers make sure a token is held before asking for the profile.
pub fn fetch_profile(token: &str) -> Command<Effect, Event> {
    HttpCmd::get(build_url(PROFILE_ENDPOINT))
        .header("Authorization", format!("Bearer {token}"))
        .build()
        .then_send(|result| {
            Event::Auth(AuthEvent::ProfileResponse(process_json_response(
                "Profile",
                PROFILE_FALLBACK,
                result,
            )))
        })
}

/// Logging out is local: the API keeps no session to end.
pub fn logout() -> Command<Effect, Event> {
    Command::done()
}
