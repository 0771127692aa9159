use anyhow::{Context, Result};
use crux_core::Core;
use crux_http::{HttpError, protocol::HttpResult};
use registro_core::{App, Effect, Event, Model, UiEvent};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::commands::{HELP, Input, parse};
use crate::transport::Transport;

/// Hosts the core and executes its effects
pub struct Shell<T> {
    core: Core<App>,
    transport: T,
}

impl<T: Transport> Shell<T> {
    pub fn new(transport: T) -> Self {
        Self {
            core: Core::new(),
            transport,
        }
    }

    /// Process `event` and every effect it leads to, returning the resulting view
    pub fn dispatch(&self, event: Event) -> Result<Model> {
        let mut effects: VecDeque<Effect> = self.core.process_event(event).into();

        while let Some(effect) = effects.pop_front() {
            match effect {
                // the view is printed once the event is fully processed
                Effect::Render(_) => {}
                Effect::Http(mut request) => {
                    let result = match self.transport.send(&request.operation) {
                        Ok(response) => HttpResult::Ok(response),
                        Err(e) => {
                            log::warn!("request failed: {e:#}");
                            HttpResult::Err(HttpError::Io(format!("{e:#}")))
                        }
                    };
                    let next = self
                        .core
                        .resolve(&mut request, result)
                        .context("failed to resolve HTTP effect")?;
                    effects.extend(next);
                }
            }
        }

        Ok(self.core.view())
    }

    /// Read commands from `input` until it ends or `quit` is entered
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        let view = self.dispatch(Event::Initialize)?;
        write_view(&mut output, &view)?;
        writeln!(output, "{HELP}").context("failed to write help")?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let event = match parse(&line) {
                None => continue,
                Some(Input::Quit) => break,
                Some(Input::Help) => {
                    writeln!(output, "{HELP}").context("failed to write help")?;
                    continue;
                }
                Some(Input::Unknown(command)) => {
                    writeln!(output, "unknown command: {command} (try `help`)")
                        .context("failed to write output")?;
                    continue;
                }
                Some(Input::Invalid(message)) => {
                    writeln!(output, "{message}").context("failed to write output")?;
                    continue;
                }
                Some(Input::Event(event)) => event,
            };

            let view = self.dispatch(event)?;
            write_view(&mut output, &view)?;
            self.acknowledge(&view)?;
        }

        Ok(())
    }

    /// Notifications are shown once, like a dismissed alert
    fn acknowledge(&self, view: &Model) -> Result<()> {
        if view.error_message.is_some() {
            self.dispatch(Event::Ui(UiEvent::ClearError))?;
        }
        if view.success_message.is_some() {
            self.dispatch(Event::Ui(UiEvent::ClearSuccess))?;
        }
        Ok(())
    }
}

/// Print the page state: notifications, password issues, session panel and dialog
pub fn write_view(output: &mut impl Write, view: &Model) -> Result<()> {
    let mut text = String::new();

    if let Some(error) = &view.error_message {
        text.push_str(&format!("! {error}\n"));
    }
    if let Some(success) = &view.success_message {
        text.push_str(&format!("* {success}\n"));
    }
    if !view.password_issues.is_empty() {
        text.push_str("password issues:\n");
        for issue in &view.password_issues {
            text.push_str(&format!("  - {issue}\n"));
        }
    }

    let session = &view.session;
    if session.panel_visible() {
        text.push_str(&format!("token: {}\n", session.token().unwrap_or_default()));
        if let Some(profile) = session.profile() {
            text.push_str(&format!("profile:\n{profile}\n"));
        }
    } else {
        text.push_str("not logged in\n");
    }
    if session.modal_open() {
        text.push_str("[session dialog open]\n");
    }

    output
        .write_all(text.as_bytes())
        .context("failed to write view")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use crux_http::protocol::{HttpRequest, HttpResponse};
    use registro_core::{AuthEvent, Credentials, password_policy};
    use serde_json::json;

    fn credentials(password: &str) -> Credentials {
        Credentials {
            first_name: "Ana".to_string(),
            last_name: "Gómez".to_string(),
            email: "ana@example.com".to_string(),
            password: password.to_string(),
        }
    }

    fn login() -> Event {
        Event::Auth(AuthEvent::Login {
            email: "ana@example.com".to_string(),
            password: "Segura!23".to_string(),
        })
    }

    fn token_response(_: &HttpRequest) -> Result<HttpResponse> {
        Ok(HttpResponse::ok()
            .json(json!({"access_token": "abc", "token_type": "bearer"}))
            .build())
    }

    #[test]
    fn weak_password_never_reaches_transport() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);
        let shell = Shell::new(transport);

        let view = shell
            .dispatch(Event::Auth(AuthEvent::Register(credentials("segura"))))
            .unwrap();

        assert!(
            view.password_issues
                .contains(&password_policy::TOO_SHORT.to_string())
        );
    }

    #[test]
    fn registration_is_posted_once() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == "POST" && request.url.ends_with("/api/v1/auth/register-json")
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::status(201)
                    .json(json!({"usuario_id": "u-1"}))
                    .build())
            });
        let shell = Shell::new(transport);

        let view = shell
            .dispatch(Event::Auth(AuthEvent::Register(credentials("Segura!23"))))
            .unwrap();

        assert_eq!(
            view.success_message.as_deref(),
            Some("Registrado. usuario_id: u-1")
        );
        assert!(!view.session.is_logged_in());
    }

    #[test]
    fn login_then_logout() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|request| request.url.ends_with("/api/v1/auth/login"))
            .times(1)
            .returning(token_response);
        let shell = Shell::new(transport);

        let view = shell.dispatch(login()).unwrap();
        assert_eq!(view.session.token(), Some("abc"));
        assert!(view.session.panel_visible());
        assert!(view.session.modal_open());

        let view = shell.dispatch(Event::Auth(AuthEvent::Logout)).unwrap();
        assert!(!view.session.is_logged_in());
        assert!(!view.session.panel_visible());
        assert!(!view.session.modal_open());
    }

    #[test]
    fn text_error_body_is_shown() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(1).returning(|_| {
            Ok(HttpResponse::status(502)
                .body(b"Bad Gateway".to_vec())
                .build())
        });
        let shell = Shell::new(transport);

        let view = shell.dispatch(login()).unwrap();

        assert_eq!(view.error_message.as_deref(), Some("Bad Gateway"));
        assert!(!view.session.is_logged_in());
    }

    #[test]
    fn transport_failure_leaves_form_usable() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        let shell = Shell::new(transport);

        let view = shell.dispatch(login()).unwrap();

        assert!(view.error_message.is_some());
        assert!(!view.is_loading);
        assert!(!view.session.is_logged_in());
    }

    #[test]
    fn unquoted_password_with_space_is_not_sent() {
        let mut transport = MockTransport::new();
        transport.expect_send().times(0);
        let shell = Shell::new(transport);

        let mut output = Vec::new();
        shell
            .run("login ana@example.com Mi Clave!23\n".as_bytes(), &mut output)
            .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("usage: login <email> <password>"));
        assert!(!output.contains("token:"));
    }

    #[test]
    fn session_script() {
        let mut transport = MockTransport::new();
        let mut seq = mockall::Sequence::new();
        transport
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(token_response);
        transport
            .expect_send()
            .withf(|request| {
                request.method == "GET"
                    && request
                        .headers
                        .iter()
                        .any(|h| h.name.eq_ignore_ascii_case("authorization") && h.value == "Bearer abc")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(HttpResponse::ok()
                    .json(json!({"email": "ana@example.com"}))
                    .build())
            });
        let shell = Shell::new(transport);

        let script = "profile\nlogin ana@example.com Segura!23\nprofile\nlogout\nquit\nlogin x y\n";
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("! Primero obtené un token"));
        assert!(output.contains("token: abc"));
        assert!(output.contains("\"email\": \"ana@example.com\""));
        assert!(output.contains("[session dialog open]"));
        assert!(output.ends_with("not logged in\n"));
    }
}
