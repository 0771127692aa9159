use registro_core::{AuthEvent, Credentials, Event, FormEvent, UiEvent};

const REGISTER_USAGE: &str = "register <first name> <last name> <email> <password>";
const CHECK_USAGE: &str = "check <first name> <last name> <password>";
const LOGIN_USAGE: &str = "login <email> <password>";

pub const HELP: &str = "\
commands:
  register <first name> <last name> <email> <password>
  check <first name> <last name> <password>   validate a password as you type it
  login <email> <password>
  profile                                      show the profile of the current token
  logout
  open | close                                 session dialog
  help
  quit
quote values that contain spaces: register 'María José' Pérez ana@example.com 'Mi Clave!23'";

/// A line typed into the shell
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Event(Event),
    Help,
    Quit,
    Unknown(String),
    /// A known command that could not be read as typed
    Invalid(String),
}

/// Parse one input line, `None` for blank lines
///
/// Arguments are split like a POSIX shell does, so quoted values keep their
/// spaces. Missing arguments are passed on as empty fields so the core reports
/// them like an empty form field. Surplus arguments are rejected rather than
/// dropped.
pub fn parse(line: &str) -> Option<Input> {
    let mut words = match shell_words::split(line) {
        Ok(words) => words.into_iter(),
        Err(e) => return Some(Input::Invalid(format!("cannot read input: {e}"))),
    };
    let command = words.next()?;
    let args: Vec<String> = words.collect();

    let input = match command.as_str() {
        "register" => with_args::<4>(args, REGISTER_USAGE, |[first_name, last_name, email, password]| {
            Event::Auth(AuthEvent::Register(Credentials {
                first_name,
                last_name,
                email,
                password,
            }))
        }),
        "check" => with_args::<3>(args, CHECK_USAGE, |[first_name, last_name, password]| {
            Event::Form(FormEvent::RegistrationInput {
                first_name,
                last_name,
                password,
            })
        }),
        "login" => with_args::<2>(args, LOGIN_USAGE, |[email, password]| {
            Event::Auth(AuthEvent::Login { email, password })
        }),
        "profile" | "me" => with_args::<0>(args, "profile", |[]| Event::Auth(AuthEvent::ViewProfile)),
        "logout" => with_args::<0>(args, "logout", |[]| Event::Auth(AuthEvent::Logout)),
        "open" => with_args::<0>(args, "open", |[]| Event::Ui(UiEvent::OpenModal)),
        "close" => with_args::<0>(args, "close", |[]| Event::Ui(UiEvent::CloseModal)),
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(command),
    };

    Some(input)
}

fn with_args<const N: usize>(
    args: Vec<String>,
    usage: &str,
    event: impl FnOnce([String; N]) -> Event,
) -> Input {
    if args.len() > N {
        return Input::Invalid(format!(
            "expected at most {N} argument(s), got {}; usage: {usage} (quote values that contain spaces)",
            args.len()
        ));
    }

    let mut args = args.into_iter();
    Input::Event(event(std::array::from_fn(|_| {
        args.next().unwrap_or_default()
    })))
}
