use serde::{Deserialize, Serialize};

use crate::types::*;

/// Authentication events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Register(Credentials),
    Login {
        email: String,
        password: String,
    },
    ViewProfile,
    Logout,

    // HTTP responses (internal events, skipped from serialization)
    #[serde(skip)]
    RegisterResponse(Result<RegisterResponse, AuthFailure>),
    #[serde(skip)]
    LoginResponse(Result<AccessToken, AuthFailure>),
    #[serde(skip)]
    ProfileResponse(Result<ProfileRecord, AuthFailure>),
}

/// Registration form input events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Any keystroke in the password, first name or last name field
    RegistrationInput {
        first_name: String,
        last_name: String,
        password: String,
    },
}

/// UI events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    OpenModal,
    /// Close button or overlay click, keeps the session
    CloseModal,
    ClearError,
    ClearSuccess,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Auth(AuthEvent),
    Form(FormEvent),
    Ui(UiEvent),
}
