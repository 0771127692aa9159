use serde::{Deserialize, Serialize};

/// Displayed session state
///
/// Holds the bearer token of the current login (at most one, replaced on every
/// successful login) together with what the page shows for it: the
/// logged-in panel, the token and profile blocks and the session modal.
/// Being logged in is derived from the presence of the token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionView {
    token: Option<String>,
    profile: Option<String>,
    panel_visible: bool,
    modal_open: bool,
}

impl SessionView {
    /// Show the logged-in panel
    pub fn show_logged_in(&mut self) {
        self.panel_visible = true;
    }

    /// Hide the logged-in panel and drop the token and profile it displayed
    pub fn show_logged_out(&mut self) {
        self.token = None;
        self.profile = None;
        self.panel_visible = false;
    }

    /// Store a new token, replacing any previous one
    ///
    /// An empty token is no token.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into()).filter(|t| !t.is_empty());
    }

    /// Replace the displayed profile, `None` clears it
    pub fn set_profile(&mut self, profile: Option<String>) {
        self.profile = profile;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }
}
