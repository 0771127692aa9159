use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

/// Registration form input as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    #[validate(min_length = 1)]
    pub first_name: String,
    #[validate(min_length = 1)]
    pub last_name: String,
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

impl Credentials {
    /// Trim names and email; the password is kept exactly as typed.
    pub fn trimmed(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// Body of `POST /api/v1/auth/register-json`
///
/// Accounts created from this form are always plain requesters without a
/// phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationPayload {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: Option<String>,
    pub password: String,
    #[serde(rename = "es_profesional")]
    pub is_professional: bool,
    #[serde(rename = "es_solicitante")]
    pub is_requester: bool,
}

impl From<Credentials> for RegistrationPayload {
    fn from(credentials: Credentials) -> Self {
        Self {
            first_name: credentials.first_name,
            last_name: credentials.last_name,
            email: credentials.email,
            phone: None,
            password: credentials.password,
            is_professional: false,
            is_requester: true,
        }
    }
}

/// Body of `POST /api/v1/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LoginRequest {
    #[validate(min_length = 1)]
    pub email: String,
    #[validate(min_length = 1)]
    pub password: String,
}

/// Successful login answer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Successful registration answer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub usuario_id: Option<Value>,
}

impl RegisterResponse {
    /// Identifier as shown to the user, `desconocido` when the API sent none
    pub fn user_id_label(&self) -> String {
        match &self.usuario_id {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(Value::Number(id)) if id.as_f64().is_some_and(|n| n != 0.0) => id.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
            _ => "desconocido".to_string(),
        }
    }
}

/// Profile returned by `GET /api/v1/auth/me`, opaque beyond display
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProfileRecord(pub Value);

impl ProfileRecord {
    /// Two-space indented JSON, keeping the key order of the API
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}
