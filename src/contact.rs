use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
/// Set at build time; without it the form refuses to submit.
pub const ACCESS_KEY: Option<&str> = option_env!("WEB3FORMS_ACCESS_KEY");

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("contact form is not configured")]
    NotConfigured,
    #[error("couldn't reach the form service: {0}")]
    Network(String),
    #[error("form service rejected the message: {0}")]
    Rejected(String),
}

impl ContactMessage {
    /// Presence checks only; the form service does the rest.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Debug, Serialize)]
struct Submission<'a> {
    access_key: &'a str,
    #[serde(flatten)]
    message: &'a ContactMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl SubmitResponse {
    pub fn into_result(self) -> Result<(), ContactError> {
        if self.success {
            Ok(())
        } else if self.message.is_empty() {
            Err(ContactError::Rejected("form submission failed".to_string()))
        } else {
            Err(ContactError::Rejected(self.message))
        }
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn submission<'a>(access_key: &'a str, message: &'a ContactMessage) -> Submission<'a> {
    Submission {
        access_key,
        message,
    }
}

#[cfg(feature = "hydrate")]
pub async fn submit(message: &ContactMessage) -> Result<(), ContactError> {
    use gloo_net::http::Request;

    message.validate()?;
    let access_key = ACCESS_KEY.ok_or(ContactError::NotConfigured)?;

    let response = Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .json(&submission(access_key, message))
        .map_err(|e| ContactError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;

    let body = response
        .json::<SubmitResponse>()
        .await
        .map_err(|e| ContactError::Network(e.to_string()))?;
    body.into_result()
}
