use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Problems with the client configuration, detected before anything is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("the API key is empty")]
    EmptyApiKey,
    #[error("the secret key is empty")]
    EmptySecretKey,
    #[error("the secret key can't be used for signing: {0}")]
    InvalidSecretKey(String),
    #[error("invalid value {value:?} for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}

/// Failure to get any HTTP response at all.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error("transport failure: {0}")]
    Other(String),
}

/// Errors in a URI template.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("{template:?}: unclosed expression starting at {position}")]
    Unclosed { template: String, position: usize },
    #[error("{template:?}: empty expression at {position}")]
    EmptyExpression { template: String, position: usize },
    #[error("{template:?}: invalid variable name {name:?}")]
    InvalidVariable { template: String, name: String },
}

/// An error response from the DNS Made Easy API.
#[derive(Error, Debug)]
#[error("DNS Made Easy API error: {status} - {}", .messages.join("; "))]
pub struct ApiError {
    status: StatusCode,
    messages: Vec<String>,
    body: Option<JsonValue>,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, raw_body: &str, body: Option<JsonValue>) -> Self {
        // Errors come back as `{"error": ["..."]}`.
        #[derive(Deserialize)]
        struct ErrorResp {
            error: Vec<String>,
        }

        let messages = body
            .as_ref()
            .and_then(|b| ErrorResp::deserialize(b).ok())
            .map(|r| r.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| {
                if raw_body.is_empty() {
                    vec![status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()]
                } else {
                    vec![raw_body.to_string()]
                }
            });

        Self {
            status,
            messages,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The error messages the API returned, or the raw body if it had none.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// The parsed error body, if it was JSON.
    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    DnsMadeEasy(#[from] ApiError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
