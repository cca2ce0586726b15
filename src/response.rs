use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::transport::HttpResponse;
use crate::{ApiError, ClientError};

/// The normalized result of one API call.
///
/// Error statuses are still responses: `success` is false and the parsed
/// error body stays available. Use [ApiResponse::error_for_status] to turn
/// them into an [ApiError].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    success: bool,
    status: StatusCode,
    body: Option<JsonValue>,
    raw_body: String,
}

impl ApiResponse {
    pub(crate) fn from_http(resp: HttpResponse) -> Self {
        let body = if resp.body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&resp.body).ok()
        };

        Self {
            success: resp.status.as_u16() < 400,
            status: resp.status,
            body,
            raw_body: resp.body,
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The body parsed as JSON, if it was JSON.
    pub fn body(&self) -> Option<&JsonValue> {
        self.body.as_ref()
    }

    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    /// - `Json` if the body isn't JSON or doesn't fit `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        match &self.body {
            Some(body) => Ok(serde::Deserialize::deserialize(body)?),
            None => Ok(serde_json::from_str(&self.raw_body)?),
        }
    }

    /// Returns the `id` field of the body, as returned when creating things.
    pub fn id(&self) -> Option<i64> {
        match self.body.as_ref()?.get("id")? {
            JsonValue::Number(n) => n.as_i64(),
            JsonValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Returns the response unchanged if it was successful.
    ///
    /// # Errors
    /// - An [ApiError] carrying the status and the error body otherwise.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::new(self.status, &self.raw_body, self.body))
        }
    }
}
