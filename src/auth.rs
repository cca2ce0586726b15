//! Request authentication.
//!
//! Every request carries the API key, the time it was made, and an
//! HMAC-SHA1 of that time keyed by the secret key.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::{ConfigError, Configuration};

type HmacSha1 = Hmac<Sha1>;

pub const API_KEY_HEADER: &str = "x-dnsme-apiKey";
pub const REQUEST_DATE_HEADER: &str = "x-dnsme-requestDate";
pub const HMAC_HEADER: &str = "x-dnsme-hmac";

/// Formats `time` the way the API expects the request date, e.g.
/// `Sat, 12 Feb 2011 20:59:04 GMT`.
pub fn request_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Computes the hex-encoded HMAC-SHA1 of `request_date` keyed by `secret_key`.
pub fn sign(secret_key: &str, request_date: &str) -> Result<String, ConfigError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| ConfigError::InvalidSecretKey(e.to_string()))?;
    mac.update(request_date.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// The three authentication headers for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    api_key: String,
    request_date: String,
    hmac: String,
}

impl AuthHeaders {
    /// Builds the headers for a request made at `time`.
    ///
    /// # Errors
    /// - `EmptyApiKey` or `EmptySecretKey` if a credential is empty. This is
    ///   checked before anything is signed.
    pub fn new(config: &Configuration, time: DateTime<Utc>) -> Result<Self, ConfigError> {
        if config.api_key().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if config.secret_key().is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }

        let request_date = request_date(time);
        let hmac = sign(config.secret_key(), &request_date)?;

        Ok(Self {
            api_key: config.api_key().to_string(),
            request_date,
            hmac,
        })
    }

    /// Builds the headers for a request made right now.
    pub fn now(config: &Configuration) -> Result<Self, ConfigError> {
        Self::new(config, Utc::now())
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn request_date(&self) -> &str {
        &self.request_date
    }

    pub fn hmac(&self) -> &str {
        &self.hmac
    }

    /// Returns the headers as name-value pairs.
    pub fn to_vec(&self) -> Vec<(String, String)> {
        vec![
            (API_KEY_HEADER.to_string(), self.api_key.clone()),
            (REQUEST_DATE_HEADER.to_string(), self.request_date.clone()),
            (HMAC_HEADER.to_string(), self.hmac.clone()),
        ]
    }
}
