//! Driver configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::ConfigError;

pub const PRODUCTION_URL: &str = "https://api.dnsmadeeasy.com/";
pub const SANDBOX_URL: &str = "https://api.sandbox.dnsmadeeasy.com/";
pub const DEFAULT_VERSION: &str = "V2.0";

pub const ENV_API_KEY: &str = "DNSMADEEASY_API_KEY";
pub const ENV_SECRET_KEY: &str = "DNSMADEEASY_SECRET_KEY";
pub const ENV_SANDBOX: &str = "DNSMADEEASY_SANDBOX";

/// Credentials and endpoint selection for the REST driver.
///
/// Everything except the sandbox and debug toggles is fixed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    api_key: String,
    secret_key: String,
    use_sandbox: bool,
    debug: bool,
    version: String,
    endpoint: Option<Url>,
    timeout: Option<Duration>,
}

impl Configuration {
    /// Creates a configuration for the given credentials.
    ///
    /// Empty credentials are accepted here and rejected when a request is
    /// signed.
    pub fn new(api_key: &str, secret_key: &str, use_sandbox: bool) -> Self {
        Self {
            api_key: api_key.to_string(),
            secret_key: secret_key.to_string(),
            use_sandbox,
            debug: false,
            version: DEFAULT_VERSION.to_string(),
            endpoint: None,
            timeout: None,
        }
    }

    /// Reads the credentials from `DNSMADEEASY_API_KEY` and
    /// `DNSMADEEASY_SECRET_KEY`, and the sandbox flag from the optional
    /// `DNSMADEEASY_SANDBOX`.
    ///
    /// # Errors
    /// - `MissingField` if either credential variable is unset.
    /// - `InvalidEnvVar` if the sandbox flag isn't a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [Configuration::from_env], with the variables read through
    /// `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key =
            lookup(ENV_API_KEY).ok_or_else(|| ConfigError::MissingField(ENV_API_KEY.to_string()))?;
        let secret_key = lookup(ENV_SECRET_KEY)
            .ok_or_else(|| ConfigError::MissingField(ENV_SECRET_KEY.to_string()))?;
        let use_sandbox = match lookup(ENV_SANDBOX) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidEnvVar {
                name: ENV_SANDBOX.to_string(),
                value,
            })?,
            None => false,
        };

        Ok(Self::new(&api_key, &secret_key, use_sandbox))
    }

    pub(crate) fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub(crate) fn with_endpoint(mut self, endpoint: Option<Url>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub(crate) fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the base URL requests are made against, version included.
    ///
    /// An explicit endpoint takes precedence over the sandbox flag.
    pub fn url(&self) -> String {
        let root = match &self.endpoint {
            Some(endpoint) => endpoint.as_str(),
            None if self.use_sandbox => SANDBOX_URL,
            None => PRODUCTION_URL,
        };
        format!("{}/{}", root.trim_end_matches('/'), self.version)
    }

    pub fn use_sandbox(&mut self, value: bool) {
        self.use_sandbox = value;
    }

    pub fn using_sandbox(&self) -> bool {
        self.use_sandbox
    }

    pub fn set_debug(&mut self, value: bool) {
        self.debug = value;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
