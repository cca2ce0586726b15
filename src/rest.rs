//! The REST driver: signs, dispatches, and normalizes every API call.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value as JsonValue;
use url::Url;

use crate::auth::AuthHeaders;
use crate::transport::{HttpRequest, HttpTransport, Transport};
use crate::uri_template::{self, Variables};
use crate::{ApiResponse, ClientError, Configuration};

/// Log target for the full request and response dumps made in debug mode.
pub const DEBUG_TARGET: &str = "dnsmadeeasy::debug";

pub struct Rest {
    config: Configuration,
    transport: Box<dyn Transport>,
}

impl Rest {
    /// Creates a driver that talks HTTP, honouring the configured timeout.
    pub fn new(config: Configuration) -> Result<Self, ClientError> {
        let transport = match config.timeout() {
            Some(timeout) => HttpTransport::with_timeout(timeout)?,
            None => HttpTransport::new(),
        };
        Ok(Self::with_transport(config, transport))
    }

    /// Creates a driver that sends its requests through `transport`.
    pub fn with_transport<T: Transport + 'static>(config: Configuration, transport: T) -> Self {
        Self {
            config,
            transport: Box::new(transport),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub(crate) fn configuration_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn get(&self, path: &str, vars: &Variables) -> Result<ApiResponse, ClientError> {
        self.send(Method::GET, path, vars, None)
    }

    pub fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ClientError> {
        self.send(
            Method::POST,
            path,
            &Variables::new(),
            Some(serde_json::to_value(body)?),
        )
    }

    pub fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiResponse, ClientError> {
        self.send(
            Method::PUT,
            path,
            &Variables::new(),
            Some(serde_json::to_value(body)?),
        )
    }

    pub fn delete(&self, path: &str, vars: &Variables) -> Result<ApiResponse, ClientError> {
        self.send(Method::DELETE, path, vars, None)
    }

    /// Builds the full URL for `path` expanded with `vars`.
    pub fn url(&self, path: &str, vars: &Variables) -> Result<Url, ClientError> {
        let path = uri_template::expand(path, vars)?;
        let separator = if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        };
        Ok(format!("{}{separator}{path}", self.config.url()).parse()?)
    }

    /// Signs and sends a request, returning whatever the API answered.
    ///
    /// # Errors
    /// - `Config` if the credentials are empty. Nothing is sent in that case.
    /// - `Template` or `UrlParse` if `path` doesn't expand to a valid URL.
    /// - `Transport` if no response was received.
    ///
    /// Error statuses are not errors here; see [ApiResponse::error_for_status].
    pub fn send(
        &self,
        method: Method,
        path: &str,
        vars: &Variables,
        body: Option<JsonValue>,
    ) -> Result<ApiResponse, ClientError> {
        let auth = AuthHeaders::now(&self.config)?;
        let url = self.url(path, vars)?;

        let mut headers = auth.to_vec();
        headers.push(("content-type".to_string(), "application/json".to_string()));

        let request = HttpRequest {
            method,
            url,
            headers,
            body,
        };

        log::debug!("{} {}", request.method, request.url);
        if self.config.debug() {
            log::info!(
                target: DEBUG_TARGET,
                "request: {} {}\nheaders: {:?}\nbody: {}",
                request.method,
                request.url,
                request.headers,
                request
                    .body
                    .as_ref()
                    .map_or_else(String::new, JsonValue::to_string),
            );
        }

        let (method, url) = (request.method.clone(), request.url.clone());
        let resp = self.transport.execute(request).inspect_err(|e| {
            log::error!("{method} {url} failed: {e}");
        })?;

        log::debug!("{method} {url} -> {}", resp.status);
        if self.config.debug() {
            log::info!(
                target: DEBUG_TARGET,
                "response: {}\nbody: {}",
                resp.status,
                resp.body,
            );
        }

        let resp = ApiResponse::from_http(resp);
        if !resp.success() {
            log::warn!("{method} {url} returned {}", resp.status());
        }

        Ok(resp)
    }
}
