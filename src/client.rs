use std::time::Duration;

use url::Url;

use crate::config::DEFAULT_VERSION;
use crate::resource::{Collection, Domains, Failover, Records, Usage};
use crate::rest::Rest;
use crate::transport::Transport;
use crate::{ClientError, ConfigError, Configuration};

/// Builder for a [Client] that handles default values.
#[derive(Default)]
pub struct ClientBuilder {
    endpoint: Option<Url>,
    api_key: Option<String>,
    secret_key: Option<String>,
    sandbox: bool,
    debug: bool,
    version: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Box<dyn Transport>>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the API root to the one given, instead of the production or
    /// sandbox one. The version is still appended to it.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API root to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the API key to the one given.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sets the secret key to the one given.
    pub fn secret_key(mut self, secret_key: &str) -> Self {
        self.secret_key = Some(secret_key.to_string());
        self
    }

    /// Sets whether to talk to the sandbox. Defaults to false.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sets whether full requests and responses are logged. Defaults to false.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the API version. Defaults to `V2.0`.
    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    /// Sets how long a request may take before it's abandoned.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sends requests through `transport` instead of over HTTP.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// # Errors
    /// - `Config` with `MissingField` if a credential wasn't added to the builder.
    /// - `Transport` if the HTTP client can't be set up.
    pub fn build(self) -> Result<Client, ClientError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ConfigError::MissingField("api_key".to_string()))?;
        let secret_key = self
            .secret_key
            .ok_or_else(|| ConfigError::MissingField("secret_key".to_string()))?;

        let mut config = Configuration::new(&api_key, &secret_key, self.sandbox)
            .with_version(self.version.as_deref().unwrap_or(DEFAULT_VERSION))
            .with_endpoint(self.endpoint)
            .with_timeout(self.timeout);
        config.set_debug(self.debug);

        let rest = match self.transport {
            Some(transport) => Rest::with_transport(config, transport),
            None => Rest::new(config)?,
        };

        Ok(Client { rest })
    }
}

/// API client.
///
/// Hands out a manager per resource; every manager borrows the same driver.
pub struct Client {
    rest: Rest,
}

impl Client {
    /// Creates a new Client that talks HTTP.
    pub fn new(config: Configuration) -> Result<Self, ClientError> {
        Ok(Self {
            rest: Rest::new(config)?,
        })
    }

    /// Creates a Client from `DNSMADEEASY_API_KEY`, `DNSMADEEASY_SECRET_KEY`
    /// and the optional `DNSMADEEASY_SANDBOX`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(Configuration::from_env()?)
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The driver, for endpoints that no manager covers.
    pub fn rest(&self) -> &Rest {
        &self.rest
    }

    pub fn configuration(&self) -> &Configuration {
        self.rest.configuration()
    }

    /// Switches between the sandbox and production.
    pub fn use_sandbox(&mut self, value: bool) {
        self.rest.configuration_mut().use_sandbox(value);
    }

    /// Switches logging of full requests and responses on or off.
    pub fn debug(&mut self, value: bool) {
        self.rest.configuration_mut().set_debug(value);
    }

    pub fn domains(&self) -> Domains<'_> {
        Domains::new(&self.rest)
    }

    pub fn records(&self, domain_id: i64) -> Records<'_> {
        Records::for_domain(&self.rest, domain_id)
    }

    pub fn soa_records(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/soa")
    }

    pub fn vanity_dns(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/vanity")
    }

    pub fn templates(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/template")
    }

    pub fn template_records(&self, template_id: i64) -> Records<'_> {
        Records::for_template(&self.rest, template_id)
    }

    pub fn transfer_acl(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/transferAcl")
    }

    pub fn folders(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/security/folder")
    }

    pub fn usage(&self) -> Usage<'_> {
        Usage::new(&self.rest)
    }

    pub fn failover(&self) -> Failover<'_> {
        Failover::new(&self.rest)
    }

    pub fn secondary(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/secondary")
    }

    pub fn secondary_ip_sets(&self) -> Collection<'_> {
        Collection::new(&self.rest, "/dns/secondary/ipSet")
    }
}
