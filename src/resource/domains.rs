use std::ops::Deref;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::rest::Rest;
use crate::uri_template::Variables;
use crate::{ApiResponse, ClientError, Payload};

use super::Collection;

pub const DOMAINS_PATH: &str = "/dns/managed";

/// Managed domains.
pub struct Domains<'a> {
    collection: Collection<'a>,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(rest: &'a Rest) -> Self {
        Self {
            collection: Collection::new(rest, DOMAINS_PATH),
        }
    }

    /// Looks a domain up by its name rather than its id.
    pub fn get_by_name(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new().add("domainname", name);
        self.rest()
            .get(&format!("{DOMAINS_PATH}/name{{?domainname}}"), &vars)
    }

    /// Creates a domain with nothing but a name.
    pub fn add_by_name(&self, name: &str) -> Result<ApiResponse, ClientError> {
        self.add(&Payload::new().add("name", name))
    }

    /// Creates several domains at once.
    pub fn add_multiple(&self, names: &[&str]) -> Result<ApiResponse, ClientError> {
        self.add(&Payload::new().add("names", names.to_vec()))
    }

    /// Applies the same settings to several domains.
    ///
    /// `settings` must serialize to a JSON object; the ids are added to it.
    pub fn update_multiple<T: Serialize + ?Sized>(
        &self,
        ids: &[i64],
        settings: &T,
    ) -> Result<ApiResponse, ClientError> {
        let body = Payload::from_serialize(settings)?.add("ids", ids.to_vec());
        self.rest().put(DOMAINS_PATH, &JsonValue::from(body))
    }

    /// Deletes several domains at once.
    pub fn delete_multiple(&self, ids: &[i64]) -> Result<ApiResponse, ClientError> {
        self.rest().send(
            Method::DELETE,
            DOMAINS_PATH,
            &Variables::new(),
            Some(JsonValue::from(ids.to_vec())),
        )
    }
}

impl<'a> Deref for Domains<'a> {
    type Target = Collection<'a>;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
