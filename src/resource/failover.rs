use reqwest::Method;
use serde::Serialize;

use crate::rest::Rest;
use crate::uri_template::Variables;
use crate::{ApiResponse, ClientError};

/// Failover and system monitoring settings, keyed by record id.
pub struct Failover<'a> {
    rest: &'a Rest,
}

impl<'a> Failover<'a> {
    pub(crate) fn new(rest: &'a Rest) -> Self {
        Self { rest }
    }

    pub fn get(&self, record_id: i64) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new().add("recordId", record_id);
        self.rest.get("/monitor/{recordId}", &vars)
    }

    pub fn update<T: Serialize + ?Sized>(
        &self,
        record_id: i64,
        settings: &T,
    ) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new().add("recordId", record_id);
        let body = serde_json::to_value(settings)?;
        self.rest.send(Method::PUT, "/monitor/{recordId}", &vars, Some(body))
    }
}
