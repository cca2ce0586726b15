use crate::rest::Rest;
use crate::uri_template::Variables;
use crate::{ApiResponse, ClientError};

pub const USAGE_PATH: &str = "/usageApi/queriesApi";

/// Query usage statistics.
pub struct Usage<'a> {
    rest: &'a Rest,
}

impl<'a> Usage<'a> {
    pub(crate) fn new(rest: &'a Rest) -> Self {
        Self { rest }
    }

    /// Usage summed per month, for every month.
    pub fn all(&self) -> Result<ApiResponse, ClientError> {
        self.rest.get(&format!("{USAGE_PATH}/"), &Variables::new())
    }

    /// Usage for one month, per domain.
    pub fn month(&self, year: i32, month: u32) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new().add("year", year).add("month", month);
        self.rest
            .get(&format!("{USAGE_PATH}{{/year,month}}"), &vars)
    }

    /// Usage for one managed domain in one month.
    pub fn domain(
        &self,
        year: i32,
        month: u32,
        domain_id: i64,
    ) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new()
            .add("year", year)
            .add("month", month)
            .add("domainId", domain_id);
        self.rest.get(
            &format!("{USAGE_PATH}{{/year,month}}/managed{{/domainId}}"),
            &vars,
        )
    }
}
