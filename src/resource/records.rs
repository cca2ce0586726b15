use std::ops::Deref;

use serde::Serialize;

use crate::record::RecordType;
use crate::rest::Rest;
use crate::uri_template::Variables;
use crate::{ApiResponse, ClientError};

use super::Collection;

/// Narrows down a record listing. Unset fields aren't sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub rows: Option<u32>,
    pub page: Option<u32>,
    pub type_: Option<RecordType>,
    pub record_name: Option<String>,
}

impl RecordFilter {
    fn variables(&self) -> Variables {
        Variables::new()
            .add_if_some("rows", self.rows)
            .add_if_some("page", self.page)
            .add_if_some("type", self.type_)
            .add_if_some("recordName", self.record_name.as_deref())
    }
}

/// The records of one managed domain or one template.
pub struct Records<'a> {
    collection: Collection<'a>,
}

impl<'a> Records<'a> {
    pub(crate) fn for_domain(rest: &'a Rest, domain_id: i64) -> Self {
        Self {
            collection: Collection::new(rest, format!("/dns/managed/{domain_id}/records")),
        }
    }

    pub(crate) fn for_template(rest: &'a Rest, template_id: i64) -> Self {
        Self {
            collection: Collection::new(rest, format!("/dns/template/{template_id}/records")),
        }
    }

    /// Lists the records matching `filter`.
    pub fn list_filtered(&self, filter: &RecordFilter) -> Result<ApiResponse, ClientError> {
        self.rest().get(
            &format!("{}{{?rows,page,type,recordName}}", self.path()),
            &filter.variables(),
        )
    }

    /// Creates several records at once.
    pub fn add_multiple<T: Serialize>(&self, records: &[T]) -> Result<ApiResponse, ClientError> {
        self.rest()
            .post(&format!("{}/createMulti", self.path()), records)
    }

    /// Updates several records at once. Each record must carry its id.
    pub fn update_multiple<T: Serialize>(
        &self,
        records: &[T],
    ) -> Result<ApiResponse, ClientError> {
        self.rest()
            .put(&format!("{}/updateMulti", self.path()), records)
    }

    /// Deletes several records at once.
    pub fn delete_multiple(&self, ids: &[i64]) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new().add_list("ids", ids);
        self.rest().delete(&format!("{}{{?ids*}}", self.path()), &vars)
    }
}

impl<'a> Deref for Records<'a> {
    type Target = Collection<'a>;

    fn deref(&self) -> &Self::Target {
        &self.collection
    }
}
