//! Resource managers.
//!
//! Almost every resource is a plain collection under one path, so most
//! managers are just a [Collection]. The ones with extra endpoints wrap one
//! and add their own methods.

mod domains;
mod failover;
mod records;
mod usage;

pub use domains::*;
pub use failover::*;
pub use records::*;
pub use usage::*;

use serde::Serialize;

use crate::rest::Rest;
use crate::uri_template::Variables;
use crate::{ApiResponse, ClientError};

/// The list/get/add/update/delete operations on a collection of resources.
#[derive(Clone)]
pub struct Collection<'a> {
    rest: &'a Rest,
    path: String,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(rest: &'a Rest, path: impl Into<String>) -> Self {
        Self {
            rest,
            path: path.into(),
        }
    }

    pub(crate) fn rest(&self) -> &'a Rest {
        self.rest
    }

    /// The path of the collection, relative to the versioned API root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Lists the collection, `rows` per page, starting at `page`.
    ///
    /// Leaving either out uses the API's defaults.
    pub fn list(&self, rows: Option<u32>, page: Option<u32>) -> Result<ApiResponse, ClientError> {
        let vars = Variables::new()
            .add_if_some("rows", rows)
            .add_if_some("page", page);
        self.rest.get(&format!("{}{{?rows,page}}", self.path), &vars)
    }

    pub fn get(&self, id: i64) -> Result<ApiResponse, ClientError> {
        self.rest.get(&self.item_path(id), &Variables::new())
    }

    pub fn add<T: Serialize + ?Sized>(&self, body: &T) -> Result<ApiResponse, ClientError> {
        self.rest.post(&self.path, body)
    }

    pub fn update<T: Serialize + ?Sized>(
        &self,
        id: i64,
        body: &T,
    ) -> Result<ApiResponse, ClientError> {
        self.rest.put(&self.item_path(id), body)
    }

    pub fn delete(&self, id: i64) -> Result<ApiResponse, ClientError> {
        self.rest.delete(&self.item_path(id), &Variables::new())
    }

    fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.path)
    }
}
