//! Typed views of the other JSON shapes the API returns.
//!
//! Read them out of an [ApiResponse](crate::ApiResponse) with
//! [json](crate::ApiResponse::json).

use serde::{Deserialize, Serialize};

use crate::record::{deserialize_to_i64, deserialize_to_option_i64};

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub total_pages: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub total_records: Option<i64>,
}

/// A managed domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub gtd_enabled: bool,
    #[serde(default, deserialize_with = "deserialize_to_option_i64")]
    pub pending_action_id: Option<i64>,
}

/// A custom SOA record that domains can be pointed at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaRecord {
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub comp: String,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub ttl: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub serial: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub refresh: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub retry: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub expire: i64,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub negative_cache: i64,
}

/// An AXFR transfer ACL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransferAcl {
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub name: String,
    pub ips: Vec<String>,
}

#[cfg(test)]
mod tests;
