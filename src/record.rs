//! Type-safe DNS record.

use serde::{Deserialize, Serialize};
use strum_macros::{EnumString, IntoStaticStr};

/// Possible types a DNS record can have.
#[derive(
    Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, IntoStaticStr, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RecordType {
    A,
    Aaaa,
    Aname,
    Cname,
    Httpred,
    Mx,
    Ns,
    Ptr,
    Srv,
    Txt,
    Spf,
    Soa,
    Caa,
}

impl RecordType {
    /// Gets the string representation of the type.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DNS record in a managed domain, or a template.
///
/// `id` is absent on records that haven't been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: RecordType,
    pub value: String,
    #[serde(deserialize_with = "deserialize_to_i64")]
    pub ttl: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtd_location: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub mx_level: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_id: Option<i64>,
}

impl Record {
    /// Creates a record that can be sent to the API to be added.
    pub fn new(name: &str, type_: RecordType, value: &str, ttl: i64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            type_,
            value: value.to_string(),
            ttl,
            gtd_location: Some("DEFAULT".to_string()),
            mx_level: None,
            priority: None,
            weight: None,
            port: None,
            source_id: None,
        }
    }

    /// Sets the MX preference, required for `MX` records.
    pub fn mx_level(mut self, level: i64) -> Self {
        self.mx_level = Some(level);
        self
    }

    /// Sets priority, weight and port, required for `SRV` records.
    pub fn srv(mut self, priority: i64, weight: i64, port: i64) -> Self {
        self.priority = Some(priority);
        self.weight = Some(weight);
        self.port = Some(port);
        self
    }
}

/// Helper type for deserializing a string or an i64 to an i64.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrI64 {
    I64(i64),
    String(String),
}

pub(crate) fn deserialize_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = StringOrI64::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        StringOrI64::I64(i) => i,
        StringOrI64::String(s) => s.parse().map_err(D::Error::custom)?,
    })
}

pub(crate) fn deserialize_to_option_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let string_or_i64 = Option::<StringOrI64>::deserialize(deserializer)?;
    Ok(match string_or_i64 {
        Some(StringOrI64::I64(i)) => Some(i),
        Some(StringOrI64::String(s)) => Some(s.parse().map_err(D::Error::custom)?),
        None => None,
    })
}
