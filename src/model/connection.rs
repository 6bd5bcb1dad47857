use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const STRICT_BIGNUMBER_INTERPRETATION: &str = "STRICT_NUMBER_38_INTERPRETATION";
pub const SUPPORTS_BOOLEAN_DATA_TYPE: &str = "SUPPORTS_BOOLEAN_DATA_TYPE";

/// How the host reaches the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    #[default]
    Native,
    Odbc,
    Oci,
    Plugin,
    Jndi,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessType::Native => "Native",
            AccessType::Odbc => "ODBC",
            AccessType::Oci => "OCI",
            AccessType::Plugin => "Plugin",
            AccessType::Jndi => "JNDI",
        };
        f.write_str(name)
    }
}

impl FromStr for AccessType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" | "jdbc" => Ok(AccessType::Native),
            "odbc" => Ok(AccessType::Odbc),
            "oci" => Ok(AccessType::Oci),
            "plugin" => Ok(AccessType::Plugin),
            "jndi" => Ok(AccessType::Jndi),
            other => Err(format!("Unknown access type: {}", other)),
        }
    }
}

/// Key/value bag persisted with a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// "Y"/"N" flag, case-insensitive, false when absent
    pub fn flag(&self, key: &str) -> bool {
        self.get_or(key, "N").eq_ignore_ascii_case("Y")
    }

    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, if value { "Y" } else { "N" });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy every entry of `other` over this store
    pub fn merge(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }
}

/// Connection configuration owned by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub access: AccessType,

    #[serde(default)]
    pub host: String,

    /// Port as the host stores it; blank or "-1" means unspecified
    #[serde(default)]
    pub port: String,

    #[serde(default)]
    pub database: String,

    #[serde(default)]
    pub attributes: Attributes,
}

impl ConnectionMeta {
    pub fn new(access: AccessType) -> Self {
        Self {
            access,
            ..Self::default()
        }
    }

    pub fn strict_big_number_interpretation(&self) -> bool {
        self.attributes.flag(STRICT_BIGNUMBER_INTERPRETATION)
    }

    pub fn set_strict_big_number_interpretation(&mut self, strict: bool) {
        self.attributes.set_flag(STRICT_BIGNUMBER_INTERPRETATION, strict);
    }

    pub fn supports_boolean_data_type(&self) -> bool {
        self.attributes.flag(SUPPORTS_BOOLEAN_DATA_TYPE)
    }

    pub fn set_supports_boolean_data_type(&mut self, supported: bool) {
        self.attributes.set_flag(SUPPORTS_BOOLEAN_DATA_TYPE, supported);
    }
}
