use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical value type of a column, as the host describes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    None,
    Number,
    String,
    Date,
    Boolean,
    Integer,
    BigNumber,
    Serializable,
    Binary,
    Timestamp,
    InetAddress,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Date => "date",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::BigNumber => "bignumber",
            ValueType::Serializable => "serializable",
            ValueType::Binary => "binary",
            ValueType::Timestamp => "timestamp",
            ValueType::InetAddress => "inetaddress",
        }
    }

    /// Number, Integer and BigNumber share one rendering branch
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Number | ValueType::Integer | ValueType::BigNumber)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(ValueType::None),
            "number" => Ok(ValueType::Number),
            "string" => Ok(ValueType::String),
            "date" => Ok(ValueType::Date),
            "boolean" => Ok(ValueType::Boolean),
            "integer" => Ok(ValueType::Integer),
            "bignumber" => Ok(ValueType::BigNumber),
            "serializable" => Ok(ValueType::Serializable),
            "binary" => Ok(ValueType::Binary),
            "timestamp" => Ok(ValueType::Timestamp),
            "inetaddress" => Ok(ValueType::InetAddress),
            other => Err(format!("Unknown value type: {}", other)),
        }
    }
}

/// Column metadata handed to the rendering rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub value_type: ValueType,
    /// Declared length, <= 0 when unspecified
    pub length: i32,
    /// Declared precision, < 0 when unspecified
    pub precision: i32,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, value_type: ValueType, length: i32, precision: i32) -> Self {
        Self {
            name: name.into(),
            value_type,
            length,
            precision,
        }
    }

    /// Copy of this column under another name
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

/// Key columns of the target table, matched case-insensitively against column names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFields {
    pub technical_key: Option<String>,
    pub primary_key: Option<String>,
    pub use_autoinc: bool,
}

impl KeyFields {
    pub fn is_key(&self, column_name: &str) -> bool {
        let matches = |key: &Option<String>| {
            key.as_deref()
                .is_some_and(|k| k.eq_ignore_ascii_case(column_name))
        };
        matches(&self.technical_key) || matches(&self.primary_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_parse() {
        assert_eq!("BigNumber".parse::<ValueType>().unwrap(), ValueType::BigNumber);
        assert_eq!(" string ".parse::<ValueType>().unwrap(), ValueType::String);
        assert!("varchar".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_numeric_family() {
        assert!(ValueType::Number.is_numeric());
        assert!(ValueType::Integer.is_numeric());
        assert!(ValueType::BigNumber.is_numeric());
        assert!(!ValueType::String.is_numeric());
        assert!(!ValueType::Timestamp.is_numeric());
    }

    #[test]
    fn test_with_name_keeps_type() {
        let column = ColumnDescriptor::new("amount", ValueType::Number, 10, 2);
        let renamed = column.with_name("amount_KTL");
        assert_eq!(renamed.name, "amount_KTL");
        assert_eq!(renamed.value_type, ValueType::Number);
        assert_eq!(renamed.length, 10);
        assert_eq!(renamed.precision, 2);
    }

    #[test]
    fn test_key_fields_case_insensitive() {
        let keys = KeyFields {
            technical_key: Some("ID".to_string()),
            primary_key: None,
            use_autoinc: false,
        };
        assert!(keys.is_key("id"));
        assert!(!keys.is_key("name"));
        assert!(!KeyFields::default().is_key("id"));
    }
}
