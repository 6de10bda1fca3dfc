#![forbid(unsafe_code)]

//! Explicit output-schema descriptors.
//!
//! A document may carry one of these so the receiver can type its result
//! columns without inferring from the final relation nodes. Arity against
//! the relation tree is deliberately not checked here.

use serde::{Deserialize, Serialize};

/// Explicit type descriptor for a plan's result columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSchema {
    /// Result columns in output order.
    pub fields: Vec<Field>,
}

impl OutputSchema {
    /// Creates a schema from the given fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

/// One typed result column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name.
    pub name: String,
    /// Column type.
    pub ty: DataType,
    /// Whether the column admits nulls.
    pub nullable: bool,
}

impl Field {
    /// Creates a nullable field.
    pub fn nullable(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
        }
    }

    /// Creates a non-nullable field.
    pub fn required(name: impl Into<String>, ty: DataType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
        }
    }
}

/// Column types understood by receivers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 64-bit float.
    F64,
    /// UTF-8 string.
    Utf8,
    /// Raw bytes.
    Binary,
    /// Calendar date.
    Date,
    /// Microsecond timestamp.
    Timestamp,
}
