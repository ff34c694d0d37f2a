//! Schema descriptor types.
//!
//! These types describe the schema changes that the builders accumulate.
//! They are resolved at `execute()` time and handed to the
//! [`SchemaRunner`](crate::runner::SchemaRunner) implementation, which
//! performs the actual mutation.

use serde::{Deserialize, Serialize};

/// Logical column type.
///
/// Covers the names settable through the fluent type methods; any other
/// dialect-specific name (e.g. `jsonb`, `nvarchar2`) round-trips through
/// [`ColumnType::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Int,
    Integer,
    TinyInt,
    SmallInt,
    MediumInt,
    BigInt,
    Float,
    Double,
    Real,
    Decimal,
    Numeric,
    Char,
    Varchar,
    Text,
    Blob,
    Boolean,
    Json,
    Uuid,
    Date,
    Time,
    DateTime,
    Timestamp,
    /// Any other dialect-specific type name.
    Custom(String),
}

impl ColumnType {
    /// Returns the lowercase SQL name of this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "int",
            Self::Integer => "integer",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Real => "real",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Json => "json",
            Self::Uuid => "uuid",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Custom(name) => name,
        }
    }

    /// Parses a type name, falling back to [`ColumnType::Custom`] for names
    /// outside the built-in set.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "int" => Self::Int,
            "integer" => Self::Integer,
            "tinyint" => Self::TinyInt,
            "smallint" => Self::SmallInt,
            "mediumint" => Self::MediumInt,
            "bigint" => Self::BigInt,
            "float" => Self::Float,
            "double" => Self::Double,
            "real" => Self::Real,
            "decimal" => Self::Decimal,
            "numeric" => Self::Numeric,
            "char" => Self::Char,
            "varchar" => Self::Varchar,
            "text" => Self::Text,
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "json" => Self::Json,
            "uuid" => Self::Uuid,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            "timestamp" => Self::Timestamp,
            _ => Self::Custom(name.to_string()),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ColumnType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ColumnType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Column length argument, accepted as a number or a string.
///
/// Always normalized to its string form before being stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length(String);

impl Length {
    /// Returns the normalized string form.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String literal default, quoted by the driver.
    String(String),
    /// Raw SQL expression (e.g. `CURRENT_TIMESTAMP`).
    Expression(String),
}

impl DefaultValue {
    /// Returns the SQL representation of this default value.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => format!("'{}'", s.replace('\'', "''")),
            Self::Expression(expr) => expr.clone(),
        }
    }
}

impl From<bool> for DefaultValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for DefaultValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for DefaultValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for DefaultValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

// A string default converts to a raw expression; quoted literals use
// `DefaultValue::String` explicitly.
impl From<&str> for DefaultValue {
    fn from(value: &str) -> Self {
        Self::Expression(value.to_string())
    }
}

impl From<String> for DefaultValue {
    fn from(value: String) -> Self {
        Self::Expression(value)
    }
}

/// Strategy used to generate column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStrategy {
    /// Sequential auto-increment.
    Increment,
}

/// Foreign key referential action (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForeignKeyAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set the referencing column to NULL.
    SetNull,
    /// Set the referencing column to its default value.
    SetDefault,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of the action.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

/// Accumulated definition of a single column.
///
/// Every attribute except `name` starts unset and is last-write-wins across
/// fluent calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, fixed at construction.
    pub name: String,
    /// Declared type, if a type method was called.
    pub column_type: Option<ColumnType>,
    /// Length for character types, normalized to a string.
    pub length: Option<String>,
    /// Precision for numeric types.
    pub precision: Option<u32>,
    /// Scale for numeric types.
    pub scale: Option<u32>,
    /// Whether this column is a primary key.
    pub is_primary: bool,
    /// Whether this column's values are generated.
    pub is_generated: bool,
    /// How generated values are produced.
    pub generation_strategy: Option<GenerationStrategy>,
    /// Explicit nullability; `None` leaves the driver default (NOT NULL).
    pub is_nullable: Option<bool>,
    /// Whether this column carries a UNIQUE constraint.
    pub is_unique: bool,
    /// Default value, if any.
    pub default: Option<DefaultValue>,
}

impl ColumnSchema {
    /// Creates a new column definition with only the name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: None,
            length: None,
            precision: None,
            scale: None,
            is_primary: false,
            is_generated: false,
            generation_strategy: None,
            is_nullable: None,
            is_unique: false,
            default: None,
        }
    }
}

/// A column-level reference to a column in another table.
///
/// Exists only once `.references(..)` was called on the owning column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// The referenced table name.
    pub table: String,
    /// The referenced column name.
    pub column: String,
    /// Action on delete.
    pub on_delete: Option<ForeignKeyAction>,
    /// Action on update.
    pub on_update: Option<ForeignKeyAction>,
}

/// Table-level foreign key descriptor handed to the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeySchema {
    /// Column(s) in the referencing table.
    pub columns: Vec<String>,
    /// Referenced table name.
    pub referenced_table: String,
    /// Referenced column(s).
    pub referenced_columns: Vec<String>,
    /// Action on delete.
    pub on_delete: Option<ForeignKeyAction>,
    /// Action on update.
    pub on_update: Option<ForeignKeyAction>,
}

/// Complete definition of a table to create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnSchema>,
    /// Foreign key definitions, in column declaration order.
    pub foreign_keys: Vec<ForeignKeySchema>,
}

/// Definition of an index to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSchema {
    /// Index name.
    pub name: String,
    /// Indexed columns, in call order; duplicates are passed through as-is.
    pub columns: Vec<String>,
    /// Whether this is a unique index.
    pub unique: bool,
}
