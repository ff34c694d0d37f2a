//! Database dialect identifiers, type vocabularies, and column
//! normalization.
//!
//! The vocabularies are lookup tables from dialect to permissible type
//! names, provided for caller convenience and validation; the builders
//! never enforce membership. Normalization is the per-dialect rewrite hook
//! applied to every finalized column before dispatch.

use serde::{Deserialize, Serialize};

use crate::schema::{ColumnSchema, ColumnType, GenerationStrategy};

/// Target database engine family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// MySQL, MariaDB, and Aurora MySQL.
    MySql,
    /// PostgreSQL and Aurora PostgreSQL.
    Postgres,
    /// Microsoft SQL Server.
    SqlServer,
    /// Oracle Database.
    Oracle,
    /// CockroachDB.
    CockroachDb,
    /// SAP HANA.
    Sap,
    /// Google Cloud Spanner.
    Spanner,
    /// SQLite, including embedded and file-based deployments.
    Sqlite,
}

impl Dialect {
    /// Returns the dialect identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::SqlServer => "mssql",
            Self::Oracle => "oracle",
            Self::CockroachDb => "cockroachdb",
            Self::Sap => "sap",
            Self::Spanner => "spanner",
            Self::Sqlite => "sqlite",
        }
    }

    /// Returns the type names this dialect accepts.
    #[must_use]
    pub fn supported_types(self) -> &'static [&'static str] {
        match self {
            Self::MySql => MYSQL_TYPES,
            Self::Postgres => POSTGRES_TYPES,
            Self::SqlServer => SQL_SERVER_TYPES,
            Self::Oracle => ORACLE_TYPES,
            Self::CockroachDb => COCKROACH_TYPES,
            Self::Sap => SAP_TYPES,
            Self::Spanner => SPANNER_TYPES,
            Self::Sqlite => SQLITE_TYPES,
        }
    }

    /// Returns whether `name` is in this dialect's type vocabulary.
    #[must_use]
    pub fn supports_type(self, name: &str) -> bool {
        self.supported_types().contains(&name)
    }

    /// Applies dialect-specific rewrites to a finalized column.
    ///
    /// Applied uniformly to every column before dispatch, keyed by dialect,
    /// so additional per-dialect rules slot in without touching the
    /// builders.
    pub fn normalize_column(self, column: &mut ColumnSchema) {
        match self {
            Self::Sqlite => normalize_sqlite(column),
            _ => {}
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// SQLite honours AUTOINCREMENT only on a column declared exactly
/// `INTEGER`; an auto-incrementing `int` primary key is rewritten to the
/// native alias.
fn normalize_sqlite(column: &mut ColumnSchema) {
    if column.column_type == Some(ColumnType::Int)
        && column.is_primary
        && column.is_generated
        && column.generation_strategy == Some(GenerationStrategy::Increment)
    {
        column.column_type = Some(ColumnType::Integer);
    }
}

/// Types accepted by MySQL, MariaDB, and Aurora MySQL.
const MYSQL_TYPES: &[&str] = &[
    // numeric
    "bit",
    "int",
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "float",
    "double",
    "double precision",
    "real",
    "decimal",
    "dec",
    "numeric",
    "fixed",
    "bool",
    "boolean",
    // date and time
    "date",
    "datetime",
    "timestamp",
    "time",
    "year",
    // string
    "char",
    "nchar",
    "national char",
    "varchar",
    "nvarchar",
    "national varchar",
    "blob",
    "text",
    "tinyblob",
    "tinytext",
    "mediumblob",
    "mediumtext",
    "longblob",
    "longtext",
    "enum",
    "set",
    "binary",
    "varbinary",
    // json
    "json",
    // spatial
    "geometry",
    "point",
    "linestring",
    "polygon",
    "multipoint",
    "multilinestring",
    "multipolygon",
    "geometrycollection",
    // vector
    "vector",
    // mariadb extras
    "uuid",
    "inet4",
    "inet6",
];

/// Types accepted by PostgreSQL and Aurora PostgreSQL.
const POSTGRES_TYPES: &[&str] = &[
    "int",
    "int2",
    "int4",
    "int8",
    "smallint",
    "integer",
    "bigint",
    "decimal",
    "numeric",
    "real",
    "float",
    "float4",
    "float8",
    "double precision",
    "money",
    "character varying",
    "varchar",
    "character",
    "char",
    "text",
    "citext",
    "hstore",
    "bytea",
    "bit",
    "varbit",
    "bit varying",
    "timetz",
    "timestamptz",
    "timestamp",
    "timestamp without time zone",
    "timestamp with time zone",
    "date",
    "time",
    "time without time zone",
    "time with time zone",
    "interval",
    "bool",
    "boolean",
    "enum",
    "point",
    "line",
    "lseg",
    "box",
    "path",
    "polygon",
    "circle",
    "cidr",
    "inet",
    "macaddr",
    "macaddr8",
    "tsvector",
    "tsquery",
    "uuid",
    "xml",
    "json",
    "jsonb",
    "jsonpath",
    "int4range",
    "int8range",
    "numrange",
    "tsrange",
    "tstzrange",
    "daterange",
    "int4multirange",
    "int8multirange",
    "nummultirange",
    "tsmultirange",
    "tstzmultirange",
    "datemultirange",
    "geometry",
    "geography",
    "cube",
    "ltree",
    "vector",
    "halfvec",
];

/// Types accepted by Microsoft SQL Server.
const SQL_SERVER_TYPES: &[&str] = &[
    "int",
    "bigint",
    "bit",
    "decimal",
    "money",
    "numeric",
    "smallint",
    "smallmoney",
    "tinyint",
    "float",
    "real",
    "date",
    "datetime2",
    "datetime",
    "datetimeoffset",
    "smalldatetime",
    "time",
    "char",
    "varchar",
    "text",
    "nchar",
    "nvarchar",
    "ntext",
    "binary",
    "image",
    "varbinary",
    "hierarchyid",
    "sql_variant",
    "timestamp",
    "uniqueidentifier",
    "xml",
    "geometry",
    "geography",
    "rowversion",
    "vector",
];

/// Types accepted by Oracle Database.
const ORACLE_TYPES: &[&str] = &[
    "char",
    "nchar",
    "nvarchar2",
    "varchar2",
    "long",
    "raw",
    "long raw",
    "number",
    "numeric",
    "float",
    "dec",
    "decimal",
    "integer",
    "int",
    "smallint",
    "real",
    "double precision",
    "date",
    "timestamp",
    "timestamp with time zone",
    "timestamp with local time zone",
    "interval year to month",
    "interval day to second",
    "bfile",
    "blob",
    "clob",
    "nclob",
    "rowid",
    "urowid",
    "simple-json",
    "json",
];

/// Types accepted by CockroachDB.
const COCKROACH_TYPES: &[&str] = &[
    "array",
    "bool",
    "boolean",
    "bytes",
    "bytea",
    "blob",
    "date",
    "enum",
    "geometry",
    "geography",
    "numeric",
    "decimal",
    "dec",
    "float",
    "float4",
    "float8",
    "double precision",
    "real",
    "inet",
    "int",
    "int4",
    "integer",
    "int2",
    "int8",
    "int64",
    "smallint",
    "bigint",
    "interval",
    "string",
    "character varying",
    "character",
    "char",
    "char varying",
    "varchar",
    "text",
    "time",
    "time without time zone",
    "timestamp",
    "timestamptz",
    "timestamp without time zone",
    "timestamp with time zone",
    "json",
    "jsonb",
    "uuid",
];

/// Types accepted by SAP HANA.
const SAP_TYPES: &[&str] = &[
    "alphanum",
    "array",
    "bigint",
    "binary",
    "blob",
    "boolean",
    "char",
    "clob",
    "date",
    "dec",
    "decimal",
    "double",
    "float",
    "half_vector",
    "int",
    "integer",
    "nchar",
    "nclob",
    "nvarchar",
    "real_vector",
    "real",
    "seconddate",
    "shorttext",
    "smalldecimal",
    "smallint",
    "st_geometry",
    "st_point",
    "text",
    "time",
    "timestamp",
    "tinyint",
    "varbinary",
    "varchar",
];

/// Types accepted by Google Cloud Spanner.
const SPANNER_TYPES: &[&str] = &[
    "bool",
    "int64",
    "float64",
    "numeric",
    "string",
    "json",
    "bytes",
    "date",
    "timestamp",
    "array",
];

/// Types accepted by SQLite and its embedded variants.
const SQLITE_TYPES: &[&str] = &[
    "int",
    "integer",
    "tinyint",
    "smallint",
    "mediumint",
    "bigint",
    "unsigned big int",
    "int2",
    "int8",
    "character",
    "varchar",
    "varying character",
    "nchar",
    "native character",
    "nvarchar",
    "text",
    "clob",
    "blob",
    "real",
    "double",
    "double precision",
    "float",
    "numeric",
    "decimal",
    "boolean",
    "date",
    "time",
    "datetime",
    "json",
];
