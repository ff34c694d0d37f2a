//! Fluent builders for relational schema changes.
//!
//! `fluent-migrate` describes create/alter/drop operations on tables,
//! columns, and indexes through chainable builders, then resolves them on a
//! terminal `execute()` into normalized descriptors handed to a
//! [`SchemaRunner`](runner::SchemaRunner) — the driver that generates and
//! executes the actual SQL.
//!
//! # Architecture
//!
//! - **Schema** — descriptor types the builders accumulate
//! - **Column** — the fluent column accumulator, shared between create and
//!   alter contexts through a capability trait
//! - **Table / Alter / Index** — the builders owning columns and buckets
//! - **Dialect** — engine identifiers, type vocabularies, and per-dialect
//!   column normalization
//! - **Runner** — the driver abstraction performing schema mutations
//! - **Manager** — the entry facade binding builders to one driver handle
//!
//! # Example
//!
//! ```rust,ignore
//! use fluent_migrate::prelude::*;
//!
//! let schema = SchemaManager::new(&runner);
//!
//! schema.create()
//!     .table("employees")
//!     .column("id").int().primary().auto_increment()
//!     .column("name").varchar(255).not_null()
//!     .column("org_id").int().not_null()
//!     .references("organizations", "id")
//!     .on_delete(ForeignKeyAction::Cascade)
//!     .execute()
//!     .await?;
//!
//! schema.alter()
//!     .table("employees")
//!     .add_column("email").varchar(255).nullable()
//!     .drop_column("legacy_code")?
//!     .alter_column("name").text()
//!     .execute()
//!     .await?;
//!
//! schema.create()
//!     .index("idx_employees_org")
//!     .on("employees")
//!     .columns(&["org_id", "name"])
//!     .execute()
//!     .await?;
//!
//! schema.drop().table("employees").await?;
//! ```

pub mod alter;
pub mod column;
pub mod dialect;
pub mod error;
pub mod index;
pub mod manager;
pub mod runner;
pub mod schema;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::alter::{AlterColumnBuilder, AlterTableBuilder};
    pub use crate::column::{ColumnBuilder, ColumnHost, ColumnOptions};
    pub use crate::dialect::Dialect;
    pub use crate::error::{Result, SchemaError};
    pub use crate::index::IndexBuilder;
    pub use crate::manager::SchemaManager;
    pub use crate::runner::SchemaRunner;
    pub use crate::schema::{
        ColumnSchema, ColumnType, DefaultValue, ForeignKeyAction, ForeignKeyRef,
        ForeignKeySchema, GenerationStrategy, IndexSchema, Length, TableSchema,
    };
    pub use crate::table::CreateTableBuilder;
}
