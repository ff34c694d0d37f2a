//! Driver abstraction.

use async_trait::async_trait;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::schema::{ColumnSchema, IndexSchema, TableSchema};

/// Connection-level driver performing the actual schema mutations.
///
/// The builders only shape descriptors; SQL generation, execution, and
/// transaction handling all happen behind this trait. The handle is shared
/// and externally owned: this layer never closes or reinitializes it, and
/// errors returned here propagate to callers unmodified.
#[async_trait]
pub trait SchemaRunner: Send + Sync {
    /// Returns the active dialect identifier.
    fn dialect(&self) -> Dialect;

    /// Creates a table from a finalized definition.
    async fn create_table(&self, table: &TableSchema, if_not_exists: bool) -> Result<()>;

    /// Adds a column to an existing table.
    async fn add_column(&self, table: &str, column: &ColumnSchema) -> Result<()>;

    /// Drops a column from an existing table.
    async fn drop_column(&self, table: &str, column: &str) -> Result<()>;

    /// Replaces the definition of the named column.
    async fn change_column(&self, table: &str, name: &str, column: &ColumnSchema) -> Result<()>;

    /// Creates an index on the given table.
    async fn create_index(&self, table: &str, index: &IndexSchema) -> Result<()>;

    /// Drops an index from the given table.
    async fn drop_index(&self, table: &str, index: &str) -> Result<()>;

    /// Drops a table.
    async fn drop_table(&self, table: &str, if_exists: bool) -> Result<()>;
}
