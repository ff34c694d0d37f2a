//! Entry facade binding builders to a driver handle.

use tracing::debug;

use crate::alter::AlterTableBuilder;
use crate::error::Result;
use crate::index::IndexBuilder;
use crate::runner::SchemaRunner;
use crate::table::CreateTableBuilder;

/// Entry point for fluent schema changes against one driver handle.
///
/// Stateless: each accessor hands out a small namespace whose methods bind
/// the matching builder to the shared driver. Drops need no accumulation
/// and are issued directly.
///
/// ```rust,ignore
/// use fluent_migrate::prelude::*;
///
/// SchemaManager::new(&runner)
///     .create()
///     .table("users")
///     .column("id").int().primary().auto_increment()
///     .column("name").varchar(255).not_null()
///     .execute()
///     .await?;
/// ```
pub struct SchemaManager<'a> {
    runner: &'a dyn SchemaRunner,
}

impl<'a> SchemaManager<'a> {
    /// Binds the facade to a driver handle.
    #[must_use]
    pub fn new(runner: &'a dyn SchemaRunner) -> Self {
        Self { runner }
    }

    /// Create operations: tables and indexes.
    #[must_use]
    pub fn create(&self) -> CreateOps<'a> {
        CreateOps {
            runner: self.runner,
        }
    }

    /// Alter operations: tables.
    #[must_use]
    pub fn alter(&self) -> AlterOps<'a> {
        AlterOps {
            runner: self.runner,
        }
    }

    /// Drop operations: tables and indexes.
    #[must_use]
    pub fn drop(&self) -> DropOps<'a> {
        DropOps {
            runner: self.runner,
        }
    }
}

/// Namespace for create operations.
pub struct CreateOps<'a> {
    runner: &'a dyn SchemaRunner,
}

impl<'a> CreateOps<'a> {
    /// Begins a create-table chain.
    #[must_use]
    pub fn table(&self, name: impl Into<String>) -> CreateTableBuilder<'a> {
        CreateTableBuilder::new(self.runner, name)
    }

    /// Begins a create-index chain.
    #[must_use]
    pub fn index(&self, name: impl Into<String>) -> IndexBuilder<'a> {
        IndexBuilder::new(self.runner, name)
    }
}

/// Namespace for alter operations.
pub struct AlterOps<'a> {
    runner: &'a dyn SchemaRunner,
}

impl<'a> AlterOps<'a> {
    /// Begins an alter-table chain.
    #[must_use]
    pub fn table(&self, name: impl Into<String>) -> AlterTableBuilder<'a> {
        AlterTableBuilder::new(self.runner, name)
    }
}

/// Namespace for drop operations.
pub struct DropOps<'a> {
    runner: &'a dyn SchemaRunner,
}

impl DropOps<'_> {
    /// Drops a table, tolerating a missing one.
    ///
    /// # Errors
    ///
    /// Any error surfaced by the underlying driver, unmodified.
    pub async fn table(&self, name: &str) -> Result<()> {
        debug!(table = %name, "dropping table");
        self.runner.drop_table(name, true).await
    }

    /// Drops an index from a table.
    ///
    /// # Errors
    ///
    /// Any error surfaced by the underlying driver, unmodified.
    pub async fn index(&self, table: &str, name: &str) -> Result<()> {
        debug!(index = %name, table = %table, "dropping index");
        self.runner.drop_index(table, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnOptions;
    use crate::dialect::Dialect;
    use crate::error::SchemaError;
    use crate::test_support::{RecordingRunner, RunnerCall};

    #[tokio::test]
    async fn drop_table_is_issued_directly_with_if_exists() {
        let runner = RecordingRunner::new(Dialect::Sqlite);
        SchemaManager::new(&runner).drop().table("users").await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(
            &calls[0],
            RunnerCall::DropTable { table, if_exists: true } if table == "users"
        ));
    }

    #[tokio::test]
    async fn drop_index_names_table_and_index() {
        let runner = RecordingRunner::new(Dialect::Sqlite);
        SchemaManager::new(&runner)
            .drop()
            .index("users", "idx_users_email")
            .await
            .unwrap();

        assert!(matches!(
            &runner.calls()[0],
            RunnerCall::DropIndex { table, index }
                if table == "users" && index == "idx_users_email"
        ));
    }

    #[tokio::test]
    async fn facade_wires_builders_to_the_runner() {
        let runner = RecordingRunner::new(Dialect::Sqlite);
        let schema = SchemaManager::new(&runner);

        schema
            .create()
            .table("users")
            .column("id").int().primary().auto_increment()
            .execute()
            .await
            .unwrap();

        schema
            .create()
            .index("idx_users_id")
            .on("users")
            .column("id")
            .execute()
            .await
            .unwrap();

        schema
            .alter()
            .table("users")
            .add_column("email").varchar(255)
            .execute()
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(&calls[0], RunnerCall::CreateTable { .. }));
        assert!(matches!(&calls[1], RunnerCall::CreateIndex { .. }));
        assert!(matches!(&calls[2], RunnerCall::AddColumn { .. }));
    }

    #[tokio::test]
    async fn create_context_rejects_alter_only_operations() {
        let runner = RecordingRunner::new(Dialect::Sqlite);

        let dropped = SchemaManager::new(&runner)
            .create()
            .table("users")
            .column("id").int()
            .drop_column("name");
        assert!(matches!(
            dropped,
            Err(SchemaError::InvalidContext { operation: "drop_column", .. })
        ));

        let altered = SchemaManager::new(&runner)
            .create()
            .table("users")
            .column("id").int()
            .alter_column("name");
        assert!(matches!(
            altered,
            Err(SchemaError::InvalidContext { operation: "alter_column", .. })
        ));

        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn column_and_add_column_are_interchangeable() {
        let runner = RecordingRunner::new(Dialect::Sqlite);

        // add_column inside a create chain falls back to column.
        SchemaManager::new(&runner)
            .create()
            .table("users")
            .column("id").int()
            .add_column("name").varchar(255)
            .execute()
            .await
            .unwrap();

        // column inside an alter chain falls back to add_column.
        SchemaManager::new(&runner)
            .alter()
            .table("users")
            .add_column("email").varchar(255)
            .column("bio").text()
            .execute()
            .await
            .unwrap();

        let calls = runner.calls();
        let RunnerCall::CreateTable { table, .. } = &calls[0] else {
            panic!("expected a create-table call");
        };
        assert_eq!(table.columns.len(), 2);
        assert!(matches!(&calls[1], RunnerCall::AddColumn { column, .. } if column.name == "email"));
        assert!(matches!(&calls[2], RunnerCall::AddColumn { column, .. } if column.name == "bio"));
    }
}
