//! Alter-table builder.

use async_trait::async_trait;
use tracing::debug;

use crate::column::{ColumnBuilder, ColumnHost, ColumnOptions};
use crate::error::Result;
use crate::runner::SchemaRunner;
use crate::schema::{ColumnSchema, ForeignKeyRef};

/// Builds an ALTER TABLE batch across a fluent chain.
///
/// Operations accumulate in three buckets — columns to add, column names to
/// drop, and columns to change — and are issued in that fixed order at
/// `execute()`, each bucket keeping its declaration order.
pub struct AlterTableBuilder<'a> {
    runner: &'a dyn SchemaRunner,
    table: String,
    additions: Vec<ColumnSchema>,
    drops: Vec<String>,
    changes: Vec<ColumnSchema>,
}

impl<'a> AlterTableBuilder<'a> {
    pub(crate) fn new(runner: &'a dyn SchemaRunner, table: impl Into<String>) -> Self {
        Self {
            runner,
            table: table.into(),
            additions: Vec::new(),
            drops: Vec::new(),
            changes: Vec::new(),
        }
    }

    /// Begins a column to add.
    #[must_use]
    pub fn add_column(self, name: impl Into<String>) -> ColumnBuilder<Self> {
        ColumnBuilder::new(self, name)
    }

    /// Registers a column to drop.
    #[must_use]
    pub fn drop_column(mut self, name: impl Into<String>) -> Self {
        self.drops.push(name.into());
        self
    }

    /// Begins a replacement definition for the named existing column.
    #[must_use]
    pub fn alter_column(self, name: impl Into<String>) -> AlterColumnBuilder<'a> {
        AlterColumnBuilder::new(self, name)
    }

    /// Issues the accumulated operations: additions first, then drops, then
    /// changes.
    ///
    /// Sub-operations are awaited sequentially; the first failure aborts
    /// the remainder and propagates. No rollback is attempted at this
    /// layer.
    ///
    /// # Errors
    ///
    /// Any error surfaced by the underlying driver, unmodified.
    pub async fn execute(self) -> Result<()> {
        let dialect = self.runner.dialect();
        debug!(
            table = %self.table,
            additions = self.additions.len(),
            drops = self.drops.len(),
            changes = self.changes.len(),
            "altering table"
        );

        for mut column in self.additions {
            dialect.normalize_column(&mut column);
            self.runner.add_column(&self.table, &column).await?;
        }
        for name in &self.drops {
            self.runner.drop_column(&self.table, name).await?;
        }
        for mut column in self.changes {
            dialect.normalize_column(&mut column);
            let name = column.name.clone();
            self.runner.change_column(&self.table, &name, &column).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<'a> ColumnHost for AlterTableBuilder<'a> {
    type AlterColumn = AlterColumnBuilder<'a>;

    fn adopt(&mut self, column: ColumnSchema, _reference: Option<ForeignKeyRef>) {
        // References attached to alter-added columns are not carried to the
        // driver.
        self.additions.push(column);
    }

    fn host_drop_column(self, name: String) -> Result<Self> {
        Ok(self.drop_column(name))
    }

    fn host_alter_column(self, name: String) -> Result<AlterColumnBuilder<'a>> {
        Ok(self.alter_column(name))
    }

    async fn host_execute(self) -> Result<()> {
        self.execute().await
    }
}

/// Accumulates a replacement definition for one existing column.
///
/// The column keeps the name it was opened with. Only alter-table chains
/// produce this builder, so its navigation methods are infallible.
pub struct AlterColumnBuilder<'a> {
    parent: AlterTableBuilder<'a>,
    column: ColumnSchema,
}

impl<'a> AlterColumnBuilder<'a> {
    fn new(parent: AlterTableBuilder<'a>, name: impl Into<String>) -> Self {
        Self {
            parent,
            column: ColumnSchema::new(name),
        }
    }

    fn commit(self) -> AlterTableBuilder<'a> {
        let mut parent = self.parent;
        parent.changes.push(self.column);
        parent
    }

    /// Finishes this change and begins a column to add.
    #[must_use]
    pub fn add_column(self, name: impl Into<String>) -> ColumnBuilder<AlterTableBuilder<'a>> {
        self.commit().add_column(name)
    }

    /// Finishes this change and registers a column to drop.
    #[must_use]
    pub fn drop_column(self, name: impl Into<String>) -> AlterTableBuilder<'a> {
        self.commit().drop_column(name)
    }

    /// Finishes this change and begins another column change.
    #[must_use]
    pub fn alter_column(self, name: impl Into<String>) -> AlterColumnBuilder<'a> {
        self.commit().alter_column(name)
    }

    /// Finalizes the owning alter-table builder.
    ///
    /// # Errors
    ///
    /// Any error surfaced by the underlying driver, unmodified.
    pub async fn execute(self) -> Result<()> {
        self.commit().execute().await
    }
}

impl ColumnOptions for AlterColumnBuilder<'_> {
    fn options_mut(&mut self) -> &mut ColumnSchema {
        &mut self.column
    }
}
