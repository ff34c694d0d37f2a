//! Create-table builder.

use async_trait::async_trait;
use tracing::debug;

use crate::alter::AlterColumnBuilder;
use crate::column::{ColumnBuilder, ColumnHost};
use crate::error::{Result, SchemaError};
use crate::runner::SchemaRunner;
use crate::schema::{ColumnSchema, ForeignKeyRef, ForeignKeySchema, TableSchema};

/// Builds a CREATE TABLE request across a fluent chain.
///
/// Columns are collected in declaration order; each column that attached a
/// reference contributes one foreign key descriptor. The builder is
/// single-use: `execute()` consumes it.
pub struct CreateTableBuilder<'a> {
    runner: &'a dyn SchemaRunner,
    table: String,
    columns: Vec<ColumnSchema>,
    references: Vec<(String, ForeignKeyRef)>,
}

impl<'a> CreateTableBuilder<'a> {
    pub(crate) fn new(runner: &'a dyn SchemaRunner, table: impl Into<String>) -> Self {
        Self {
            runner,
            table: table.into(),
            columns: Vec::new(),
            references: Vec::new(),
        }
    }

    /// Begins a new column definition.
    #[must_use]
    pub fn column(self, name: impl Into<String>) -> ColumnBuilder<Self> {
        ColumnBuilder::new(self, name)
    }

    /// Resolves the accumulated columns and issues the create-table
    /// request.
    ///
    /// Every column is normalized for the runner's dialect before dispatch.
    ///
    /// # Errors
    ///
    /// Any error surfaced by the underlying driver, unmodified.
    pub async fn execute(self) -> Result<()> {
        let dialect = self.runner.dialect();
        let mut columns = self.columns;
        for column in &mut columns {
            dialect.normalize_column(column);
        }

        let foreign_keys: Vec<ForeignKeySchema> = self
            .references
            .into_iter()
            .map(|(column, reference)| ForeignKeySchema {
                columns: vec![column],
                referenced_table: reference.table,
                referenced_columns: vec![reference.column],
                on_delete: reference.on_delete,
                on_update: reference.on_update,
            })
            .collect();

        let table = TableSchema {
            name: self.table,
            columns,
            foreign_keys,
        };
        debug!(table = %table.name, columns = table.columns.len(), "creating table");
        self.runner.create_table(&table, true).await
    }
}

#[async_trait]
impl<'a> ColumnHost for CreateTableBuilder<'a> {
    type AlterColumn = AlterColumnBuilder<'a>;

    fn adopt(&mut self, column: ColumnSchema, reference: Option<ForeignKeyRef>) {
        if let Some(reference) = reference {
            self.references.push((column.name.clone(), reference));
        }
        self.columns.push(column);
    }

    fn host_drop_column(self, _name: String) -> Result<Self> {
        Err(SchemaError::InvalidContext {
            operation: "drop_column",
            context: "alter table",
        })
    }

    fn host_alter_column(self, _name: String) -> Result<AlterColumnBuilder<'a>> {
        Err(SchemaError::InvalidContext {
            operation: "alter_column",
            context: "alter table",
        })
    }

    async fn host_execute(self) -> Result<()> {
        self.execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnOptions;
    use crate::dialect::Dialect;
    use crate::schema::{ColumnType, DefaultValue, ForeignKeyAction};
    use crate::test_support::{RecordingRunner, RunnerCall};

    #[tokio::test]
    async fn collects_columns_in_declaration_order() {
        let runner = RecordingRunner::new(Dialect::Postgres);
        CreateTableBuilder::new(&runner, "users")
            .column("id").int().primary().auto_increment()
            .column("name").varchar(255).not_null()
            .column("age").int().nullable()
            .execute()
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        let RunnerCall::CreateTable { table, if_not_exists } = &calls[0] else {
            panic!("expected a create-table call");
        };
        assert!(*if_not_exists);
        assert_eq!(table.name, "users");
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "age"]);
        assert_eq!(table.columns[1].length.as_deref(), Some("255"));
        assert_eq!(table.columns[2].is_nullable, Some(true));
        assert!(table.foreign_keys.is_empty());
    }

    #[tokio::test]
    async fn derives_foreign_keys_per_column() {
        let runner = RecordingRunner::new(Dialect::Postgres);
        CreateTableBuilder::new(&runner, "employees")
            .column("id").int().primary().auto_increment()
            .column("org_id").int().not_null()
            .references("organizations", "id")
            .on_delete(ForeignKeyAction::Cascade)
            .on_update(ForeignKeyAction::SetNull)
            .execute()
            .await
            .unwrap();

        let calls = runner.calls();
        let RunnerCall::CreateTable { table, .. } = &calls[0] else {
            panic!("expected a create-table call");
        };
        assert_eq!(table.foreign_keys.len(), 1);
        let fk = &table.foreign_keys[0];
        assert_eq!(fk.columns, ["org_id"]);
        assert_eq!(fk.referenced_table, "organizations");
        assert_eq!(fk.referenced_columns, ["id"]);
        assert_eq!(fk.on_delete, Some(ForeignKeyAction::Cascade));
        assert_eq!(fk.on_update, Some(ForeignKeyAction::SetNull));
    }

    #[tokio::test]
    async fn on_delete_without_references_is_a_silent_noop() {
        let runner = RecordingRunner::new(Dialect::Postgres);
        CreateTableBuilder::new(&runner, "employees")
            .column("org_id").int().on_delete(ForeignKeyAction::Cascade)
            .execute()
            .await
            .unwrap();

        let RunnerCall::CreateTable { table, .. } = &runner.calls()[0] else {
            panic!("expected a create-table call");
        };
        assert!(table.foreign_keys.is_empty());
    }

    #[tokio::test]
    async fn sqlite_rewrites_only_the_exact_auto_increment_shape() {
        let runner = RecordingRunner::new(Dialect::Sqlite);
        CreateTableBuilder::new(&runner, "users")
            .column("id").int().primary().auto_increment()
            .column("age").int()
            .column("code").int().primary()
            .execute()
            .await
            .unwrap();

        let RunnerCall::CreateTable { table, .. } = &runner.calls()[0] else {
            panic!("expected a create-table call");
        };
        assert_eq!(table.columns[0].column_type, Some(ColumnType::Integer));
        assert_eq!(table.columns[1].column_type, Some(ColumnType::Int));
        assert_eq!(table.columns[2].column_type, Some(ColumnType::Int));
    }

    #[tokio::test]
    async fn defaults_reach_the_driver() {
        let runner = RecordingRunner::new(Dialect::MySql);
        CreateTableBuilder::new(&runner, "posts")
            .column("published").smallint().default(0)
            .column("created_at").timestamp().default("CURRENT_TIMESTAMP")
            .execute()
            .await
            .unwrap();

        let RunnerCall::CreateTable { table, .. } = &runner.calls()[0] else {
            panic!("expected a create-table call");
        };
        assert_eq!(table.columns[0].default, Some(DefaultValue::Integer(0)));
        assert_eq!(
            table.columns[1].default,
            Some(DefaultValue::Expression("CURRENT_TIMESTAMP".to_string()))
        );
    }

    #[tokio::test]
    async fn driver_errors_propagate_unmodified() {
        let runner = RecordingRunner::new(Dialect::Sqlite).fail_from(0);
        let result = CreateTableBuilder::new(&runner, "users")
            .column("id").int()
            .execute()
            .await;
        assert!(matches!(result, Err(crate::error::SchemaError::Database(_))));
    }
}
