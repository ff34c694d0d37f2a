//! Index builder.

use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::runner::SchemaRunner;
use crate::schema::IndexSchema;

/// Builds a CREATE INDEX request.
///
/// The target table and at least one column are required at `execute()`
/// time; everything else is optional. Duplicate column names are passed
/// through as-is.
pub struct IndexBuilder<'a> {
    runner: &'a dyn SchemaRunner,
    name: String,
    table: Option<String>,
    columns: Vec<String>,
    unique: bool,
}

impl<'a> IndexBuilder<'a> {
    pub(crate) fn new(runner: &'a dyn SchemaRunner, name: impl Into<String>) -> Self {
        Self {
            runner,
            name: name.into(),
            table: None,
            columns: Vec::new(),
            unique: false,
        }
    }

    /// Sets the table the index is created on.
    #[must_use]
    pub fn on(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Appends one column to the index.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Appends several columns to the index, preserving call order.
    #[must_use]
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.columns.extend(names.iter().map(|&name| name.to_string()));
        self
    }

    /// Makes this a unique index.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Issues the create-index request.
    ///
    /// # Errors
    ///
    /// [`SchemaError::IndexMissingTable`] without a prior `on` call,
    /// [`SchemaError::IndexMissingColumns`] with an empty column list, or
    /// any error surfaced by the underlying driver.
    pub async fn execute(self) -> Result<()> {
        let Some(table) = self.table else {
            return Err(SchemaError::IndexMissingTable { index: self.name });
        };
        if self.columns.is_empty() {
            return Err(SchemaError::IndexMissingColumns { index: self.name });
        }

        let index = IndexSchema {
            name: self.name,
            columns: self.columns,
            unique: self.unique,
        };
        debug!(index = %index.name, table = %table, "creating index");
        self.runner.create_index(&table, &index).await
    }
}
