//! Test doubles shared across the unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::dialect::Dialect;
use crate::error::Result;
use crate::runner::SchemaRunner;
use crate::schema::{ColumnSchema, IndexSchema, TableSchema};

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerCall {
    CreateTable {
        table: TableSchema,
        if_not_exists: bool,
    },
    AddColumn {
        table: String,
        column: ColumnSchema,
    },
    DropColumn {
        table: String,
        column: String,
    },
    ChangeColumn {
        table: String,
        name: String,
        column: ColumnSchema,
    },
    CreateIndex {
        table: String,
        index: IndexSchema,
    },
    DropIndex {
        table: String,
        index: String,
    },
    DropTable {
        table: String,
        if_exists: bool,
    },
}

/// Driver double recording every call in arrival order.
pub struct RecordingRunner {
    dialect: Dialect,
    calls: Mutex<Vec<RunnerCall>>,
    fail_from: Option<usize>,
}

impl RecordingRunner {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            calls: Mutex::new(Vec::new()),
            fail_from: None,
        }
    }

    /// Fails the nth call (zero-based) and every later one.
    pub fn fail_from(mut self, call: usize) -> Self {
        self.fail_from = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<RunnerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: RunnerCall) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        if self.fail_from.is_some_and(|from| calls.len() >= from) {
            return Err(sqlx::Error::PoolClosed.into());
        }
        calls.push(call);
        Ok(())
    }
}

#[async_trait]
impl SchemaRunner for RecordingRunner {
    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn create_table(&self, table: &TableSchema, if_not_exists: bool) -> Result<()> {
        self.record(RunnerCall::CreateTable {
            table: table.clone(),
            if_not_exists,
        })
    }

    async fn add_column(&self, table: &str, column: &ColumnSchema) -> Result<()> {
        self.record(RunnerCall::AddColumn {
            table: table.to_string(),
            column: column.clone(),
        })
    }

    async fn drop_column(&self, table: &str, column: &str) -> Result<()> {
        self.record(RunnerCall::DropColumn {
            table: table.to_string(),
            column: column.to_string(),
        })
    }

    async fn change_column(&self, table: &str, name: &str, column: &ColumnSchema) -> Result<()> {
        self.record(RunnerCall::ChangeColumn {
            table: table.to_string(),
            name: name.to_string(),
            column: column.clone(),
        })
    }

    async fn create_index(&self, table: &str, index: &IndexSchema) -> Result<()> {
        self.record(RunnerCall::CreateIndex {
            table: table.to_string(),
            index: index.clone(),
        })
    }

    async fn drop_index(&self, table: &str, index: &str) -> Result<()> {
        self.record(RunnerCall::DropIndex {
            table: table.to_string(),
            index: index.to_string(),
        })
    }

    async fn drop_table(&self, table: &str, if_exists: bool) -> Result<()> {
        self.record(RunnerCall::DropTable {
            table: table.to_string(),
            if_exists,
        })
    }
}
