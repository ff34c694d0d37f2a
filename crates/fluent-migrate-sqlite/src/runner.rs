//! Schema driver executing against an SQLite pool.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

use fluent_migrate::dialect::Dialect;
use fluent_migrate::error::Result;
use fluent_migrate::runner::SchemaRunner;
use fluent_migrate::schema::{
    ColumnSchema, ForeignKeySchema, GenerationStrategy, IndexSchema, TableSchema,
};

/// Schema driver for SQLite backed by an [`SqlitePool`].
///
/// The pool is shared and externally owned; the runner never closes it.
pub struct SqliteRunner {
    pool: SqlitePool,
}

impl SqliteRunner {
    /// Creates a runner over an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run(&self, sql: &str) -> Result<()> {
        debug!(sql = %sql, "executing schema SQL");
        sqlx::query(sql).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SchemaRunner for SqliteRunner {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn create_table(&self, table: &TableSchema, if_not_exists: bool) -> Result<()> {
        self.run(&create_table_sql(table, if_not_exists)).await
    }

    async fn add_column(&self, table: &str, column: &ColumnSchema) -> Result<()> {
        self.run(&add_column_sql(table, column)).await
    }

    async fn drop_column(&self, table: &str, column: &str) -> Result<()> {
        self.run(&format!(
            "ALTER TABLE {} DROP COLUMN {}",
            quote_identifier(table),
            quote_identifier(column)
        ))
        .await
    }

    // SQLite has no ALTER COLUMN; the table is recreated with the
    // replacement definition and rows are copied across.
    async fn change_column(&self, table: &str, name: &str, column: &ColumnSchema) -> Result<()> {
        let existing: Vec<(i64, String, String, i64, Option<String>, i64)> =
            sqlx::query_as(&format!(
                "PRAGMA table_info({})",
                quote_identifier(table)
            ))
            .fetch_all(&self.pool)
            .await?;

        if !existing.iter().any(|(_, column_name, ..)| column_name == name) {
            return Err(sqlx::Error::RowNotFound.into());
        }

        let mut definitions = Vec::new();
        let mut copy_columns = Vec::new();
        for (_, column_name, column_type, notnull, dflt_value, pk) in &existing {
            copy_columns.push(quote_identifier(column_name));
            if column_name == name {
                definitions.push(column_definition(column));
                continue;
            }
            let mut parts = vec![quote_identifier(column_name)];
            if !column_type.is_empty() {
                parts.push(column_type.clone());
            }
            if *pk > 0 {
                parts.push("PRIMARY KEY".to_string());
            }
            if *notnull != 0 {
                parts.push("NOT NULL".to_string());
            }
            if let Some(default) = dflt_value {
                parts.push(format!("DEFAULT {default}"));
            }
            definitions.push(parts.join(" "));
        }

        let staging = format!("{table}__alter_new");
        let copy_list = copy_columns.join(", ");
        let statements = [
            format!(
                "CREATE TABLE {} ({})",
                quote_identifier(&staging),
                definitions.join(", ")
            ),
            format!(
                "INSERT INTO {} ({copy_list}) SELECT {copy_list} FROM {}",
                quote_identifier(&staging),
                quote_identifier(table)
            ),
            format!("DROP TABLE {}", quote_identifier(table)),
            format!(
                "ALTER TABLE {} RENAME TO {}",
                quote_identifier(&staging),
                quote_identifier(table)
            ),
        ];

        let mut tx = self.pool.begin().await?;
        for sql in &statements {
            debug!(sql = %sql, "executing schema SQL");
            sqlx::query(sql).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn create_index(&self, table: &str, index: &IndexSchema) -> Result<()> {
        self.run(&create_index_sql(table, index)).await
    }

    async fn drop_index(&self, _table: &str, index: &str) -> Result<()> {
        // Index names are database-global in SQLite; the table is not named.
        self.run(&format!("DROP INDEX {}", quote_identifier(index)))
            .await
    }

    async fn drop_table(&self, table: &str, if_exists: bool) -> Result<()> {
        let mut sql = String::from("DROP TABLE ");
        if if_exists {
            sql.push_str("IF EXISTS ");
        }
        sql.push_str(&quote_identifier(table));
        self.run(&sql).await
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Renders the declared type with its length or precision suffix, or
/// nothing at all: SQLite permits untyped columns.
fn type_sql(column: &ColumnSchema) -> Option<String> {
    let column_type = column.column_type.as_ref()?;
    let mut sql = column_type.as_str().to_uppercase();
    if let Some(length) = &column.length {
        sql.push_str(&format!("({length})"));
    } else if let Some(precision) = column.precision {
        match column.scale {
            Some(scale) => sql.push_str(&format!("({precision}, {scale})")),
            None => sql.push_str(&format!("({precision})")),
        }
    }
    Some(sql)
}

fn column_definition(column: &ColumnSchema) -> String {
    let mut parts = vec![quote_identifier(&column.name)];
    if let Some(type_sql) = type_sql(column) {
        parts.push(type_sql);
    }
    if column.is_primary {
        parts.push("PRIMARY KEY".to_string());
        if column.is_generated
            && column.generation_strategy == Some(GenerationStrategy::Increment)
        {
            parts.push("AUTOINCREMENT".to_string());
        }
    }
    // Columns are NOT NULL unless explicitly made nullable; primary keys
    // are implicitly NOT NULL.
    if !column.is_primary && column.is_nullable != Some(true) {
        parts.push("NOT NULL".to_string());
    }
    if column.is_unique && !column.is_primary {
        parts.push("UNIQUE".to_string());
    }
    if let Some(default) = &column.default {
        parts.push(format!("DEFAULT {}", default.to_sql()));
    }
    parts.join(" ")
}

fn foreign_key_clause(foreign_key: &ForeignKeySchema) -> String {
    let columns: Vec<String> = foreign_key
        .columns
        .iter()
        .map(|c| quote_identifier(c))
        .collect();
    let referenced: Vec<String> = foreign_key
        .referenced_columns
        .iter()
        .map(|c| quote_identifier(c))
        .collect();
    let mut sql = format!(
        "FOREIGN KEY ({}) REFERENCES {} ({})",
        columns.join(", "),
        quote_identifier(&foreign_key.referenced_table),
        referenced.join(", ")
    );
    if let Some(action) = foreign_key.on_delete {
        sql.push_str(&format!(" ON DELETE {}", action.as_sql()));
    }
    if let Some(action) = foreign_key.on_update {
        sql.push_str(&format!(" ON UPDATE {}", action.as_sql()));
    }
    sql
}

fn create_table_sql(table: &TableSchema, if_not_exists: bool) -> String {
    let mut sql = String::from("CREATE TABLE ");
    if if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    sql.push_str(&quote_identifier(&table.name));
    sql.push_str(" (\n  ");

    let mut items: Vec<String> = table.columns.iter().map(column_definition).collect();
    items.extend(table.foreign_keys.iter().map(foreign_key_clause));
    sql.push_str(&items.join(",\n  "));

    sql.push_str("\n)");
    sql
}

fn add_column_sql(table: &str, column: &ColumnSchema) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {}",
        quote_identifier(table),
        column_definition(column)
    )
}

fn create_index_sql(table: &str, index: &IndexSchema) -> String {
    let mut sql = String::from("CREATE ");
    if index.unique {
        sql.push_str("UNIQUE ");
    }
    sql.push_str("INDEX ");
    sql.push_str(&quote_identifier(&index.name));
    sql.push_str(" ON ");
    sql.push_str(&quote_identifier(table));

    let columns: Vec<String> = index.columns.iter().map(|c| quote_identifier(c)).collect();
    sql.push_str(&format!(" ({})", columns.join(", ")));
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluent_migrate::column::ColumnOptions;
    use fluent_migrate::schema::ForeignKeyAction;

    #[test]
    fn column_definitions() {
        let id = ColumnSchema::new("id").integer().primary().auto_increment();
        assert_eq!(
            column_definition(&id),
            "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"
        );

        let name = ColumnSchema::new("name").varchar(255).not_null().unique();
        assert_eq!(
            column_definition(&name),
            "\"name\" VARCHAR(255) NOT NULL UNIQUE"
        );

        let age = ColumnSchema::new("age").int().nullable();
        assert_eq!(column_definition(&age), "\"age\" INT");

        let active = ColumnSchema::new("active").boolean().default(true);
        assert_eq!(
            column_definition(&active),
            "\"active\" BOOLEAN NOT NULL DEFAULT 1"
        );

        let price = ColumnSchema::new("price").decimal(10, 2).nullable();
        assert_eq!(column_definition(&price), "\"price\" DECIMAL(10, 2)");

        let untyped = ColumnSchema::new("payload").nullable();
        assert_eq!(column_definition(&untyped), "\"payload\"");
    }

    #[test]
    fn create_table_includes_foreign_keys() {
        let table = TableSchema {
            name: "employees".to_string(),
            columns: vec![
                ColumnSchema::new("id").integer().primary().auto_increment(),
                ColumnSchema::new("org_id").int().not_null(),
            ],
            foreign_keys: vec![ForeignKeySchema {
                columns: vec!["org_id".to_string()],
                referenced_table: "organizations".to_string(),
                referenced_columns: vec!["id".to_string()],
                on_delete: Some(ForeignKeyAction::Cascade),
                on_update: None,
            }],
        };

        let sql = create_table_sql(&table, true);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"employees\""));
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(sql.contains("\"org_id\" INT NOT NULL"));
        assert!(sql.contains(
            "FOREIGN KEY (\"org_id\") REFERENCES \"organizations\" (\"id\") ON DELETE CASCADE"
        ));
    }

    #[test]
    fn add_column_sql_renders_full_definition() {
        let column = ColumnSchema::new("email").varchar(255).nullable();
        assert_eq!(
            add_column_sql("users", &column),
            "ALTER TABLE \"users\" ADD COLUMN \"email\" VARCHAR(255)"
        );
    }

    #[test]
    fn create_index_sql_quotes_everything() {
        let index = IndexSchema {
            name: "idx_users_email".to_string(),
            columns: vec!["email".to_string()],
            unique: true,
        };
        assert_eq!(
            create_index_sql("users", &index),
            "CREATE UNIQUE INDEX \"idx_users_email\" ON \"users\" (\"email\")"
        );
    }

    #[test]
    fn identifiers_escape_embedded_quotes() {
        assert_eq!(quote_identifier("weird\"name"), "\"weird\"\"name\"");
    }
}
