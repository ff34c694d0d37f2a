//! SQLite driver for `fluent-migrate`.
//!
//! [`SqliteRunner`] executes the descriptors produced by the fluent
//! builders against an `sqlx` SQLite pool.
//!
//! # How SQLite differs from other engines
//!
//! - Identifiers are double-quoted; the auto-increment keyword is
//!   `AUTOINCREMENT`, valid only on a column declared exactly `INTEGER`.
//! - Foreign keys can only be declared at table creation time, so they are
//!   emitted as table-level clauses inside `CREATE TABLE`.
//! - `ALTER TABLE` natively supports only RENAME, ADD COLUMN, and
//!   DROP COLUMN (3.35.0+). Column changes use the table-recreation
//!   strategy: create a replacement table, copy rows, drop the original,
//!   rename.
//! - Index names are database-global; `DROP INDEX` does not name the
//!   table.

mod runner;

pub use runner::SqliteRunner;
