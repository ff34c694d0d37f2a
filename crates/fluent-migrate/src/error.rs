//! Error types for the schema builders.

/// Errors that can occur while building or executing schema changes.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A chain method was invoked in a context that does not support it.
    #[error("`{operation}` is only available in an {context} context")]
    InvalidContext {
        /// The operation that was invoked.
        operation: &'static str,
        /// The context that would support it.
        context: &'static str,
    },

    /// An index was finalized without a target table.
    #[error("table name is required for index '{index}'; use `.on(table)` to specify it")]
    IndexMissingTable {
        /// Name of the index being built.
        index: String,
    },

    /// An index was finalized without any columns.
    #[error("at least one column is required for index '{index}'; use `.column(name)` to specify columns")]
    IndexMissingColumns {
        /// Name of the index being built.
        index: String,
    },

    /// Error surfaced by the underlying driver, propagated unmodified.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
