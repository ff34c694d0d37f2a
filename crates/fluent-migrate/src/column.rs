//! Fluent column accumulation.
//!
//! A single [`ColumnBuilder`] serves both the create-table and alter-table
//! contexts. The capabilities of the surrounding builder are expressed
//! through [`ColumnHost`]: `column`/`add_column` work everywhere, while
//! `drop_column`/`alter_column` delegate to the parent in an alter chain
//! and fail with a context error in a create chain.

use async_trait::async_trait;

use crate::error::Result;
use crate::schema::{
    ColumnSchema, ColumnType, DefaultValue, ForeignKeyAction, ForeignKeyRef, GenerationStrategy,
    Length,
};

/// Shared fluent setters over an accumulating [`ColumnSchema`].
///
/// Type setters are mutually exclusive in effect but never error: calling
/// two leaves the later one's type (last-write-wins). Implemented by
/// [`ColumnSchema`] itself and by both column builders.
pub trait ColumnOptions: Sized {
    /// Access to the accumulating column definition.
    #[doc(hidden)]
    fn options_mut(&mut self) -> &mut ColumnSchema;

    #[doc(hidden)]
    #[must_use]
    fn with_type(mut self, column_type: ColumnType) -> Self {
        self.options_mut().column_type = Some(column_type);
        self
    }

    /// Declares the column as `int`.
    #[must_use]
    fn int(self) -> Self {
        self.with_type(ColumnType::Int)
    }

    /// Declares the column as `integer`.
    #[must_use]
    fn integer(self) -> Self {
        self.with_type(ColumnType::Integer)
    }

    /// Declares the column as `tinyint`.
    #[must_use]
    fn tinyint(self) -> Self {
        self.with_type(ColumnType::TinyInt)
    }

    /// Declares the column as `smallint`.
    #[must_use]
    fn smallint(self) -> Self {
        self.with_type(ColumnType::SmallInt)
    }

    /// Declares the column as `mediumint`.
    #[must_use]
    fn mediumint(self) -> Self {
        self.with_type(ColumnType::MediumInt)
    }

    /// Declares the column as `bigint`.
    #[must_use]
    fn bigint(self) -> Self {
        self.with_type(ColumnType::BigInt)
    }

    /// Declares the column as `float`.
    #[must_use]
    fn float(self) -> Self {
        self.with_type(ColumnType::Float)
    }

    /// Declares the column as `double`.
    #[must_use]
    fn double(self) -> Self {
        self.with_type(ColumnType::Double)
    }

    /// Declares the column as `real`.
    #[must_use]
    fn real(self) -> Self {
        self.with_type(ColumnType::Real)
    }

    /// Declares a `decimal` column with precision and scale.
    #[must_use]
    fn decimal(mut self, precision: u32, scale: u32) -> Self {
        {
            let options = self.options_mut();
            options.column_type = Some(ColumnType::Decimal);
            options.precision = Some(precision);
            options.scale = Some(scale);
        }
        self
    }

    /// Declares a `numeric` column with precision and scale.
    #[must_use]
    fn numeric(mut self, precision: u32, scale: u32) -> Self {
        {
            let options = self.options_mut();
            options.column_type = Some(ColumnType::Numeric);
            options.precision = Some(precision);
            options.scale = Some(scale);
        }
        self
    }

    /// Declares a `char` column with the given length.
    #[must_use]
    fn char<L: Into<Length>>(mut self, length: L) -> Self {
        {
            let options = self.options_mut();
            options.column_type = Some(ColumnType::Char);
            options.length = Some(length.into().into_inner());
        }
        self
    }

    /// Declares a `varchar` column with the given length.
    #[must_use]
    fn varchar<L: Into<Length>>(mut self, length: L) -> Self {
        {
            let options = self.options_mut();
            options.column_type = Some(ColumnType::Varchar);
            options.length = Some(length.into().into_inner());
        }
        self
    }

    /// Declares the column as `text`.
    #[must_use]
    fn text(self) -> Self {
        self.with_type(ColumnType::Text)
    }

    /// Declares the column as `blob`.
    #[must_use]
    fn blob(self) -> Self {
        self.with_type(ColumnType::Blob)
    }

    /// Declares the column as `boolean`.
    #[must_use]
    fn boolean(self) -> Self {
        self.with_type(ColumnType::Boolean)
    }

    /// Declares the column as `json`.
    #[must_use]
    fn json(self) -> Self {
        self.with_type(ColumnType::Json)
    }

    /// Declares the column as `uuid`.
    #[must_use]
    fn uuid(self) -> Self {
        self.with_type(ColumnType::Uuid)
    }

    /// Declares the column as `date`.
    #[must_use]
    fn date(self) -> Self {
        self.with_type(ColumnType::Date)
    }

    /// Declares the column as `time`.
    #[must_use]
    fn time(self) -> Self {
        self.with_type(ColumnType::Time)
    }

    /// Declares the column as `datetime`.
    #[must_use]
    fn datetime(self) -> Self {
        self.with_type(ColumnType::DateTime)
    }

    /// Declares the column as `timestamp`.
    #[must_use]
    fn timestamp(self) -> Self {
        self.with_type(ColumnType::Timestamp)
    }

    /// Declares the column with a raw type name, e.g. one taken from
    /// [`Dialect::supported_types`](crate::dialect::Dialect::supported_types).
    #[must_use]
    fn of_type<T: Into<ColumnType>>(self, column_type: T) -> Self {
        self.with_type(column_type.into())
    }

    /// Marks the column PRIMARY KEY.
    #[must_use]
    fn primary(mut self) -> Self {
        self.options_mut().is_primary = true;
        self
    }

    /// Marks the column as auto-generated with an incrementing value.
    ///
    /// Sets the generation flags only; the declared type is left as-is.
    #[must_use]
    fn auto_increment(mut self) -> Self {
        {
            let options = self.options_mut();
            options.is_generated = true;
            options.generation_strategy = Some(GenerationStrategy::Increment);
        }
        self
    }

    /// Allows NULL values in the column.
    #[must_use]
    fn nullable(mut self) -> Self {
        self.options_mut().is_nullable = Some(true);
        self
    }

    /// Forbids NULL values in the column.
    #[must_use]
    fn not_null(mut self) -> Self {
        self.options_mut().is_nullable = Some(false);
        self
    }

    /// Marks the column UNIQUE.
    #[must_use]
    fn unique(mut self) -> Self {
        self.options_mut().is_unique = true;
        self
    }

    /// Sets the column default.
    #[must_use]
    fn default<V: Into<DefaultValue>>(mut self, value: V) -> Self {
        self.options_mut().default = Some(value.into());
        self
    }
}

impl ColumnOptions for ColumnSchema {
    fn options_mut(&mut self) -> &mut ColumnSchema {
        self
    }
}

/// Capability interface of the builders that own columns.
///
/// Implemented by the create-table and alter-table builders. The alter
/// variant supports dropping and altering columns; the create variant
/// answers those with a context error.
#[async_trait]
pub trait ColumnHost: Sized + Send {
    /// Builder returned when altering another column from this host.
    type AlterColumn;

    /// Registers a finished column (and its optional reference).
    #[doc(hidden)]
    fn adopt(&mut self, column: ColumnSchema, reference: Option<ForeignKeyRef>);

    #[doc(hidden)]
    fn host_drop_column(self, name: String) -> Result<Self>;

    #[doc(hidden)]
    fn host_alter_column(self, name: String) -> Result<Self::AlterColumn>;

    #[doc(hidden)]
    async fn host_execute(self) -> Result<()>;
}

/// Accumulates one column definition inside a create- or alter-table chain.
///
/// Navigation methods finish the current column, hand it to the owning
/// builder, and continue the chain from there.
pub struct ColumnBuilder<P> {
    parent: P,
    column: ColumnSchema,
    reference: Option<ForeignKeyRef>,
}

impl<P: ColumnHost> ColumnBuilder<P> {
    pub(crate) fn new(parent: P, name: impl Into<String>) -> Self {
        Self {
            parent,
            column: ColumnSchema::new(name),
            reference: None,
        }
    }

    fn commit(self) -> P {
        let mut parent = self.parent;
        parent.adopt(self.column, self.reference);
        parent
    }

    /// References a column in another table, attaching a foreign key to
    /// this column.
    #[must_use]
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.reference = Some(ForeignKeyRef {
            table: table.into(),
            column: column.into(),
            on_delete: None,
            on_update: None,
        });
        self
    }

    /// Sets the ON DELETE action of a previously attached reference.
    ///
    /// Without a prior [`references`](Self::references) call this is a
    /// no-op.
    #[must_use]
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        if let Some(reference) = self.reference.as_mut() {
            reference.on_delete = Some(action);
        }
        self
    }

    /// Sets the ON UPDATE action of a previously attached reference.
    ///
    /// Without a prior [`references`](Self::references) call this is a
    /// no-op.
    #[must_use]
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        if let Some(reference) = self.reference.as_mut() {
            reference.on_update = Some(action);
        }
        self
    }

    /// Finishes this column and begins the next one on the owning builder.
    #[must_use]
    pub fn column(self, name: impl Into<String>) -> ColumnBuilder<P> {
        let parent = self.commit();
        ColumnBuilder::new(parent, name)
    }

    /// Alias for [`column`](Self::column); both verbs work in either
    /// context.
    #[must_use]
    pub fn add_column(self, name: impl Into<String>) -> ColumnBuilder<P> {
        self.column(name)
    }

    /// Finishes this column and registers a column drop on the owning
    /// builder.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-context error in a create-table chain.
    pub fn drop_column(self, name: impl Into<String>) -> Result<P> {
        self.commit().host_drop_column(name.into())
    }

    /// Finishes this column and begins altering another column.
    ///
    /// # Errors
    ///
    /// Fails with an invalid-context error in a create-table chain.
    pub fn alter_column(self, name: impl Into<String>) -> Result<P::AlterColumn> {
        self.commit().host_alter_column(name.into())
    }

    /// Finalizes the owning builder.
    ///
    /// # Errors
    ///
    /// Propagates any error from the underlying driver.
    pub async fn execute(self) -> Result<()> {
        self.commit().host_execute().await
    }
}

impl<P> ColumnOptions for ColumnBuilder<P> {
    fn options_mut(&mut self) -> &mut ColumnSchema {
        &mut self.column
    }
}
