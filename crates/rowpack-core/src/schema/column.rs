use super::TableId;
use crate::stmt::ValueKind;

use std::fmt;

#[derive(Debug, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The kind of value stored in the column.
    pub ty: ValueKind,

    /// Whether or not the column is nullable.
    pub nullable: bool,

    /// True if the column is part of the table's primary key.
    pub primary_key: bool,

    /// True if the database computes or assigns this column's value itself.
    /// Generated columns are excluded from inserts unless the caller opts
    /// key columns back in.
    pub generated: bool,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
