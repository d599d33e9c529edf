use super::{Column, ColumnId};

#[derive(Debug, PartialEq)]
pub struct Table {
    /// Uniquely identifies the table in the schema.
    pub id: TableId,

    /// The name of the table in the database.
    pub name: String,

    /// Column descriptors, in declaration order.
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        &self.columns[id.into().index]
    }

    /// Columns that are part of the table's primary key.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}
