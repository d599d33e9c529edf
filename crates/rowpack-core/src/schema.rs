mod column;
pub use column::{Column, ColumnId};

mod table;
pub use table::{Table, TableId};

/// The set of tables an external resolver has described.
///
/// The resolver is called once per entity type; the descriptors it returns
/// are immutable for the lifetime of the schema. Column order is the
/// resolver's declaration order and is preserved everywhere downstream.
#[derive(Debug, Default, PartialEq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn from_tables(tables: Vec<Table>) -> Schema {
        Schema { tables }
    }

    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        &self.tables[id.table.0].columns[id.index]
    }
}
