use super::{InsertOptions, RowMapper, Serializer, SqlCommand};

use rowpack_core::{schema::TableId, stmt::ValueRecord, Error, Result};

impl Serializer<'_> {
    /// Splits `rows` into fixed-size chunks and builds one command per
    /// chunk, bounding single-statement size.
    ///
    /// Purely a slicing layer over [`build_insert`](Serializer::build_insert);
    /// the per-chunk pipeline is unchanged and chunks never come out empty.
    pub fn build_insert_chunked<M: RowMapper>(
        &self,
        table: impl Into<TableId>,
        rows: &[ValueRecord],
        options: &InsertOptions<'_>,
        row_mapper: &M,
        chunk_size: usize,
    ) -> Result<Vec<SqlCommand>> {
        if chunk_size == 0 {
            return Err(Error::invalid_statement("chunk size must be non-zero"));
        }

        let table = table.into();

        rows.chunks(chunk_size)
            .map(|chunk| self.build_insert(table, chunk, options, row_mapper))
            .collect()
    }
}
