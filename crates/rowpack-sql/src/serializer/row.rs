use super::{Adapter, BulkInsert, Formatter, MapperFn, Params, Placeholder, ToSql, TypeMappers};

use rowpack_core::{schema::TableId, stmt::ValueRecord, Result};

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Streams the `(value, value, …)` body of a bulk insert.
///
/// Implementations must emit columns in the statement's column order with
/// `", "` between values and `",\n"` between rows, so the header's column
/// list stays aligned with every row.
pub trait RowMapper {
    fn map_rows<P: Params>(
        &self,
        stmt: &BulkInsert<'_>,
        rows: &[ValueRecord],
        f: &mut Formatter<'_, P>,
    ) -> Result<()>;
}

/// Inline-literal strategy: values are encoded straight into the statement
/// text through a compiled, cached row encoder. The parameter bag is never
/// touched.
pub struct LiteralRowMapper;

impl RowMapper for LiteralRowMapper {
    fn map_rows<P: Params>(
        &self,
        stmt: &BulkInsert<'_>,
        rows: &[ValueRecord],
        f: &mut Formatter<'_, P>,
    ) -> Result<()> {
        let encoder = f.serializer.adapter.row_encoder(stmt)?;

        let mut separator = "";
        for row in rows {
            f.dst.push_str(separator);
            f.dst.push('(');
            encoder.encode(row, f.dst)?;
            f.dst.push(')');
            separator = ",\n";
        }

        Ok(())
    }
}

/// Placeholder strategy: each value becomes a `@{column}_{line}` token and a
/// bag entry; nothing is compiled or cached.
pub struct ParamRowMapper;

impl RowMapper for ParamRowMapper {
    fn map_rows<P: Params>(
        &self,
        stmt: &BulkInsert<'_>,
        rows: &[ValueRecord],
        f: &mut Formatter<'_, P>,
    ) -> Result<()> {
        let mut row_separator = "";
        for (index, row) in rows.iter().enumerate() {
            f.dst.push_str(row_separator);
            f.dst.push('(');

            let mut separator = "";
            for (column, value) in stmt.columns.iter().zip(row.iter()) {
                let placeholder = Placeholder {
                    column: &column.name,
                    line: index + 1,
                };
                f.params.push(placeholder.name(), value);
                fmt!(f, separator placeholder);
                separator = ", ";
            }

            f.dst.push(')');
            row_separator = ",\n";
        }

        Ok(())
    }
}

/// One row's compiled literal writer: the resolved mapper per column, in
/// column order, plus the dialect's null literal.
pub(super) struct RowEncoder {
    null_str: &'static str,
    mappers: Vec<Arc<MapperFn>>,
}

impl RowEncoder {
    fn compile(stmt: &BulkInsert<'_>, mappers: &TypeMappers, null_str: &'static str) -> Result<RowEncoder> {
        let mappers = stmt
            .columns
            .iter()
            .map(|column| mappers.lookup(column.ty))
            .collect::<Result<_>>()?;

        Ok(RowEncoder { null_str, mappers })
    }

    fn encode(&self, row: &ValueRecord, dst: &mut String) -> Result<()> {
        let mut separator = "";
        for (mapper, value) in self.mappers.iter().zip(row.iter()) {
            dst.push_str(separator);
            if value.is_null() {
                dst.push_str(self.null_str);
            } else {
                mapper(value, dst)?;
            }
            separator = ", ";
        }

        Ok(())
    }
}

#[derive(PartialEq, Eq, Hash)]
struct EncoderKey {
    table: TableId,
    columns: Vec<usize>,
}

impl EncoderKey {
    fn of(stmt: &BulkInsert<'_>) -> EncoderKey {
        EncoderKey {
            table: stmt.table.id,
            columns: stmt.columns.iter().map(|column| column.id.index).collect(),
        }
    }
}

/// Append-only cache of compiled row encoders, keyed by table and column
/// set. The owning adapter fixes the dialect.
///
/// Insert-if-absent: when two threads compile the same key concurrently one
/// write wins, which is benign because compilation is deterministic.
pub(super) struct RowEncoderCache {
    entries: RwLock<HashMap<EncoderKey, Arc<RowEncoder>>>,
}

impl RowEncoderCache {
    pub(super) fn new() -> RowEncoderCache {
        RowEncoderCache {
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn get_or_compile(
        &self,
        stmt: &BulkInsert<'_>,
        mappers: &TypeMappers,
        null_str: &'static str,
    ) -> Result<Arc<RowEncoder>> {
        let key = EncoderKey::of(stmt);

        {
            let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(encoder) = entries.get(&key) {
                return Ok(encoder.clone());
            }
        }

        let compiled = Arc::new(RowEncoder::compile(stmt, mappers, null_str)?);

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(key).or_insert(compiled).clone())
    }
}

impl Adapter {
    pub(super) fn row_encoder(&self, stmt: &BulkInsert<'_>) -> Result<Arc<RowEncoder>> {
        self.row_cache
            .get_or_compile(stmt, &self.mappers, self.dialect.null_str())
    }
}
