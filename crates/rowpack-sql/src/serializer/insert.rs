use super::{Comma, Dialect, Formatter, Ident, ParamBag, Params, RowMapper, Serializer, SqlCommand, ToSql};

use rowpack_core::{
    schema::{Column, Table, TableId},
    stmt::ValueRecord,
    Error, ExecutionFlags, Result,
};

/// Caller-facing knobs for one bulk insert.
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertOptions<'a> {
    pub flags: ExecutionFlags,

    /// Explicit update-set for the conflict footer. When set, this list
    /// replaces the default non-key rule entirely.
    pub columns_to_update: Option<&'a [&'a str]>,

    /// The unique constraint a PostgreSQL upsert resolves against.
    pub constraint_name: Option<&'a str>,
}

/// A resolved bulk insert: the table, the column set shared by header and
/// every row, and the conflict footer inputs. Constructing one performs all
/// eager validation, so serialization cannot fail halfway through on bad
/// inputs.
pub struct BulkInsert<'a> {
    pub(super) table: &'a Table,
    pub(super) columns: Vec<&'a Column>,
    pub(super) update_set: Vec<&'a Column>,
    pub(super) flags: ExecutionFlags,
    pub(super) constraint_name: Option<&'a str>,
}

impl<'a> BulkInsert<'a> {
    pub(super) fn resolve(
        table: &'a Table,
        dialect: Dialect,
        rows: &[ValueRecord],
        options: &InsertOptions<'a>,
    ) -> Result<BulkInsert<'a>> {
        if rows.is_empty() {
            return Err(Error::invalid_statement(format!(
                "no rows to insert into `{}`",
                table.name
            )));
        }

        let insert_generated_keys = options
            .flags
            .contains(ExecutionFlags::INSERT_GENERATED_KEYS);

        // Every non-generated column participates; generated key columns are
        // opted back in by the flag. Generated non-key columns never are.
        let columns: Vec<&Column> = table
            .columns
            .iter()
            .filter(|column| !column.generated || (column.primary_key && insert_generated_keys))
            .collect();

        if columns.is_empty() {
            return Err(Error::invalid_statement(format!(
                "`{}` has no insertable columns",
                table.name
            )));
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::invalid_statement(format!(
                    "row {} has {} values, expected {}",
                    index + 1,
                    row.len(),
                    columns.len()
                )));
            }
        }

        let update_set: Vec<&Column> = match options.columns_to_update {
            Some(names) if !names.is_empty() => names
                .iter()
                .map(|name| {
                    table
                        .columns
                        .iter()
                        .find(|column| column.name == *name)
                        .ok_or_else(|| {
                            Error::invalid_statement(format!(
                                "unknown update column `{name}` on `{}`",
                                table.name
                            ))
                        })
                })
                .collect::<Result<_>>()?,
            _ if options.flags.contains(ExecutionFlags::UPDATE_IF_EXISTS) => columns
                .iter()
                .copied()
                .filter(|column| !column.primary_key)
                .collect(),
            _ => Vec::new(),
        };

        if dialect.is_postgresql() && !update_set.is_empty() {
            if options.flags.contains(ExecutionFlags::IGNORE_ERRORS) {
                return Err(Error::dialect_constraint(
                    "PostgreSQL cannot combine an update-set with error ignoring",
                ));
            }
            if options.constraint_name.map_or(true, str::is_empty) {
                return Err(Error::dialect_constraint(
                    "PostgreSQL upserts require naming the unique constraint to resolve against",
                ));
            }
        }

        Ok(BulkInsert {
            table,
            columns,
            update_set,
            flags: options.flags,
            constraint_name: options.constraint_name,
        })
    }

    fn write_header<P: Params>(&self, f: &mut Formatter<'_, P>) {
        let ignore = (self.flags.contains(ExecutionFlags::IGNORE_ERRORS)
            && f.serializer.dialect().supports_insert_ignore())
        .then_some(" IGNORE");
        let table_name = Ident(&self.table.name);
        let columns = Comma(self.columns.iter().map(|column| Ident(&column.name)));

        fmt!(f, "INSERT" ignore " INTO " table_name " (" columns ") VALUES\n");
    }

    fn write_footer<P: Params>(&self, f: &mut Formatter<'_, P>) {
        match f.serializer.dialect() {
            Dialect::Mysql | Dialect::Sqlite => {
                if !self.update_set.is_empty() {
                    fmt!(f, "\nON DUPLICATE KEY UPDATE ");
                    let mut s = "";
                    for column in &self.update_set {
                        fmt!(f, s Ident(&column.name) " = VALUES(" Ident(&column.name) ")");
                        s = ", ";
                    }
                }
            }
            Dialect::Postgresql => {
                if !self.update_set.is_empty() {
                    // Resolution rejected upserts without a constraint name.
                    let constraint = Ident(self.constraint_name.unwrap_or(""));
                    fmt!(f, "\nON CONFLICT ON CONSTRAINT " constraint " DO UPDATE SET ");
                    let mut s = "";
                    for column in &self.update_set {
                        fmt!(f, s Ident(&column.name) " = EXCLUDED." Ident(&column.name));
                        s = ", ";
                    }
                } else if self.flags.contains(ExecutionFlags::IGNORE_ERRORS) {
                    fmt!(f, "\nON CONFLICT DO NOTHING");
                }
            }
        }
    }
}

impl Serializer<'_> {
    /// Builds one complete multi-row `INSERT` command.
    ///
    /// The chosen row mapper decides between inline literals and
    /// placeholders; column resolution, header, footer and validation are
    /// shared by both strategies.
    pub fn build_insert<M: RowMapper>(
        &self,
        table: impl Into<TableId>,
        rows: &[ValueRecord],
        options: &InsertOptions<'_>,
        row_mapper: &M,
    ) -> Result<SqlCommand> {
        let table = self.schema.table(table.into());
        let stmt = BulkInsert::resolve(table, self.dialect(), rows, options)?;

        let mut params = ParamBag::new();
        let mut text = String::new();

        {
            let mut f = Formatter {
                serializer: self,
                dst: &mut text,
                params: &mut params,
            };

            stmt.write_header(&mut f);
            row_mapper.map_rows(&stmt, rows, &mut f)?;
            stmt.write_footer(&mut f);
            f.dst.push(';');
        }

        tracing::debug!(
            table = %stmt.table.name,
            rows = rows.len(),
            params = params.len(),
            bytes = text.len(),
            "built bulk insert statement"
        );

        Ok(SqlCommand { text, params })
    }
}
