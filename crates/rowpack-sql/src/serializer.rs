#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod dialect;
pub use dialect::Dialect;

mod ident;
use ident::Ident;

mod literal;

mod mapper;
pub use mapper::TypeMappers;
use mapper::MapperFn;

mod params;
pub use params::{NoParams, ParamBag, Params, Placeholder};

mod row;
pub use row::{LiteralRowMapper, ParamRowMapper, RowMapper};
use row::RowEncoderCache;

mod insert;
pub use insert::{BulkInsert, InsertOptions};

mod chunk;

use rowpack_core::{
    schema::Schema,
    stmt::{Value, ValueKind},
    Result,
};

/// A finished command: statement text plus the parameter bag to bind at
/// execution time. The bag is empty in literal mode.
#[derive(Debug, PartialEq)]
pub struct SqlCommand {
    pub text: String,
    pub params: ParamBag,
}

/// A dialect's capability surface: its type-mapper registry and the compiled
/// row-encoder cache.
///
/// One adapter per dialect is constructed at startup and shared by reference
/// across threads. Registering additional type mappers takes `&mut self`;
/// mutation is not expected to race with reads.
pub struct Adapter {
    dialect: Dialect,
    mappers: TypeMappers,
    row_cache: RowEncoderCache,
}

impl Adapter {
    pub fn mysql() -> Adapter {
        Adapter::new(Dialect::Mysql, TypeMappers::mysql())
    }

    pub fn postgresql() -> Adapter {
        Adapter::new(Dialect::Postgresql, TypeMappers::postgresql())
    }

    pub fn sqlite() -> Adapter {
        Adapter::new(Dialect::Sqlite, TypeMappers::sqlite())
    }

    fn new(dialect: Dialect, mappers: TypeMappers) -> Adapter {
        Adapter {
            dialect,
            mappers,
            row_cache: RowEncoderCache::new(),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Registers a custom literal writer for `kind`, shadowing the built-in
    /// one for subsequent lookups.
    ///
    /// Row encoders already compiled and cached keep the mapper they were
    /// compiled with; registration is not retroactive.
    pub fn register_type_mapper<F>(&mut self, kind: ValueKind, mapper: F)
    where
        F: Fn(&Value, &mut String) -> Result<()> + Send + Sync + 'static,
    {
        self.mappers.insert(kind, mapper);
    }
}

impl std::fmt::Debug for Adapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Adapter")
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}

/// Serializes bulk statements against a schema for one dialect.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which statements are serialized.
    schema: &'a Schema,

    /// The adapter carrying dialect behavior and mapper registries.
    adapter: &'a Adapter,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema, adapter: &'a Adapter) -> Serializer<'a> {
        Serializer { schema, adapter }
    }

    pub(crate) fn dialect(&self) -> Dialect {
        self.adapter.dialect
    }
}

/// Write state threaded through every `ToSql` fragment.
pub struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}
