use super::{literal, Dialect};

use indexmap::IndexMap;
use rowpack_core::{
    err,
    stmt::{Value, ValueKind},
    Error, Result,
};

use std::sync::Arc;

/// A literal writer for one value kind: pure, stateless and shared across
/// threads.
pub(crate) type MapperFn = dyn Fn(&Value, &mut String) -> Result<()> + Send + Sync;

/// Per-dialect registry of literal writers, keyed by value kind.
///
/// Lookup uses the exact kind; enumerations fall back to their underlying
/// integer kind's mapper; anything else is an unsupported type.
pub struct TypeMappers {
    entries: IndexMap<ValueKind, Arc<MapperFn>>,
}

impl TypeMappers {
    fn empty() -> TypeMappers {
        TypeMappers {
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn insert<F>(&mut self, kind: ValueKind, mapper: F)
    where
        F: Fn(&Value, &mut String) -> Result<()> + Send + Sync + 'static,
    {
        self.entries.insert(kind, Arc::new(mapper));
    }

    pub(crate) fn lookup(&self, kind: ValueKind) -> Result<Arc<MapperFn>> {
        if let Some(mapper) = self.entries.get(&kind) {
            return Ok(mapper.clone());
        }

        if kind == ValueKind::Enum {
            if let Some(mapper) = self.entries.get(&ValueKind::enum_fallback()) {
                return Ok(mapper.clone());
            }
        }

        Err(Error::unsupported_type(kind))
    }

    pub(crate) fn mysql() -> TypeMappers {
        let mut mappers = TypeMappers::empty();
        mappers.insert_scalars();
        mappers.insert_text(Dialect::Mysql);
        mappers.insert(ValueKind::Bytes, |value, dst| {
            literal::write_bytes(bytes(value)?, dst)
        });
        mappers.insert(ValueKind::DateTime, |value, dst| match value {
            Value::DateTime(v) => literal::write_datetime(v, dst),
            other => Err(mismatch(ValueKind::DateTime, other)),
        });
        mappers.insert(ValueKind::Date, |value, dst| match value {
            Value::Date(v) => literal::write_date(v, dst),
            other => Err(mismatch(ValueKind::Date, other)),
        });
        mappers.insert(ValueKind::Time, |value, dst| match value {
            Value::Time(v) => literal::write_time(v, dst),
            other => Err(mismatch(ValueKind::Time, other)),
        });
        mappers.insert(ValueKind::Duration, |value, dst| match value {
            Value::Duration(v) => literal::write_duration(v, dst),
            other => Err(mismatch(ValueKind::Duration, other)),
        });
        mappers
    }

    pub(crate) fn postgresql() -> TypeMappers {
        // Same coverage as MySQL; only the escape grammar differs, which the
        // text writers pick up from the dialect.
        let mut mappers = TypeMappers::empty();
        mappers.insert_scalars();
        mappers.insert_text(Dialect::Postgresql);
        mappers.insert(ValueKind::Bytes, |value, dst| {
            literal::write_bytes(bytes(value)?, dst)
        });
        mappers.insert(ValueKind::DateTime, |value, dst| match value {
            Value::DateTime(v) => literal::write_datetime(v, dst),
            other => Err(mismatch(ValueKind::DateTime, other)),
        });
        mappers.insert(ValueKind::Date, |value, dst| match value {
            Value::Date(v) => literal::write_date(v, dst),
            other => Err(mismatch(ValueKind::Date, other)),
        });
        mappers.insert(ValueKind::Time, |value, dst| match value {
            Value::Time(v) => literal::write_time(v, dst),
            other => Err(mismatch(ValueKind::Time, other)),
        });
        mappers.insert(ValueKind::Duration, |value, dst| match value {
            Value::Duration(v) => literal::write_duration(v, dst),
            other => Err(mismatch(ValueKind::Duration, other)),
        });
        mappers
    }

    pub(crate) fn sqlite() -> TypeMappers {
        // SQLite's table is deliberately narrower: no separate narrow/unsigned
        // integer affinities, no hex/duration/date-only literals. Lookups for
        // the missing kinds surface `UnsupportedType`.
        let mut mappers = TypeMappers::empty();
        mappers.insert(ValueKind::Bool, |value, dst| match value {
            Value::Bool(v) => literal::write_bool(*v, dst),
            other => Err(mismatch(ValueKind::Bool, other)),
        });
        mappers.insert(ValueKind::U8, |value, dst| {
            literal::write_u64(unsigned(value)?, dst)
        });
        mappers.insert(ValueKind::I32, |value, dst| {
            literal::write_i64(signed(value)?, dst)
        });
        mappers.insert(ValueKind::I64, |value, dst| {
            literal::write_i64(signed(value)?, dst)
        });
        mappers.insert(ValueKind::F32, |value, dst| match value {
            Value::F32(v) => literal::write_f32(*v, dst),
            other => Err(mismatch(ValueKind::F32, other)),
        });
        mappers.insert(ValueKind::F64, |value, dst| match value {
            Value::F64(v) => literal::write_f64(*v, dst),
            other => Err(mismatch(ValueKind::F64, other)),
        });
        mappers.insert(ValueKind::Char, |value, dst| match value {
            Value::Char(v) => literal::write_char(Dialect::Sqlite, *v, dst),
            other => Err(mismatch(ValueKind::Char, other)),
        });
        mappers.insert(ValueKind::String, |value, dst| match value {
            Value::String(v) => literal::write_str(Dialect::Sqlite, v, dst),
            other => Err(mismatch(ValueKind::String, other)),
        });
        mappers.insert(ValueKind::Uuid, |value, dst| match value {
            Value::Uuid(v) => literal::write_guid(v, dst),
            other => Err(mismatch(ValueKind::Uuid, other)),
        });
        mappers.insert(ValueKind::DateTime, |value, dst| match value {
            Value::DateTime(v) => literal::write_datetime(v, dst),
            other => Err(mismatch(ValueKind::DateTime, other)),
        });
        mappers
    }

    /// Mappers shared verbatim between the MySQL and PostgreSQL tables.
    fn insert_scalars(&mut self) {
        self.insert(ValueKind::Bool, |value, dst| match value {
            Value::Bool(v) => literal::write_bool(*v, dst),
            other => Err(mismatch(ValueKind::Bool, other)),
        });
        for kind in [
            ValueKind::I8,
            ValueKind::I16,
            ValueKind::I32,
            ValueKind::I64,
        ] {
            self.insert(kind, move |value, dst| {
                literal::write_i64(signed(value)?, dst)
            });
        }
        for kind in [
            ValueKind::U8,
            ValueKind::U16,
            ValueKind::U32,
            ValueKind::U64,
        ] {
            self.insert(kind, move |value, dst| {
                literal::write_u64(unsigned(value)?, dst)
            });
        }
        self.insert(ValueKind::F32, |value, dst| match value {
            Value::F32(v) => literal::write_f32(*v, dst),
            other => Err(mismatch(ValueKind::F32, other)),
        });
        self.insert(ValueKind::F64, |value, dst| match value {
            Value::F64(v) => literal::write_f64(*v, dst),
            other => Err(mismatch(ValueKind::F64, other)),
        });
        self.insert(ValueKind::Uuid, |value, dst| match value {
            Value::Uuid(v) => literal::write_guid(v, dst),
            other => Err(mismatch(ValueKind::Uuid, other)),
        });
    }

    fn insert_text(&mut self, dialect: Dialect) {
        self.insert(ValueKind::Char, move |value, dst| match value {
            Value::Char(v) => literal::write_char(dialect, *v, dst),
            other => Err(mismatch(ValueKind::Char, other)),
        });
        self.insert(ValueKind::String, move |value, dst| match value {
            Value::String(v) => literal::write_str(dialect, v, dst),
            other => Err(mismatch(ValueKind::String, other)),
        });
    }
}

impl std::fmt::Debug for TypeMappers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

fn mismatch(expected: ValueKind, value: &Value) -> Error {
    err!(
        "type mapper for {expected:?} received a {:?} value",
        value.kind()
    )
}

fn signed(value: &Value) -> Result<i64> {
    match value {
        Value::I8(v) => Ok(*v as i64),
        Value::I16(v) => Ok(*v as i64),
        Value::I32(v) => Ok(*v as i64),
        Value::I64(v) => Ok(*v),
        Value::Enum(v) => Ok(v.value),
        other => Err(err!("expected a signed integer, got {:?}", other.kind())),
    }
}

fn unsigned(value: &Value) -> Result<u64> {
    match value {
        Value::U8(v) => Ok(*v as u64),
        Value::U16(v) => Ok(*v as u64),
        Value::U32(v) => Ok(*v as u64),
        Value::U64(v) => Ok(*v),
        other => Err(err!("expected an unsigned integer, got {:?}", other.kind())),
    }
}

fn bytes(value: &Value) -> Result<&[u8]> {
    match value {
        Value::Bytes(v) => Ok(v),
        other => Err(err!("expected raw bytes, got {:?}", other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup() {
        let mappers = TypeMappers::mysql();
        let mapper = mappers.lookup(ValueKind::I16).unwrap();

        let mut out = String::new();
        mapper(&Value::I16(-17084), &mut out).unwrap();
        assert_eq!(out, "-17084");
    }

    #[test]
    fn enum_falls_back_to_underlying_integer() {
        let mappers = TypeMappers::mysql();
        let mapper = mappers.lookup(ValueKind::Enum).unwrap();

        let mut out = String::new();
        mapper(&Value::Enum(rowpack_core::stmt::ValueEnum::new(3)), &mut out).unwrap();
        assert_eq!(out, "3");
    }

    #[test]
    fn sqlite_rejects_unregistered_kinds() {
        let mappers = TypeMappers::sqlite();
        for kind in [
            ValueKind::I8,
            ValueKind::I16,
            ValueKind::U16,
            ValueKind::U32,
            ValueKind::U64,
            ValueKind::Bytes,
            ValueKind::Duration,
            ValueKind::Date,
            ValueKind::Time,
        ] {
            let err = mappers.lookup(kind).err().unwrap();
            assert!(err.is_unsupported_type(), "{kind:?} should be unsupported");
        }
    }

    #[test]
    fn mismatched_value_is_reported() {
        let mappers = TypeMappers::mysql();
        let mapper = mappers.lookup(ValueKind::String).unwrap();

        let mut out = String::new();
        assert!(mapper(&Value::Bool(true), &mut out).is_err());
    }
}
