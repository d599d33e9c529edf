use super::{ValueEnum, ValueKind, ValueRecord};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use uuid::Uuid;

/// A single field value, as handed over by the caller's record mapping.
///
/// The set of variants is closed; the type-mapper registries key off the
/// matching [`ValueKind`] discriminant.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed integers
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    /// Unsigned integers
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    /// Floating point values
    F32(f32),
    F64(f64),

    /// A single character
    Char(char),

    /// String value
    String(String),

    /// Raw bytes, emitted as a hexadecimal literal
    Bytes(Vec<u8>),

    /// A GUID in RFC 4122 canonical byte order
    Uuid(Uuid),

    /// Calendar date and time of day, no offset
    DateTime(NaiveDateTime),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// A signed duration
    Duration(TimeDelta),

    /// Value of an enumerated type, carrying its integer representation
    Enum(ValueEnum),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a value representing null.
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The discriminant used for type-mapper lookup.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Char(_) => ValueKind::Char,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Uuid(_) => ValueKind::Uuid,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Duration(_) => ValueKind::Duration,
            Self::Enum(_) => ValueKind::Enum,
            Self::Null => ValueKind::Null,
        }
    }

    pub fn record_from_vec(fields: Vec<Self>) -> ValueRecord {
        ValueRecord::from_vec(fields)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i8> for Value {
    fn from(src: i8) -> Self {
        Self::I8(src)
    }
}

impl From<i16> for Value {
    fn from(src: i16) -> Self {
        Self::I16(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I32(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u8> for Value {
    fn from(src: u8) -> Self {
        Self::U8(src)
    }
}

impl From<u16> for Value {
    fn from(src: u16) -> Self {
        Self::U16(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::U32(src)
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        Self::U64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F32(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<char> for Value {
    fn from(src: char) -> Self {
        Self::Char(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(src: NaiveDateTime) -> Self {
        Self::DateTime(src)
    }
}

impl From<NaiveDate> for Value {
    fn from(src: NaiveDate) -> Self {
        Self::Date(src)
    }
}

impl From<NaiveTime> for Value {
    fn from(src: NaiveTime) -> Self {
        Self::Time(src)
    }
}

impl From<TimeDelta> for Value {
    fn from(src: TimeDelta) -> Self {
        Self::Duration(src)
    }
}

impl From<ValueEnum> for Value {
    fn from(src: ValueEnum) -> Self {
        Self::Enum(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(src: Option<T>) -> Self {
        match src {
            Some(v) => Value::from(v),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::from(17i16).kind(), ValueKind::I16);
        assert_eq!(Value::from("hi").kind(), ValueKind::String);
        assert_eq!(Value::Null.kind(), ValueKind::Null);
    }

    #[test]
    fn option_maps_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3i32)), Value::I32(3));
    }
}
