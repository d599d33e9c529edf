/// An enumeration payload.
///
/// Enumerations are encoded through their underlying integer representation;
/// the registry resolves them via the signed 64-bit mapper when no mapper is
/// registered for [`ValueKind::Enum`](super::ValueKind::Enum) itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueEnum {
    pub value: i64,
}

impl ValueEnum {
    pub const fn new(value: i64) -> ValueEnum {
        ValueEnum { value }
    }
}

impl From<i64> for ValueEnum {
    fn from(value: i64) -> Self {
        ValueEnum { value }
    }
}
