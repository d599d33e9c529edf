use super::{Formatter, ToSql};

use indexmap::IndexMap;
use rowpack_core::stmt::Value;

/// Sink for parameter values produced by the parameterized row mapper.
///
/// The literal strategy never pushes; [`NoParams`] exists for callers that
/// serialize without a bag at all.
pub trait Params {
    fn push(&mut self, name: String, value: &Value);
}

/// Ordered bag of placeholder-name / value pairs, handed back to the caller
/// for binding at execution time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParamBag {
    entries: IndexMap<String, Value>,
}

impl ParamBag {
    pub fn new() -> ParamBag {
        ParamBag::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Entries in the order they were pushed.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Params for ParamBag {
    fn push(&mut self, name: String, value: &Value) {
        self.entries.insert(name, value.clone());
    }
}

/// Discards every parameter.
pub struct NoParams;

impl Params for NoParams {
    fn push(&mut self, _name: String, _value: &Value) {}
}

/// Placeholder token for one column of one row, named after the column and
/// the 1-based row index.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder<'a> {
    pub column: &'a str,
    pub line: usize,
}

impl Placeholder<'_> {
    /// The bag key: `{column}_{line}`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.column, self.line)
    }
}

impl ToSql for Placeholder<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        let prefix = f.serializer.dialect().parameter_prefix();
        let _ = write!(f.dst, "{prefix}{}_{}", self.column, self.line);
    }
}
