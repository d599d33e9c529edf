use super::{Formatter, Params, ToSql};

/// A table, column or constraint identifier, emitted verbatim in the
/// resolver's casing.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self.0.as_ref());
    }
}
