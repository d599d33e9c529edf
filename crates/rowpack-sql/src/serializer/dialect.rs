use crate::encode::escape;

/// The target SQL engine's syntax for literals, placeholders and
/// insert-conflict handling.
///
/// A closed set of variants; every dialect-specific decision in the
/// serializer dispatches on this enum rather than on open-ended trait
/// objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Dialect {
    pub const fn is_mysql(self) -> bool {
        matches!(self, Dialect::Mysql)
    }

    pub const fn is_postgresql(self) -> bool {
        matches!(self, Dialect::Postgresql)
    }

    pub const fn is_sqlite(self) -> bool {
        matches!(self, Dialect::Sqlite)
    }

    /// The literal emitted for absent values.
    pub(crate) const fn null_str(self) -> &'static str {
        "NULL"
    }

    /// Prefix of parameter placeholder tokens.
    pub(crate) const fn parameter_prefix(self) -> char {
        '@'
    }

    /// Opening and closing quote for string and char literals.
    ///
    /// PostgreSQL gets the extended `E'…'` form because its escape table
    /// uses backslash sequences, which plain literals only honor when
    /// `standard_conforming_strings` is off.
    pub(crate) const fn string_quotes(self) -> (&'static str, &'static str) {
        match self {
            Dialect::Postgresql => ("E'", "'"),
            Dialect::Mysql | Dialect::Sqlite => ("'", "'"),
        }
    }

    /// The dialect's character escape table.
    pub(crate) fn escape_table(self) -> fn(char) -> Option<&'static str> {
        match self {
            Dialect::Mysql => escape::escape_mysql,
            Dialect::Postgresql => escape::escape_postgresql,
            Dialect::Sqlite => escape::escape_sqlite,
        }
    }

    /// Whether `INSERT` takes an ` IGNORE` modifier in the header.
    pub(crate) const fn supports_insert_ignore(self) -> bool {
        matches!(self, Dialect::Mysql | Dialect::Sqlite)
    }
}
