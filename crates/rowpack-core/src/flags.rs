use std::{fmt, ops};

/// Execution flags for bulk inserts.
///
/// Flags are orthogonal bits; [`UPDATE_IF_EXISTS`](ExecutionFlags::UPDATE_IF_EXISTS)
/// and [`IGNORE_ERRORS`](ExecutionFlags::IGNORE_ERRORS) are mutually
/// exclusive on PostgreSQL, which the insert builder validates eagerly.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionFlags(u8);

impl ExecutionFlags {
    pub const NONE: ExecutionFlags = ExecutionFlags(0);

    /// Insert values into database-generated key columns instead of letting
    /// the database assign them.
    pub const INSERT_GENERATED_KEYS: ExecutionFlags = ExecutionFlags(1);

    /// Update already-existing rows on key/constraint conflict.
    pub const UPDATE_IF_EXISTS: ExecutionFlags = ExecutionFlags(1 << 1);

    /// Skip rows that fail instead of failing the statement.
    pub const IGNORE_ERRORS: ExecutionFlags = ExecutionFlags(1 << 2);

    pub const fn contains(self, other: ExecutionFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl ops::BitOr for ExecutionFlags {
    type Output = ExecutionFlags;

    fn bitor(self, rhs: ExecutionFlags) -> ExecutionFlags {
        ExecutionFlags(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for ExecutionFlags {
    fn bitor_assign(&mut self, rhs: ExecutionFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for ExecutionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        if self.contains(Self::INSERT_GENERATED_KEYS) {
            set.entry(&"INSERT_GENERATED_KEYS");
        }
        if self.contains(Self::UPDATE_IF_EXISTS) {
            set.entry(&"UPDATE_IF_EXISTS");
        }
        if self.contains(Self::IGNORE_ERRORS) {
            set.entry(&"IGNORE_ERRORS");
        }
        set.finish()
    }
}
