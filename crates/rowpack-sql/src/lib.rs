pub mod encode;

pub mod serializer;
pub use serializer::{
    Adapter, Dialect, InsertOptions, LiteralRowMapper, ParamBag, ParamRowMapper, Params,
    RowMapper, Serializer, SqlCommand,
};

pub use rowpack_core::{Error, ExecutionFlags, Result};
