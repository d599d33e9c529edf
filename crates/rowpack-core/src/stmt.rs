mod value;
pub use value::Value;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_kind;
pub use value_kind::ValueKind;

mod value_record;
pub use value_record::ValueRecord;
