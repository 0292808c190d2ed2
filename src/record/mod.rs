//! Relation and rule performance records, decoded from positional JSON rows.

pub mod decode;
pub mod row;

pub use decode::{DecodeError, decode_relation, decode_rule, decode_table};
pub use row::{RelationRecord, RuleRecord};
