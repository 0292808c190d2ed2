use serde::Serialize;

/// Performance record of one relation, as exported in `rel.json`.
///
/// Source rows are positional:
/// `[total_time, non-recursive_time, recursive_time, copy_time, tuple_count,
///   relation_name, id, source, performance_note]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationRecord {
    pub total_time: f64,
    #[serde(rename = "non-recursive_time")]
    pub non_recursive_time: f64,
    pub recursive_time: f64,
    pub copy_time: f64,
    pub tuple_count: u64,
    pub relation_name: String,
    pub id: String,
    /// Source locator of the relation declaration.
    pub source: String,
    pub performance_note: String,
}

impl RelationRecord {
    /// Number of cells in a `rel.json` row.
    pub const ARITY: usize = 9;
}

/// Performance record of one rule, as exported in `rul.json`.
///
/// Source rows are positional:
/// `[total_time, non-recursive_time, recursive_time, copy_time, tuple_count,
///   rule_name, id, relation_name, version, performance_note, source]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleRecord {
    pub total_time: f64,
    #[serde(rename = "non-recursive_time")]
    pub non_recursive_time: f64,
    pub recursive_time: f64,
    pub copy_time: f64,
    pub tuple_count: u64,
    pub rule_name: String,
    pub id: String,
    /// Name of the relation this rule derives into.
    pub relation_name: String,
    pub version: String,
    pub performance_note: String,
    pub source: String,
}

impl RuleRecord {
    /// Number of cells in a `rul.json` row.
    pub const ARITY: usize = 11;
}
