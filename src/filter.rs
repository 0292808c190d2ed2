//! Sparse filter criteria over loaded records.
//!
//! Every criterion is optional; an unset one matches everything. Numeric and
//! time fields match by exact equality, text fields by case-sensitive
//! substring containment. Criteria deserialize from JSON objects keyed by the
//! record field names; unknown keys are ignored.

use crate::record::{RelationRecord, RuleRecord};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RelationFilter {
    pub total_time: Option<f64>,
    #[serde(rename = "non-recursive_time")]
    pub non_recursive_time: Option<f64>,
    pub recursive_time: Option<f64>,
    pub copy_time: Option<f64>,
    pub tuple_count: Option<u64>,
    pub relation_name: Option<String>,
    pub id: Option<String>,
    pub source: Option<String>,
    pub performance_note: Option<String>,
}

impl RelationFilter {
    pub fn matches(&self, rel: &RelationRecord) -> bool {
        equals(self.total_time, rel.total_time)
            && equals(self.non_recursive_time, rel.non_recursive_time)
            && equals(self.recursive_time, rel.recursive_time)
            && equals(self.copy_time, rel.copy_time)
            && equals(self.tuple_count, rel.tuple_count)
            && contains(&self.relation_name, &rel.relation_name)
            && contains(&self.id, &rel.id)
            && contains(&self.source, &rel.source)
            && contains(&self.performance_note, &rel.performance_note)
    }

    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuleFilter {
    pub total_time: Option<f64>,
    #[serde(rename = "non-recursive_time")]
    pub non_recursive_time: Option<f64>,
    pub recursive_time: Option<f64>,
    pub copy_time: Option<f64>,
    pub tuple_count: Option<u64>,
    pub rule_name: Option<String>,
    pub id: Option<String>,
    pub relation_name: Option<String>,
    pub version: Option<String>,
    pub performance_note: Option<String>,
    pub source: Option<String>,
}

impl RuleFilter {
    pub fn matches(&self, rule: &RuleRecord) -> bool {
        equals(self.total_time, rule.total_time)
            && equals(self.non_recursive_time, rule.non_recursive_time)
            && equals(self.recursive_time, rule.recursive_time)
            && equals(self.copy_time, rule.copy_time)
            && equals(self.tuple_count, rule.tuple_count)
            && contains(&self.rule_name, &rule.rule_name)
            && contains(&self.id, &rule.id)
            && contains(&self.relation_name, &rule.relation_name)
            && contains(&self.version, &rule.version)
            && contains(&self.performance_note, &rule.performance_note)
            && contains(&self.source, &rule.source)
    }

    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn equals<T: PartialEq>(wanted: Option<T>, actual: T) -> bool {
    wanted.is_none_or(|w| w == actual)
}

fn contains(needle: &Option<String>, haystack: &str) -> bool {
    needle.as_deref().is_none_or(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rel(tuple_count: u64, relation_name: &str) -> RelationRecord {
        RelationRecord {
            total_time: 1.5,
            non_recursive_time: 1.0,
            recursive_time: 0.5,
            copy_time: 0.0,
            tuple_count,
            relation_name: relation_name.to_string(),
            id: "R.1".to_string(),
            source: "test.dl [1:1-1:10]".to_string(),
            performance_note: "3.33".to_string(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let f = RelationFilter::default();
        assert!(f.is_empty());
        assert!(f.matches(&rel(0, "")));
        assert!(f.matches(&rel(5, "foo")));
    }

    #[test]
    fn numeric_criteria_compare_exactly() {
        let f = RelationFilter {
            total_time: Some(1.5),
            tuple_count: Some(5),
            ..Default::default()
        };
        assert!(f.matches(&rel(5, "foo")));
        assert!(!f.matches(&rel(50, "foo")));

        let f = RelationFilter {
            total_time: Some(1.0),
            ..Default::default()
        };
        assert!(!f.matches(&rel(5, "foo")));
    }

    #[test]
    fn zero_is_a_real_constraint() {
        let f = RelationFilter {
            tuple_count: Some(0),
            ..Default::default()
        };
        assert!(f.matches(&rel(0, "foo")));
        assert!(!f.matches(&rel(1, "foo")));
    }

    #[test]
    fn text_criteria_match_substrings_case_sensitively() {
        let f = RelationFilter {
            relation_name: Some("ath".to_string()),
            ..Default::default()
        };
        assert!(f.matches(&rel(1, "path")));
        assert!(f.matches(&rel(1, "athlete")));
        assert!(!f.matches(&rel(1, "PATH")));
        assert!(!f.matches(&rel(1, "edge")));
    }

    #[test]
    fn empty_substring_matches_everything() {
        let f = RelationFilter {
            source: Some(String::new()),
            ..Default::default()
        };
        assert!(!f.is_empty());
        assert!(f.matches(&rel(1, "path")));
    }

    #[test]
    fn deserializes_sparse_json_and_ignores_unknown_keys() {
        let f: RelationFilter = serde_json::from_str(
            r#"{"tuple_count": 5, "non-recursive_time": 1.0, "relation_name": "foo", "color": "red"}"#,
        )
        .unwrap();
        assert_eq!(
            f,
            RelationFilter {
                non_recursive_time: Some(1.0),
                tuple_count: Some(5),
                relation_name: Some("foo".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn rule_filter_checks_rule_fields() {
        let rule = RuleRecord {
            total_time: 0.2,
            non_recursive_time: 0.2,
            recursive_time: 0.0,
            copy_time: 0.0,
            tuple_count: 4,
            rule_name: "edge(1,2).".to_string(),
            id: "N.1.0".to_string(),
            relation_name: "edge".to_string(),
            version: "0".to_string(),
            performance_note: "20.0".to_string(),
            source: "test.dl [2:1-2:11]".to_string(),
        };

        let f = RuleFilter {
            id: Some("N.".to_string()),
            version: Some("0".to_string()),
            tuple_count: Some(4),
            ..Default::default()
        };
        assert!(f.matches(&rule));

        let f = RuleFilter {
            rule_name: Some("path".to_string()),
            ..Default::default()
        };
        assert!(!f.matches(&rule));
        assert!(RuleFilter::default().is_empty());
    }
}
