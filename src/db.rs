//! The in-memory profile database handed to front-end code.

use crate::Result;
use crate::diagnostics;
use crate::filter::{RelationFilter, RuleFilter};
use crate::record::{self, DecodeError, RelationRecord, RuleRecord};
use crate::source::{ResourcePaths, read_json};

use anyhow::Context;
use serde_json::Value;
use std::path::Path;

/// All four profiler exports, loaded once and read-only afterwards.
///
/// Construct with [`ProfileDb::load`] and pass it around by reference; there is
/// no way to mutate the records after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDb {
    overview: Value,
    properties: Value,
    relations: Vec<RelationRecord>,
    rules: Vec<RuleRecord>,
}

impl ProfileDb {
    /// Load `json/{overview,properties,rel,rul}.json` under `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(dir, &ResourcePaths::default())
    }

    /// Load with custom resource locations (resolved against `dir`).
    ///
    /// Blocks until every resource is read and decoded. Loading is
    /// all-or-nothing: the first unreadable or undecodable resource fails the
    /// whole load, rather than leaving that collection empty and carrying on.
    pub fn load_with(dir: impl AsRef<Path>, paths: &ResourcePaths) -> Result<Self> {
        let paths = paths.under(dir.as_ref());

        let overview = read_json(&paths.overview)?;
        let properties = read_json(&paths.properties)?;

        let relations = record::decode_table(&read_json(&paths.relations)?, record::decode_relation)
            .with_context(|| {
                diagnostics::error_message(format!("decode relation table {}", paths.relations.display()))
            })?;
        let rules = record::decode_table(&read_json(&paths.rules)?, record::decode_rule)
            .with_context(|| {
                diagnostics::error_message(format!("decode rule table {}", paths.rules.display()))
            })?;

        if relations.is_empty() {
            log::warn!("relation table {} is empty", paths.relations.display());
        }
        log::info!(
            "loaded {} relations and {} rules from {}",
            relations.len(),
            rules.len(),
            dir.as_ref().display()
        );

        Ok(Self::from_records(overview, properties, relations, rules))
    }

    /// Build from already-parsed JSON documents.
    pub fn from_values(
        overview: Value,
        properties: Value,
        relations: &Value,
        rules: &Value,
    ) -> std::result::Result<Self, DecodeError> {
        let relations = record::decode_table(relations, record::decode_relation)?;
        let rules = record::decode_table(rules, record::decode_rule)?;
        Ok(Self::from_records(overview, properties, relations, rules))
    }

    pub fn from_records(
        overview: Value,
        properties: Value,
        relations: Vec<RelationRecord>,
        rules: Vec<RuleRecord>,
    ) -> Self {
        Self {
            overview,
            properties,
            relations,
            rules,
        }
    }

    pub fn overview(&self) -> &Value {
        &self.overview
    }

    pub fn properties(&self) -> &Value {
        &self.properties
    }

    /// Relation records in source order.
    pub fn relations(&self) -> &[RelationRecord] {
        &self.relations
    }

    /// Rule records in source order.
    pub fn rules(&self) -> &[RuleRecord] {
        &self.rules
    }

    /// Relations matching every set criterion, in source order.
    pub fn filter_relations(&self, filter: &RelationFilter) -> Vec<&RelationRecord> {
        if filter.is_empty() {
            return self.relations.iter().collect();
        }
        let out: Vec<&RelationRecord> = self.relations.iter().filter(|r| filter.matches(r)).collect();
        log::debug!(
            "relation filter kept {} of {} records",
            out.len(),
            self.relations.len()
        );
        out
    }

    /// Rules matching every set criterion, in source order.
    pub fn filter_rules(&self, filter: &RuleFilter) -> Vec<&RuleRecord> {
        if filter.is_empty() {
            return self.rules.iter().collect();
        }
        let out: Vec<&RuleRecord> = self.rules.iter().filter(|r| filter.matches(r)).collect();
        log::debug!("rule filter kept {} of {} records", out.len(), self.rules.len());
        out
    }

    /// Rules deriving into the relation named exactly `relation_name`.
    pub fn rules_for_relation(&self, relation_name: &str) -> Vec<&RuleRecord> {
        self.rules
            .iter()
            .filter(|r| r.relation_name == relation_name)
            .collect()
    }
}
