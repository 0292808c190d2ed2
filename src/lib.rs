//! Read-only access to the JSON exports of the Souffle profiler.
//!
//! The profiler writes four files next to its HTML front-end: an overview
//! blob, a properties blob, and two positional tables with per-relation and
//! per-rule timings. [`ProfileDb`] loads all of them once, turns table rows
//! into named records and answers filter queries over them.

pub mod db;
pub mod diagnostics;
pub mod filter;
pub mod record;
pub mod render;
pub mod source;

pub use db::ProfileDb;
pub use filter::{RelationFilter, RuleFilter};
pub use record::{DecodeError, RelationRecord, RuleRecord};
pub use source::ResourcePaths;

pub type Result<T> = anyhow::Result<T>;
