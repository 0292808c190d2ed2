//! Plain-text rendering of profile records for the command line.

pub mod format;
pub mod table;

pub use format::{format_count, format_time};
pub use table::{render_relation_table, render_rule_table};
