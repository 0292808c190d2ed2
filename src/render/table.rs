use crate::record::{RelationRecord, RuleRecord};
use crate::render::format::{format_count, format_time};

const RELATION_HEADER: [&str; 9] = [
    "TOT_T", "NREC_T", "REC_T", "COPY_T", "TUPLES", "NAME", "ID", "SRC", "PERFOR",
];

const RULE_HEADER: [&str; 11] = [
    "TOT_T", "NREC_T", "REC_T", "COPY_T", "TUPLES", "RULE", "ID", "RELATION", "VER", "PERFOR",
    "SRC",
];

/// Leading columns holding numbers are right-aligned.
const NUMERIC_COLUMNS: usize = 5;

/// Render relation records as an aligned plain-text table.
pub fn render_relation_table(rels: &[&RelationRecord], exact: bool) -> String {
    let rows: Vec<Vec<String>> = rels
        .iter()
        .map(|r| {
            vec![
                format_time(r.total_time),
                format_time(r.non_recursive_time),
                format_time(r.recursive_time),
                format_time(r.copy_time),
                format_count(r.tuple_count, exact),
                r.relation_name.clone(),
                r.id.clone(),
                r.source.clone(),
                r.performance_note.clone(),
            ]
        })
        .collect();
    render_table(&RELATION_HEADER, &rows)
}

/// Render rule records as an aligned plain-text table.
pub fn render_rule_table(rules: &[&RuleRecord], exact: bool) -> String {
    let rows: Vec<Vec<String>> = rules
        .iter()
        .map(|r| {
            vec![
                format_time(r.total_time),
                format_time(r.non_recursive_time),
                format_time(r.recursive_time),
                format_time(r.copy_time),
                format_count(r.tuple_count, exact),
                r.rule_name.clone(),
                r.id.clone(),
                r.relation_name.clone(),
                r.version.clone(),
                r.performance_note.clone(),
                r.source.clone(),
            ]
        })
        .collect();
    render_table(&RULE_HEADER, &rows)
}

fn render_table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    for row in rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            if i < NUMERIC_COLUMNS {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
