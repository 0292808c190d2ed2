use clap::{Args, Parser, Subcommand};
use souffle_profile_db::render::{render_relation_table, render_rule_table};
use souffle_profile_db::{ProfileDb, RelationFilter, Result, RuleFilter, RuleRecord, diagnostics};

use anyhow::Context;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "souffle-profile-db")]
#[command(about = "Query the JSON exports of the Souffle profiler", long_about = None)]
struct Cli {
    /// Profile directory holding json/{overview,properties,rel,rul}.json.
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the overview and properties blobs plus record counts.
    Summary,

    /// List relation records matching the given criteria.
    Relations {
        #[command(flatten)]
        criteria: RelationArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List rule records matching the given criteria.
    Rules {
        #[command(flatten)]
        criteria: RuleArgs,

        /// Only rules of the relation with exactly this name.
        #[arg(long)]
        relation: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print matching records as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Print tuple counts unabbreviated.
    #[arg(long)]
    exact: bool,
}

#[derive(Args)]
struct RelationArgs {
    /// Sparse JSON criteria object, e.g. '{"relation_name":"path"}'.
    #[arg(long)]
    criteria: Option<String>,

    #[arg(long)]
    total_time: Option<f64>,
    #[arg(long)]
    non_recursive_time: Option<f64>,
    #[arg(long)]
    recursive_time: Option<f64>,
    #[arg(long)]
    copy_time: Option<f64>,
    #[arg(long)]
    tuple_count: Option<u64>,
    #[arg(long)]
    relation_name: Option<String>,
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    performance_note: Option<String>,
}

impl RelationArgs {
    /// Start from `--criteria` (if any) and let individual flags override it.
    fn into_filter(self) -> Result<RelationFilter> {
        let base: RelationFilter = parse_criteria(self.criteria.as_deref())?;
        Ok(RelationFilter {
            total_time: self.total_time.or(base.total_time),
            non_recursive_time: self.non_recursive_time.or(base.non_recursive_time),
            recursive_time: self.recursive_time.or(base.recursive_time),
            copy_time: self.copy_time.or(base.copy_time),
            tuple_count: self.tuple_count.or(base.tuple_count),
            relation_name: self.relation_name.or(base.relation_name),
            id: self.id.or(base.id),
            source: self.source.or(base.source),
            performance_note: self.performance_note.or(base.performance_note),
        })
    }
}

#[derive(Args)]
struct RuleArgs {
    /// Sparse JSON criteria object, e.g. '{"id":"C."}'.
    #[arg(long)]
    criteria: Option<String>,

    #[arg(long)]
    total_time: Option<f64>,
    #[arg(long)]
    non_recursive_time: Option<f64>,
    #[arg(long)]
    recursive_time: Option<f64>,
    #[arg(long)]
    copy_time: Option<f64>,
    #[arg(long)]
    tuple_count: Option<u64>,
    #[arg(long)]
    rule_name: Option<String>,
    #[arg(long)]
    id: Option<String>,
    #[arg(long)]
    relation_name: Option<String>,
    #[arg(long = "rule-version")]
    version: Option<String>,
    #[arg(long)]
    performance_note: Option<String>,
    #[arg(long)]
    source: Option<String>,
}

impl RuleArgs {
    fn into_filter(self) -> Result<RuleFilter> {
        let base: RuleFilter = parse_criteria(self.criteria.as_deref())?;
        Ok(RuleFilter {
            total_time: self.total_time.or(base.total_time),
            non_recursive_time: self.non_recursive_time.or(base.non_recursive_time),
            recursive_time: self.recursive_time.or(base.recursive_time),
            copy_time: self.copy_time.or(base.copy_time),
            tuple_count: self.tuple_count.or(base.tuple_count),
            rule_name: self.rule_name.or(base.rule_name),
            id: self.id.or(base.id),
            relation_name: self.relation_name.or(base.relation_name),
            version: self.version.or(base.version),
            performance_note: self.performance_note.or(base.performance_note),
            source: self.source.or(base.source),
        })
    }
}

fn parse_criteria<T: serde::de::DeserializeOwned + Default>(json: Option<&str>) -> Result<T> {
    match json {
        Some(text) => serde_json::from_str(text).with_context(|| {
            diagnostics::error_message(format!("parse --criteria {:?}", text))
        }),
        None => Ok(T::default()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let db = ProfileDb::load(&cli.dir)?;

    match cli.cmd {
        Commands::Summary => {
            let summary = serde_json::json!({
                "overview": db.overview(),
                "properties": db.properties(),
                "relations": db.relations().len(),
                "rules": db.rules().len(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Relations { criteria, output } => {
            let filter = criteria.into_filter()?;
            let rels = db.filter_relations(&filter);

            if output.json {
                println!("{}", serde_json::to_string_pretty(&rels)?);
            } else {
                print!("{}", render_relation_table(&rels, output.exact));
            }
        }
        Commands::Rules {
            criteria,
            relation,
            output,
        } => {
            let filter = criteria.into_filter()?;
            let rules: Vec<&RuleRecord> = match &relation {
                Some(name) => db
                    .rules_for_relation(name)
                    .into_iter()
                    .filter(|r| filter.matches(r))
                    .collect(),
                None => db.filter_rules(&filter),
            };

            if output.json {
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                print!("{}", render_rule_table(&rules, output.exact));
            }
        }
    }

    Ok(())
}
