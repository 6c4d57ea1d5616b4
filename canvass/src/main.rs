//! Entry point for the canvass CLI
//!
//! Loads a roster (and optionally an annotation seed) from JSON files and
//! prints dashboard figures, category lists and exports for one dataset.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use canvass::{
    services::{load_annotation_seed, InMemoryRoster},
    Canvass, CanvassError, CanvassResult, Category, DefaultCanvass, ExportConfig, FamilyDraft, InMemoryAnnotationStore,
    SystemClock,
};
use shared::{dataset_debug, dataset_info, logging, DatasetId, RecordId};

/// Annotation and aggregation engine for voter canvassing
#[derive(Parser)]
#[command(name = "canvass")]
#[command(about = "Dashboard counts, lists and exports over an annotated voter roster")]
pub struct Args {
    /// Roster JSON file
    #[arg(long, env = "CANVASS_ROSTER", global = true)]
    pub roster: Option<PathBuf>,

    /// Annotation seed file (JSON array of entries)
    #[arg(long, env = "CANVASS_ANNOTATIONS", global = true)]
    pub annotations: Option<PathBuf>,

    /// Dataset (constituency part) to work on
    #[arg(long, env = "CANVASS_DATASET", default_value = "101", global = true)]
    pub dataset: DatasetId,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "CANVASS_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Category counts of the dataset as JSON
    Counts,

    /// Voters of one category with their derived state
    List {
        #[arg(long)]
        category: Category,
    },

    /// Export one category
    Export {
        #[arg(long)]
        category: Category,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Names included in a share preview
        #[arg(long, default_value = "50")]
        preview_limit: usize,
    },

    /// Survey statistics of the dataset as JSON
    Survey,

    /// Figures across every dataset
    Summary,

    /// Group voters into families and print them with resolved members
    Families {
        /// Comma-separated roster ids forming one family; repeat per family
        #[arg(long = "group")]
        groups: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Share,
    Email,
}

fn build_engine(args: &Args) -> CanvassResult<DefaultCanvass> {
    let roster_path = args
        .roster
        .as_ref()
        .ok_or_else(|| CanvassError::config("roster path (--roster or CANVASS_ROSTER)"))?;
    let roster = InMemoryRoster::from_json_file(roster_path)?;

    let mut annotations = InMemoryAnnotationStore::new();
    if let Some(seed_path) = &args.annotations {
        let applied = annotations.load_seed(load_annotation_seed(seed_path)?);
        dataset_debug!(args.dataset, "Applied {} seeded annotations", applied);
    }

    Ok(Canvass::new(roster, annotations, SystemClock))
}

/// Parse `"3,1,7"` into a draft with one slot per id. Ids missing from the
/// roster leave their slot empty.
fn parse_group(engine: &DefaultCanvass, dataset: DatasetId, group: &str) -> CanvassResult<FamilyDraft> {
    let mut draft = FamilyDraft::new();
    for token in group.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let record = token
            .parse::<u32>()
            .map(RecordId)
            .map_err(|_| CanvassError::config(format!("family member id '{}'", token)))?;
        let slot = draft.add_slot();
        if let Some(voter) = engine.voters(dataset).iter().find(|voter| voter.id == record) {
            draft.select(slot, voter);
        }
    }
    Ok(draft)
}

fn run(args: Args) -> CanvassResult<()> {
    let mut engine = build_engine(&args)?;
    let dataset = args.dataset;

    if engine.voters(dataset).is_empty() {
        dataset_info!(dataset, "Dataset has no voters in this roster");
    }

    match args.command {
        Command::Counts => {
            println!("{}", serde_json::to_string_pretty(&engine.compute_counts(dataset))?);
        }
        Command::List { category } => {
            for (voter, state) in engine.category_rows(dataset, category) {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    voter.name,
                    voter.voter_id,
                    state.display_mobile.as_deref().unwrap_or("-"),
                    state.status_label,
                    state.category_text()
                );
            }
        }
        Command::Export {
            category,
            format,
            preview_limit,
        } => {
            let engine = engine.with_export_config(ExportConfig {
                share_preview_limit: preview_limit,
            });
            match format {
                ExportFormat::Csv => print!("{}", engine.export_csv(dataset, category)?),
                ExportFormat::Share => println!("{}", engine.share_text(dataset, category)),
                ExportFormat::Email => {
                    let email = engine.email_message(dataset, category);
                    println!("Subject: {}\n\n{}", email.subject, email.body);
                }
            }
        }
        Command::Survey => {
            println!("{}", serde_json::to_string_pretty(&engine.survey_stats(dataset))?);
        }
        Command::Summary => {
            println!("{}", serde_json::to_string_pretty(&engine.dashboard_summary())?);
        }
        Command::Families { groups } => {
            for group in &groups {
                let draft = parse_group(&engine, dataset, group)?;
                engine.save_family(dataset, &draft)?;
            }
            for family in engine.list_families(dataset) {
                let names: Vec<&str> = engine
                    .family_members(dataset, family.id)
                    .into_iter()
                    .map(|voter| voter.name.as_str())
                    .collect();
                println!(
                    "{}\t{}\t{}",
                    family.id,
                    family.name.as_deref().unwrap_or("-"),
                    names.join(", ")
                );
            }
        }
    }

    Ok(())
}

fn main() -> CanvassResult<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(&format!("canvass for dataset {}", args.dataset));

    if let Err(error) = run(args) {
        logging::log_error("canvass", &error);
        return Err(error);
    }

    logging::log_success("Done");
    Ok(())
}
