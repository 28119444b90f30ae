//! Command tree and handlers
//!
//! Handlers return the text to print so they can be exercised without a
//! process boundary.

use crate::config::{FluencyConfig, OutputFormat};
use crate::render::{CategoryList, GameList, PathReport};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use fluency_core::{FactCategory, GameGrouping, Operation, ProgressRecord, StudentId};
use fluency_path::{Clock, LearningPath, LearningPathEngine};
use fluency_store::{CategoryCatalog, GameCatalog, ProgressStore, StudentRegistry};
use std::path::{Path, PathBuf};

/// Build the `fluency` command tree
#[must_use]
pub fn cli() -> Command {
    Command::new("fluency")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Math-fact fluency learning paths")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("analyze")
                .about("Generate a learning path from progress records")
                .arg(
                    Arg::new("progress")
                        .long("progress")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON array of progress records"),
                )
                .arg(
                    Arg::new("student")
                        .long("student")
                        .help("Student to analyze (defaults to the configured student)"),
                )
                .arg(
                    Arg::new("categories")
                        .long("categories")
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON array of fact categories (defaults to the built-in catalog)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("categories")
                .about("List fact categories")
                .arg(
                    Arg::new("operation")
                        .long("operation")
                        .help("Only categories for this operation"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("games")
                .about("List practice games")
                .arg(
                    Arg::new("grouping")
                        .long("grouping")
                        .help("Only games for this grouping (foundational, derived, advanced)"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("seed")
                .about("Learning path for the seeded demo progress of the configured student")
                .arg(json_flag()),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

fn output_format(args: &ArgMatches, config: &FluencyConfig) -> OutputFormat {
    if args.get_flag("json") {
        OutputFormat::Json
    } else {
        config.output
    }
}

/// Dispatch a parsed subcommand
///
/// # Errors
/// Propagates file, parse and label errors with context
pub fn run(
    matches: &ArgMatches,
    config: &FluencyConfig,
    clock: &dyn Clock,
) -> anyhow::Result<String> {
    match matches.subcommand() {
        Some(("analyze", args)) => analyze(args, config, clock),
        Some(("categories", args)) => categories(args, config),
        Some(("games", args)) => games(args, config),
        Some(("seed", args)) => seed(args, config, clock),
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    }
}

fn analyze(args: &ArgMatches, config: &FluencyConfig, clock: &dyn Clock) -> anyhow::Result<String> {
    let progress_path = args
        .get_one::<PathBuf>("progress")
        .context("--progress is required")?;
    let student = args
        .get_one::<String>("student")
        .map_or_else(|| StudentId::new(&config.default_student), |s| StudentId::new(s));

    let records: Vec<ProgressRecord> = read_json(progress_path)?;
    let total = records.len();
    let progress: Vec<ProgressRecord> = records
        .into_iter()
        .filter(|r| r.student_id == student)
        .collect();
    if progress.is_empty() && total > 0 {
        tracing::warn!(student = %student, total, "no progress records for student");
    }

    let categories: Vec<FactCategory> = match args.get_one::<PathBuf>("categories") {
        Some(path) => read_json(path)?,
        None => CategoryCatalog::seeded().all().to_vec(),
    };

    let path = LearningPathEngine::with_clock(clock).analyze(student, &progress, &categories);
    render_path(&path, output_format(args, config))
}

fn categories(args: &ArgMatches, config: &FluencyConfig) -> anyhow::Result<String> {
    let catalog = CategoryCatalog::seeded();
    let selected: Vec<&FactCategory> = match args.get_one::<String>("operation") {
        Some(op) => catalog.by_operation(op.parse::<Operation>()?),
        None => catalog.all().iter().collect(),
    };

    match output_format(args, config) {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&selected)?),
        OutputFormat::Text => Ok(CategoryList(&selected).to_string()),
    }
}

fn games(args: &ArgMatches, config: &FluencyConfig) -> anyhow::Result<String> {
    let catalog = GameCatalog::seeded();
    let selected = match args.get_one::<String>("grouping") {
        Some(grouping) => catalog.by_grouping(grouping.parse::<GameGrouping>()?),
        None => catalog.all().iter().collect(),
    };

    match output_format(args, config) {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&selected)?),
        OutputFormat::Text => Ok(GameList(&selected).to_string()),
    }
}

fn seed(args: &ArgMatches, config: &FluencyConfig, clock: &dyn Clock) -> anyhow::Result<String> {
    let now = clock.now();
    let student = StudentRegistry::with_defaults(now)
        .require(&StudentId::new(&config.default_student))
        .context("seed data only covers the demo student")?;
    tracing::debug!(student = %student.id, name = %student.name, "seeding demo progress");

    let progress = ProgressStore::with_demo_data(now).progress_for(&student.id);
    let catalog = CategoryCatalog::seeded();
    let path = LearningPathEngine::with_clock(clock).analyze(student.id.clone(), &progress, catalog.all());

    let format = output_format(args, config);
    let rendered = render_path(&path, format)?;
    Ok(match format {
        OutputFormat::Json => rendered,
        OutputFormat::Text => format!(
            "Student: {} (grade {}{})\n{rendered}",
            student.name, student.grade, student.section
        ),
    })
}

fn render_path(path: &LearningPath, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(path)?),
        OutputFormat::Text => Ok(PathReport(path).to_string()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
