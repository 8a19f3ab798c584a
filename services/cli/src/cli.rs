use crate::commands::{
    run_catalog_check, run_catalog_list, run_eligibility, run_evaluate, run_plan, run_recommend,
    EligibilityArgs, PlanArgs, ProfileArgs,
};
use crate::infra::{load_engine, CatalogArgs};
use admission_ai::config::AppConfig;
use admission_ai::error::AppError;
use admission_ai::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "University Admission Advisor",
    about = "Check admission eligibility and recommend alternative courses from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide on the preferred course and attach alternative recommendations
    Evaluate(ProfileArgs),
    /// Rank every course the student can enter
    Recommend(ProfileArgs),
    /// Per-university eligibility for one course
    Eligibility(EligibilityArgs),
    /// Build a study-improvement plan from the admission outcome
    Plan(PlanArgs),
    /// Inspect the loaded reference catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List courses with their lowest cutoff
    List,
    /// Verify catalog cross references
    Check,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let engine = load_engine(&config, cli.catalog)?;

    match cli.command {
        Command::Evaluate(args) => run_evaluate(&engine, args),
        Command::Recommend(args) => run_recommend(&engine, args),
        Command::Eligibility(args) => run_eligibility(&engine, args),
        Command::Plan(args) => run_plan(&engine, args),
        Command::Catalog {
            command: CatalogCommand::List,
        } => run_catalog_list(&engine),
        Command::Catalog {
            command: CatalogCommand::Check,
        } => run_catalog_check(&engine),
    }
}
