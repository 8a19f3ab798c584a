use crate::infra::{parse_date, print_json, read_profile};
use admission_ai::admissions::{AdmissionEngine, EligibilityMap, RuleCheck, StudyPlanner};
use admission_ai::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Student profile JSON file, or `-` for stdin
    #[arg(long)]
    pub(crate) profile: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct EligibilityArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Course to check (defaults to the profile's preferred course)
    #[arg(long)]
    pub(crate) course: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,
    /// Plan start date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
}

#[derive(Serialize)]
struct EligibilityReport {
    course: String,
    exam_subjects: RuleCheck,
    grade_sheet: RuleCheck,
    universities: EligibilityMap,
}

#[derive(Serialize)]
struct CourseListing<'a> {
    name: &'a str,
    category: &'static str,
    lowest_cutoff: Option<u16>,
    universities: usize,
}

pub(crate) fn run_evaluate(engine: &AdmissionEngine, args: ProfileArgs) -> Result<(), AppError> {
    let profile = read_profile(engine, &args.profile)?;
    let outcome = engine.process_admission(&profile)?;
    print_json(&outcome)
}

pub(crate) fn run_recommend(engine: &AdmissionEngine, args: ProfileArgs) -> Result<(), AppError> {
    let profile = read_profile(engine, &args.profile)?;
    print_json(&engine.recommend(&profile))
}

pub(crate) fn run_eligibility(
    engine: &AdmissionEngine,
    args: EligibilityArgs,
) -> Result<(), AppError> {
    let profile = read_profile(engine, &args.profile.profile)?;
    let course = args
        .course
        .unwrap_or_else(|| profile.preferred_course.clone());

    let report = EligibilityReport {
        exam_subjects: engine.validate_exam_subjects(&course, &profile.exam_subjects)?,
        grade_sheet: engine.validate_grade_sheet(&course, &profile.grades)?,
        universities: engine.evaluate_university_eligibility(
            &course,
            profile.exam_score,
            &profile.exam_subjects,
            &profile.grades,
            &profile.state,
        )?,
        course,
    };
    print_json(&report)
}

pub(crate) fn run_plan(engine: &AdmissionEngine, args: PlanArgs) -> Result<(), AppError> {
    let profile = read_profile(engine, &args.profile.profile)?;
    let outcome = engine.process_admission(&profile)?;
    let start = args.start.unwrap_or_else(|| Local::now().date_naive());
    print_json(&StudyPlanner.plan(&profile, &outcome, start))
}

pub(crate) fn run_catalog_list(engine: &AdmissionEngine) -> Result<(), AppError> {
    let listing: Vec<CourseListing<'_>> = engine
        .catalog()
        .courses()
        .iter()
        .map(|course| CourseListing {
            name: &course.name,
            category: course.category.label(),
            lowest_cutoff: course.lowest_cutoff(),
            universities: course.offers.len(),
        })
        .collect();
    print_json(&listing)
}

pub(crate) fn run_catalog_check(engine: &AdmissionEngine) -> Result<(), AppError> {
    let catalog = engine.catalog();
    catalog.check_integrity()?;
    println!(
        "Catalog OK: {} courses across {} universities",
        catalog.courses().len(),
        catalog.universities().len()
    );
    Ok(())
}
