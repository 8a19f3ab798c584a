use admission_ai::admissions::{AdmissionEngine, Catalog, ProfileGuard, StudentProfile};
use admission_ai::config::AppConfig;
use admission_ai::error::AppError;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog JSON file (overrides ADMISSION_CATALOG_PATH; defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub(crate) catalog: Option<PathBuf>,
    /// Cutoff sheet CSV applied on top of the catalog (overrides ADMISSION_CUTOFFS_CSV)
    #[arg(long, global = true)]
    pub(crate) cutoffs: Option<PathBuf>,
}

pub(crate) fn load_engine(config: &AppConfig, args: CatalogArgs) -> Result<AdmissionEngine, AppError> {
    let catalog_path = args.catalog.or_else(|| config.catalog.path.clone());
    let cutoffs_path = args.cutoffs.or_else(|| config.catalog.cutoffs_csv.clone());

    let mut catalog = match &catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::embedded()?,
    };
    if let Some(path) = &cutoffs_path {
        catalog = catalog.apply_cutoff_sheet_path(path)?;
    }

    info!(
        source = %catalog_path
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        environment = ?config.environment,
        "engine ready"
    );
    Ok(AdmissionEngine::new(Arc::new(catalog), config.engine.clone()))
}

/// Read a student profile from a JSON file, or stdin when the path is `-`, and run the intake guard.
pub(crate) fn read_profile(engine: &AdmissionEngine, path: &Path) -> Result<StudentProfile, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path)?
    };
    let profile = parse_profile(&raw)?;
    ProfileGuard::from_config(engine.config()).check(engine.catalog(), &profile)?;
    Ok(profile)
}

fn parse_profile(raw: &str) -> Result<StudentProfile, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2026-09-01 "),
            Ok(NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"))
        );
        assert!(parse_date("01/09/2026")
            .expect_err("wrong format")
            .contains("YYYY-MM-DD"));
    }

    #[test]
    fn profile_defaults_optional_fields() {
        let profile = parse_profile(
            r#"{
                "name": "Amaka",
                "preferred_course": "Law",
                "exam_score": 250,
                "exam_subjects": ["English Language", "Literature in English", "Government", "CRS"]
            }"#,
        )
        .expect("profile parses");

        assert!(profile.grades.is_empty());
        assert_eq!(profile.state, "");
    }

    #[test]
    fn malformed_profile_is_a_json_error() {
        let error = parse_profile("{\"name\": 3}").expect_err("invalid profile");
        assert!(matches!(error, AppError::Json(_)));
    }
}
