//! Static reference data: subjects, universities, courses and career outlooks.
//!
//! A [`Catalog`] is built once at startup from JSON (the embedded default or a
//! file), optionally patched with a cutoff sheet, integrity-checked, and then
//! shared read-only by every evaluation.

mod cutoffs;
mod rules;

pub use cutoffs::CutoffRow;
pub use rules::{RuleDefinitionError, SubjectRule};

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../../../data/catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseCategory {
    Medical,
    Engineering,
    Science,
    Commercial,
    Arts,
    Education,
    Agriculture,
}

impl CourseCategory {
    pub const fn label(self) -> &'static str {
        match self {
            CourseCategory::Medical => "Medical",
            CourseCategory::Engineering => "Engineering",
            CourseCategory::Science => "Science",
            CourseCategory::Commercial => "Commercial",
            CourseCategory::Arts => "Arts",
            CourseCategory::Education => "Education",
            CourseCategory::Agriculture => "Agriculture",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    #[default]
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Difficulty {
    /// Ordinal tier from 1 (Low) to 4 (Very High).
    pub const fn tier(self) -> u8 {
        match self {
            Difficulty::Low => 1,
            Difficulty::Medium => 2,
            Difficulty::High => 3,
            Difficulty::VeryHigh => 4,
        }
    }

    /// Multiplier applied by the rule-based success estimate.
    pub const fn penalty(self) -> f64 {
        match self {
            Difficulty::Low => 1.1,
            Difficulty::Medium => 1.0,
            Difficulty::High => 0.9,
            Difficulty::VeryHigh => 0.8,
        }
    }
}

/// Five-step qualitative rating used for demand and career outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Rating {
    pub const fn score(self) -> u8 {
        match self {
            Rating::VeryLow => 1,
            Rating::Low => 2,
            Rating::Medium => 3,
            Rating::High => 4,
            Rating::VeryHigh => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rating::VeryLow => "Very Low",
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
            Rating::VeryHigh => "Very High",
        }
    }
}

/// Career outlook ratings shared by every course in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerOutlook {
    pub growth_rate: Rating,
    pub job_security: Rating,
    pub international_mobility: Rating,
    pub entrepreneurship_potential: Rating,
}

impl CareerOutlook {
    /// Mean of the four ratings on the 1..=5 scale.
    pub fn score(&self) -> f64 {
        let total = self.growth_rate.score() as u32
            + self.job_security.score() as u32
            + self.international_mobility.score() as u32
            + self.entrepreneurship_potential.score() as u32;
        total as f64 / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub catchment: BTreeSet<String>,
}

impl University {
    pub fn in_catchment(&self, state: &str) -> bool {
        self.catchment.contains(state)
    }
}

/// A university's cutoff and admission note for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversityOffer {
    pub university: String,
    pub cutoff: u16,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub category: CourseCategory,
    pub exam_rules: Vec<SubjectRule>,
    #[serde(default)]
    pub credit_subjects: Vec<String>,
    #[serde(default)]
    pub offers: Vec<UniversityOffer>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_duration")]
    pub duration_years: u8,
    #[serde(default)]
    pub career_prospects: Vec<String>,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub job_demand: Rating,
}

fn default_duration() -> u8 {
    4
}

impl Course {
    pub fn lowest_cutoff(&self) -> Option<u16> {
        self.offers.iter().map(|offer| offer.cutoff).min()
    }

    pub fn offer(&self, university: &str) -> Option<&UniversityOffer> {
        self.offers
            .iter()
            .find(|offer| offer.university == university)
    }
}

/// On-disk shape of the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDocument {
    exam_subjects: Vec<String>,
    secondary_subjects: Vec<String>,
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
    universities: Vec<University>,
    #[serde(default)]
    career_outlooks: BTreeMap<CourseCategory, CareerOutlook>,
    #[serde(default)]
    subject_areas: BTreeMap<CourseCategory, Vec<String>>,
    courses: Vec<Course>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid cutoff sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("course '{course}' references unknown university '{university}'")]
    UnknownUniversity { course: String, university: String },
    #[error("course '{course}' references unknown subject '{subject}'")]
    UnknownSubject { course: String, subject: String },
    #[error("course '{0}' is declared more than once")]
    DuplicateCourse(String),
    #[error("university '{0}' is declared more than once")]
    DuplicateUniversity(String),
    #[error("course '{0}' has no entrance-subject rules")]
    MissingRules(String),
    #[error("cutoff sheet references unknown course '{0}'")]
    UnknownCourse(String),
}

/// Immutable, integrity-checked reference catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    exam_subjects: BTreeSet<String>,
    secondary_subjects: BTreeSet<String>,
    synonyms: BTreeMap<String, String>,
    universities: Vec<University>,
    career_outlooks: BTreeMap<CourseCategory, CareerOutlook>,
    subject_areas: BTreeMap<CourseCategory, Vec<String>>,
    courses: Vec<Course>,
    course_index: HashMap<String, usize>,
    university_index: HashMap<String, usize>,
}

impl Catalog {
    /// Catalog compiled into the crate from `data/catalog.json`.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let mut university_index = HashMap::new();
        for (position, university) in document.universities.iter().enumerate() {
            if university_index
                .insert(university.id.clone(), position)
                .is_some()
            {
                return Err(CatalogError::DuplicateUniversity(university.id.clone()));
            }
        }

        let mut course_index = HashMap::new();
        for (position, course) in document.courses.iter().enumerate() {
            if course_index.insert(course.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCourse(course.name.clone()));
            }
        }

        let catalog = Self {
            exam_subjects: document.exam_subjects.into_iter().collect(),
            secondary_subjects: document.secondary_subjects.into_iter().collect(),
            synonyms: document.synonyms,
            universities: document.universities,
            career_outlooks: document.career_outlooks,
            subject_areas: document.subject_areas,
            courses: document.courses,
            course_index,
            university_index,
        };
        catalog.check_integrity()?;

        info!(
            courses = catalog.courses.len(),
            universities = catalog.universities.len(),
            "admission catalog loaded"
        );
        Ok(catalog)
    }

    /// Verify cross references between courses, universities and subjects.
    pub fn check_integrity(&self) -> Result<(), CatalogError> {
        for course in &self.courses {
            if course.exam_rules.is_empty() {
                return Err(CatalogError::MissingRules(course.name.clone()));
            }

            for offer in &course.offers {
                if !self.university_index.contains_key(&offer.university) {
                    return Err(CatalogError::UnknownUniversity {
                        course: course.name.clone(),
                        university: offer.university.clone(),
                    });
                }
            }

            for rule in &course.exam_rules {
                for candidate in rule.candidates() {
                    if !self.is_exam_subject(self.canonical_subject(candidate)) {
                        return Err(CatalogError::UnknownSubject {
                            course: course.name.clone(),
                            subject: candidate.clone(),
                        });
                    }
                }
            }

            for subject in &course.credit_subjects {
                if !self.is_secondary_subject(subject) {
                    return Err(CatalogError::UnknownSubject {
                        course: course.name.clone(),
                        subject: subject.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Overlay cutoffs from a CSV sheet with `course,university,cutoff,note` columns.
    pub fn apply_cutoff_sheet<R: Read>(mut self, reader: R) -> Result<Self, CatalogError> {
        let rows = cutoffs::parse_rows(reader)?;
        let applied = rows.len();

        for row in rows {
            if !self.university_index.contains_key(&row.university) {
                return Err(CatalogError::UnknownUniversity {
                    course: row.course,
                    university: row.university,
                });
            }
            let position = *self
                .course_index
                .get(&row.course)
                .ok_or_else(|| CatalogError::UnknownCourse(row.course.clone()))?;
            let course = &mut self.courses[position];

            match course
                .offers
                .iter_mut()
                .find(|offer| offer.university == row.university)
            {
                Some(offer) => {
                    offer.cutoff = row.cutoff;
                    if let Some(note) = row.note {
                        offer.note = note;
                    }
                }
                None => course.offers.push(UniversityOffer {
                    university: row.university,
                    cutoff: row.cutoff,
                    note: row.note.unwrap_or_default(),
                }),
            }
        }

        info!(rows = applied, "cutoff sheet applied");
        Ok(self)
    }

    pub fn apply_cutoff_sheet_path<P: AsRef<Path>>(self, path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        self.apply_cutoff_sheet(file)
    }

    /// Courses in declaration order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, name: &str) -> Option<&Course> {
        self.course_index
            .get(name)
            .map(|position| &self.courses[*position])
    }

    pub fn universities(&self) -> &[University] {
        &self.universities
    }

    pub fn university(&self, id: &str) -> Option<&University> {
        self.university_index
            .get(id)
            .map(|position| &self.universities[*position])
    }

    /// Outlook for a category; unlisted categories rate Medium throughout.
    pub fn career_outlook(&self, category: CourseCategory) -> CareerOutlook {
        self.career_outlooks
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    pub fn subject_areas(&self) -> &BTreeMap<CourseCategory, Vec<String>> {
        &self.subject_areas
    }

    /// Resolve a known short name ("CRS", "Literature") to its full subject name.
    pub fn canonical_subject<'a>(&'a self, subject: &'a str) -> &'a str {
        self.synonyms
            .get(subject)
            .map(String::as_str)
            .unwrap_or(subject)
    }

    pub fn is_exam_subject(&self, subject: &str) -> bool {
        self.exam_subjects.contains(subject)
    }

    pub fn is_secondary_subject(&self, subject: &str) -> bool {
        self.secondary_subjects.contains(subject)
    }
}
