use std::sync::Arc;

use chrono::NaiveDate;

use crate::admissions::catalog::{Catalog, CourseCategory};
use crate::admissions::config::EngineConfig;
use crate::admissions::domain::{Grade, GradeSheet, LearningStyle, StudentProfile, StudyPreference};
use crate::admissions::engine::AdmissionEngine;
use crate::admissions::scoring::{FeatureVector, PredictorError, SuccessPredictor};

pub(super) const TEST_CATALOG: &str = r#"{
    "exam_subjects": [
        "English Language", "Mathematics", "Physics", "Chemistry", "Biology",
        "Economics", "Government", "History", "Literature in English",
        "Christian Religious Studies"
    ],
    "secondary_subjects": [
        "English Language", "Mathematics", "Physics", "Chemistry", "Biology",
        "Economics", "Government", "History", "Literature in English",
        "Christian Religious Studies", "Further Mathematics", "Civic Education"
    ],
    "synonyms": {
        "Literature": "Literature in English",
        "CRS": "Christian Religious Studies"
    },
    "universities": [
        {"id": "ALPHA", "name": "Alpha State University", "catchment": ["Lagos", "Ogun"]},
        {"id": "BETA", "name": "Beta Federal University", "catchment": ["Kano"]},
        {"id": "GAMMA", "name": "Gamma University", "catchment": ["Enugu", "Anambra"]}
    ],
    "career_outlooks": {
        "Science": {
            "growth_rate": "High",
            "job_security": "High",
            "international_mobility": "Very High",
            "entrepreneurship_potential": "Medium"
        },
        "Medical": {
            "growth_rate": "Very High",
            "job_security": "Very High",
            "international_mobility": "Very High",
            "entrepreneurship_potential": "Very High"
        }
    },
    "subject_areas": {
        "Science": ["Mathematics", "Physics", "Chemistry", "Biology"],
        "Arts": ["English Language", "Literature in English", "Government", "History", "CRS"]
    },
    "courses": [
        {
            "name": "Mathematics",
            "category": "Science",
            "exam_rules": [
                "English Language",
                "Mathematics",
                {"choose": 2, "from": ["Physics", "Chemistry", "Economics", "Biology"]}
            ],
            "credit_subjects": ["English Language", "Mathematics", "Physics"],
            "offers": [
                {"university": "ALPHA", "cutoff": 200, "note": "Post-exam screening"},
                {"university": "BETA", "cutoff": 190}
            ],
            "difficulty": "Medium",
            "career_prospects": ["Statistician", "Actuary"],
            "salary_range": "150k-500k",
            "job_demand": "High"
        },
        {
            "name": "Pharmacy",
            "category": "Medical",
            "exam_rules": ["English Language", "Biology", "Chemistry", "Physics"],
            "credit_subjects": ["English Language", "Mathematics", "Biology", "Chemistry", "Physics"],
            "offers": [{"university": "ALPHA", "cutoff": 270, "note": "Interview required"}],
            "difficulty": "High",
            "duration_years": 5,
            "career_prospects": ["Pharmacist"],
            "salary_range": "300k-1M",
            "job_demand": "Very High"
        },
        {
            "name": "Physics",
            "category": "Science",
            "exam_rules": [
                "English Language",
                "Physics",
                {"choose": 2, "from": ["Mathematics", "Chemistry", "Biology"]}
            ],
            "credit_subjects": ["English Language", "Mathematics", "Physics"],
            "offers": [
                {"university": "BETA", "cutoff": 180},
                {"university": "GAMMA", "cutoff": 185}
            ],
            "difficulty": "Medium"
        },
        {
            "name": "English Studies",
            "category": "Arts",
            "exam_rules": [
                "English Language",
                {"choose": 1, "from": ["Literature in English"]},
                {"choose": 2, "from": ["Government", "History", "CRS"]}
            ],
            "credit_subjects": ["English Language", "Literature in English"],
            "offers": [{"university": "GAMMA", "cutoff": 190}],
            "difficulty": "Low"
        },
        {
            "name": "Law",
            "category": "Arts",
            "exam_rules": [
                "English Language",
                "Literature in English",
                {"choose": 2, "from": ["Government", "History", "CRS"]}
            ],
            "credit_subjects": ["English Language", "Literature in English", "Mathematics"],
            "offers": [{"university": "GAMMA", "cutoff": 250}],
            "difficulty": "High",
            "duration_years": 5
        },
        {
            "name": "General Studies",
            "category": "Education",
            "exam_rules": [
                "English Language",
                {"choose": 1, "from": ["Physics", "Chemistry"]},
                {"choose": 1, "from": ["Physics", "Biology"]}
            ],
            "credit_subjects": ["English Language"],
            "offers": [{"university": "ALPHA", "cutoff": 150}],
            "difficulty": "Low"
        }
    ]
}"#;

pub(super) fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json_str(TEST_CATALOG).expect("test catalog is valid"))
}

pub(super) fn engine() -> AdmissionEngine {
    AdmissionEngine::new(catalog(), EngineConfig::default())
}

pub(super) fn subjects(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn grades(entries: &[(&str, Grade)]) -> GradeSheet {
    entries
        .iter()
        .map(|(subject, grade)| (subject.to_string(), *grade))
        .collect()
}

pub(super) fn plan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

/// Strong science candidate from Lagos applying for Mathematics.
pub(super) fn science_student() -> StudentProfile {
    StudentProfile {
        name: "Ada Obi".to_string(),
        state: "Lagos".to_string(),
        preferred_course: "Mathematics".to_string(),
        exam_score: 260,
        exam_subjects: subjects(&["English Language", "Mathematics", "Physics", "Chemistry"]),
        grades: grades(&[
            ("English Language", Grade::B3),
            ("Mathematics", Grade::A1),
            ("Physics", Grade::B2),
            ("Chemistry", Grade::B3),
            ("Biology", Grade::C4),
            ("Economics", Grade::C5),
        ]),
        learning_style: LearningStyle::Visual,
        study_preference: StudyPreference::Practical,
    }
}

/// Meets every Pharmacy rule but scores 260 against the single 270 cutoff.
pub(super) fn pharmacy_applicant() -> StudentProfile {
    StudentProfile {
        name: "Chidi Eze".to_string(),
        state: "Enugu".to_string(),
        preferred_course: "Pharmacy".to_string(),
        exam_score: 260,
        exam_subjects: subjects(&["English Language", "Biology", "Chemistry", "Physics"]),
        grades: grades(&[
            ("English Language", Grade::B3),
            ("Mathematics", Grade::B2),
            ("Biology", Grade::A1),
            ("Chemistry", Grade::B3),
            ("Physics", Grade::C4),
        ]),
        learning_style: LearningStyle::ReadingWriting,
        study_preference: StudyPreference::Research,
    }
}

/// Low score and a mostly failing grade sheet.
pub(super) fn struggling_student() -> StudentProfile {
    StudentProfile {
        name: "Tunde Bello".to_string(),
        state: "Kano".to_string(),
        preferred_course: "Mathematics".to_string(),
        exam_score: 180,
        exam_subjects: subjects(&["English Language", "Mathematics", "Physics", "Chemistry"]),
        grades: grades(&[
            ("Biology", Grade::F9),
            ("Chemistry", Grade::E8),
            ("English Language", Grade::C6),
            ("Mathematics", Grade::C5),
            ("Physics", Grade::D7),
        ]),
        learning_style: LearningStyle::Kinesthetic,
        study_preference: StudyPreference::Applied,
    }
}

pub(super) struct FixedPredictor(pub f64);

impl SuccessPredictor for FixedPredictor {
    fn predict(
        &self,
        _category: CourseCategory,
        _features: &FeatureVector,
    ) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
}

pub(super) struct OfflinePredictor;

impl SuccessPredictor for OfflinePredictor {
    fn predict(
        &self,
        category: CourseCategory,
        _features: &FeatureVector,
    ) -> Result<f64, PredictorError> {
        Err(PredictorError::Unavailable(category))
    }
}
