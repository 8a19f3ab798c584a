use super::common::*;
use crate::admissions::config::EngineConfig;
use crate::admissions::domain::Grade;
use crate::admissions::intake::{ProfileGuard, ProfileViolation};

#[test]
fn guard_accepts_well_formed_profile() {
    let catalog = catalog();
    let guard = ProfileGuard::default();

    assert_eq!(guard.check(&catalog, &science_student()), Ok(()));
}

#[test]
fn guard_requires_a_name() {
    let catalog = catalog();
    let mut student = science_student();
    student.name = "   ".to_string();

    assert_eq!(
        ProfileGuard::default().check(&catalog, &student),
        Err(ProfileViolation::MissingName)
    );
}

#[test]
fn guard_caps_exam_score() {
    let catalog = catalog();
    let mut student = science_student();
    student.exam_score = 401;

    assert_eq!(
        ProfileGuard::default().check(&catalog, &student),
        Err(ProfileViolation::ScoreOutOfRange(401))
    );
}

#[test]
fn guard_counts_distinct_subjects_after_synonyms() {
    let catalog = catalog();
    let mut student = science_student();
    student.exam_subjects = subjects(&[
        "English Language",
        "Literature",
        "Literature in English",
        "Government",
    ]);

    match ProfileGuard::default().check(&catalog, &student) {
        Err(ProfileViolation::ExamSubjectCount { expected, found }) => {
            assert_eq!(expected, 4);
            assert_eq!(found, 3);
        }
        other => panic!("expected subject count violation, got {other:?}"),
    }
}

#[test]
fn guard_follows_configured_subject_count() {
    let catalog = catalog();
    let config = EngineConfig {
        exam_subject_count: 3,
        ..EngineConfig::default()
    };
    let mut student = science_student();
    student.exam_subjects = subjects(&["English Language", "Mathematics", "Physics"]);

    assert_eq!(ProfileGuard::from_config(&config).check(&catalog, &student), Ok(()));
}

#[test]
fn guard_rejects_subjects_outside_vocabulary() {
    let catalog = catalog();
    let mut student = science_student();
    student.exam_subjects = subjects(&["English Language", "Mathematics", "Physics", "Astronomy"]);

    assert_eq!(
        ProfileGuard::default().check(&catalog, &student),
        Err(ProfileViolation::UnknownExamSubject("Astronomy".to_string()))
    );

    let mut student = science_student();
    student.grades.insert("Basket Weaving".to_string(), Grade::A1);
    assert_eq!(
        ProfileGuard::default().check(&catalog, &student),
        Err(ProfileViolation::UnknownGradedSubject("Basket Weaving".to_string()))
    );
}

#[test]
fn secondary_only_subjects_are_not_exam_subjects() {
    let catalog = catalog();
    let mut student = science_student();
    student.exam_subjects = subjects(&[
        "English Language",
        "Mathematics",
        "Physics",
        "Further Mathematics",
    ]);

    assert_eq!(
        ProfileGuard::default().check(&catalog, &student),
        Err(ProfileViolation::UnknownExamSubject("Further Mathematics".to_string()))
    );
}

#[test]
fn guard_rejects_grades_recorded_under_synonyms() {
    let catalog = catalog();
    let mut student = science_student();
    student.grades = grades(&[
        ("English Language", Grade::A1),
        ("Literature", Grade::A1),
        ("Government", Grade::A1),
        ("History", Grade::A1),
        ("Mathematics", Grade::B2),
        ("CRS", Grade::A1),
    ]);

    match ProfileGuard::default().check(&catalog, &student) {
        Err(ProfileViolation::GradedSubjectAlias { subject, canonical }) => {
            assert!(
                (subject == "Literature" && canonical == "Literature in English")
                    || (subject == "CRS" && canonical == "Christian Religious Studies"),
                "unexpected alias {subject} -> {canonical}"
            );
        }
        other => panic!("expected graded subject alias violation, got {other:?}"),
    }

    student.grades = grades(&[
        ("English Language", Grade::A1),
        ("Literature in English", Grade::A1),
        ("Government", Grade::A1),
        ("History", Grade::A1),
        ("Mathematics", Grade::B2),
        ("Christian Religious Studies", Grade::A1),
    ]);
    assert_eq!(ProfileGuard::default().check(&catalog, &student), Ok(()));
}
