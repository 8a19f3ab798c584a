use super::common::*;
use crate::admissions::domain::Grade;
use crate::admissions::engine::EngineError;

#[test]
fn mathematics_accepts_two_optional_sciences() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "Mathematics",
            &subjects(&["English Language", "Mathematics", "Physics", "Chemistry"]),
        )
        .expect("course exists");

    assert!(check.passed, "{}", check.reason);
    assert_eq!(check.reason, "Valid JAMB combination");
}

#[test]
fn mathematics_reports_how_many_optional_subjects_were_found() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "Mathematics",
            &subjects(&["English Language", "Mathematics", "Physics"]),
        )
        .expect("course exists");

    assert!(!check.passed);
    assert_eq!(
        check.reason,
        "Missing: Any two from: Physics, Chemistry, Economics, Biology (you have 1)"
    );
}

#[test]
fn missing_literals_and_combinators_are_listed_in_rule_order() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects("Mathematics", &subjects(&["Government", "History"]))
        .expect("course exists");

    assert_eq!(
        check.reason,
        "Missing: English Language, Mathematics, Any two from: Physics, Chemistry, Economics, Biology (you have 0)"
    );
}

#[test]
fn combinators_resolve_synonyms_on_both_sides() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "English Studies",
            &subjects(&[
                "English Language",
                "Literature",
                "Government",
                "Christian Religious Studies",
            ]),
        )
        .expect("course exists");

    assert!(check.passed, "{}", check.reason);
}

#[test]
fn literal_rules_match_names_exactly() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "Law",
            &subjects(&["English Language", "Literature", "Government", "CRS"]),
        )
        .expect("course exists");

    assert!(!check.passed);
    assert_eq!(check.reason, "Missing: Literature in English");
}

#[test]
fn one_subject_can_satisfy_two_combinators() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "General Studies",
            &subjects(&["English Language", "Physics", "Mathematics", "Government"]),
        )
        .expect("course exists");

    assert!(check.passed, "Physics should count toward both choose-one rules");
}

#[test]
fn duplicate_selections_do_not_fill_a_choose_two() {
    let engine = engine();

    let check = engine
        .validate_exam_subjects(
            "Mathematics",
            &subjects(&["English Language", "Mathematics", "Physics", "Physics"]),
        )
        .expect("course exists");

    assert!(!check.passed);
    assert!(check.reason.ends_with("(you have 1)"));
}

#[test]
fn grade_sheet_needs_five_credits_before_named_subjects() {
    let engine = engine();
    let sheet = grades(&[
        ("English Language", Grade::B3),
        ("Mathematics", Grade::C6),
        ("Physics", Grade::D7),
        ("Chemistry", Grade::C5),
        ("Biology", Grade::A1),
    ]);

    let check = engine
        .validate_grade_sheet("Mathematics", &sheet)
        .expect("course exists");

    assert!(!check.passed);
    assert_eq!(check.reason, "Need 5 credits minimum (you have 4)");
}

#[test]
fn grade_sheet_lists_each_named_shortfall() {
    let engine = engine();
    let sheet = grades(&[
        ("English Language", Grade::B3),
        ("Mathematics", Grade::C6),
        ("Physics", Grade::E8),
        ("Chemistry", Grade::C5),
        ("Biology", Grade::A1),
        ("Economics", Grade::C4),
    ]);

    let check = engine
        .validate_grade_sheet("Pharmacy", &sheet)
        .expect("course exists");

    assert!(!check.passed);
    assert_eq!(
        check.reason,
        "Requirements not met: Physics (need C6+, you have E8)"
    );

    let without_physics = grades(&[
        ("English Language", Grade::B3),
        ("Mathematics", Grade::C6),
        ("Chemistry", Grade::C5),
        ("Biology", Grade::A1),
        ("Economics", Grade::C4),
    ]);
    let check = engine
        .validate_grade_sheet("Pharmacy", &without_physics)
        .expect("course exists");
    assert_eq!(check.reason, "Requirements not met: Physics (not taken)");
}

#[test]
fn grade_sheet_passes_with_credit_count() {
    let engine = engine();
    let student = science_student();

    let check = engine
        .validate_grade_sheet("Mathematics", &student.grades)
        .expect("course exists");

    assert!(check.passed);
    assert_eq!(check.reason, "Valid O'Level (6 credits)");
}

#[test]
fn unknown_course_fails_fast() {
    let engine = engine();

    match engine.validate_exam_subjects("Astrology", &subjects(&["English Language"])) {
        Err(EngineError::UnknownCourse(name)) => assert_eq!(name, "Astrology"),
        other => panic!("expected unknown course, got {other:?}"),
    }
    assert!(matches!(
        engine.validate_grade_sheet("Astrology", &science_student().grades),
        Err(EngineError::UnknownCourse(_))
    ));
}
