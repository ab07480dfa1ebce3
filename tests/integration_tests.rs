use student_stats::output::render_report;
use student_stats::parser::{Age, parse_records_counted};
use student_stats::stats::{ClassStats, LetterGrade};

#[test]
fn test_full_pipeline() {
    let text = include_str!("fixtures/students.csv");
    let (records, skipped) = parse_records_counted(text).expect("Failed to parse records");

    // Bad (non-integer grade) and Short (two columns) are dropped
    assert_eq!(records.len(), 4);
    assert_eq!(skipped, 2);

    // Unparsable age survives as its raw string
    let mia = records.iter().find(|r| r.name == "Mia").unwrap();
    assert_eq!(mia.age, Age::Raw("unknown".to_string()));
    assert_eq!(mia.subject, "history");

    let stats = ClassStats::from_records(&records);
    assert_eq!(stats.total_students, 4);
    assert_eq!(stats.average_grade, 78.5);
    assert_eq!(stats.highest_grade, 95);
    assert_eq!(stats.lowest_grade, 59);
    assert_eq!(stats.grade_range, 36);
    assert_eq!(stats.subject_counts.get("math"), Some(&2));
    assert_eq!(stats.subject_counts.get("history"), Some(&1));
    assert_eq!(stats.subject_counts.get("science"), Some(&1));
    assert_eq!(stats.grade_distribution[&LetterGrade::A], 1);
    assert_eq!(stats.grade_distribution[&LetterGrade::B], 1);
    assert_eq!(stats.grade_distribution[&LetterGrade::C], 1);
    assert_eq!(stats.grade_distribution[&LetterGrade::D], 0);
    assert_eq!(stats.grade_distribution[&LetterGrade::F], 1);

    let report = render_report(&stats);
    assert!(report.starts_with("COMPREHENSIVE STUDENT ANALYSIS REPORT\n"));
    assert!(report.contains("Total students: 4\n"));
    assert!(report.contains("Average grade: 78.5\n"));
    assert!(report.contains("History: 1\n"));
    assert!(report.contains("Math: 2\n"));
    assert!(report.contains("A: 1 (25.0%)\n"));
    assert!(report.contains("D: 0 (0.0%)\n"));
}

#[test]
fn test_pipeline_is_idempotent() {
    let text = include_str!("fixtures/students.csv");

    let run = |t: &str| {
        let (records, _) = parse_records_counted(t).unwrap();
        render_report(&ClassStats::from_records(&records))
    };

    assert_eq!(run(text), run(text));
}

#[test]
fn test_header_only_input_still_renders() {
    let (records, _) = parse_records_counted("name,age,grade,subject\n").unwrap();
    assert!(records.is_empty());

    let stats = ClassStats::from_records(&records);
    let report = render_report(&stats);

    assert!(report.contains("BASIC STATISTICS"));
    assert!(report.contains("Total students: 0\n"));
    assert!(report.contains("SUBJECT COUNTS"));
    assert!(report.contains("(none)\n"));
    assert!(report.contains("GRADE DISTRIBUTION (Letter Grades)"));
    assert!(report.contains("F: 0 (0.0%)\n"));
}
