use serde::Serialize;
use std::collections::BTreeMap;

use crate::parser::StudentRecord;

/// Letter classification bucket. Ordering matches report order (A first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    pub fn label(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

/// All letters in report order.
pub const LETTERS: [LetterGrade; 5] = [
    LetterGrade::A,
    LetterGrade::B,
    LetterGrade::C,
    LetterGrade::D,
    LetterGrade::F,
];

/// Lower bounds of each band, checked in order; anything below 60 is an F.
/// Out-of-range grades (negative, above 100) classify via the same bounds.
static GRADE_BANDS: &[(i64, LetterGrade)] = &[
    (90, LetterGrade::A),
    (80, LetterGrade::B),
    (70, LetterGrade::C),
    (60, LetterGrade::D),
];

/// Converts a numeric grade into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | 80–89   | B     |
/// | 70–79   | C     |
/// | 60–69   | D     |
/// | < 60    | F     |
pub fn letter_grade(grade: i64) -> LetterGrade {
    GRADE_BANDS
        .iter()
        .find(|(floor, _)| grade >= *floor)
        .map(|(_, letter)| *letter)
        .unwrap_or(LetterGrade::F)
}

/// Descriptive statistics for one run, a pure function of the record list.
///
/// Maps are `BTreeMap` so iteration order is deterministic: subjects sort
/// lexicographically and letters run A through F, which is what the report
/// layout requires.
#[derive(Debug, Serialize)]
pub struct ClassStats {
    pub total_students: usize,
    pub average_grade: f64,
    pub highest_grade: i64,
    pub lowest_grade: i64,
    pub grade_range: i64,
    pub subject_counts: BTreeMap<String, usize>,
    pub grade_distribution: BTreeMap<LetterGrade, usize>,
    pub grade_distribution_pct: BTreeMap<LetterGrade, f64>,
}

impl ClassStats {
    /// Computes statistics over a full record set.
    ///
    /// The empty case is an explicit branch: every numeric stat is zero, both
    /// distribution maps still enumerate all five letters, and
    /// `subject_counts` is empty.
    pub fn from_records(records: &[StudentRecord]) -> Self {
        if records.is_empty() {
            return Self::empty();
        }

        let total = records.len();
        let grades: Vec<i64> = records.iter().map(|r| r.grade).collect();

        let sum: i64 = grades.iter().sum();
        let average = sum as f64 / total as f64;
        let highest = grades.iter().copied().max().unwrap_or(0);
        let lowest = grades.iter().copied().min().unwrap_or(0);

        let mut subject_counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            let subject = record.subject.trim().to_lowercase();
            if subject.is_empty() {
                continue;
            }
            *subject_counts.entry(subject).or_insert(0) += 1;
        }

        let mut distribution: BTreeMap<LetterGrade, usize> =
            LETTERS.iter().map(|l| (*l, 0)).collect();
        for grade in &grades {
            *distribution.entry(letter_grade(*grade)).or_insert(0) += 1;
        }

        let distribution_pct = distribution
            .iter()
            .map(|(letter, count)| (*letter, Self::pct(*count, total)))
            .collect();

        ClassStats {
            total_students: total,
            average_grade: average,
            highest_grade: highest,
            lowest_grade: lowest,
            grade_range: highest - lowest,
            subject_counts,
            grade_distribution: distribution,
            grade_distribution_pct: distribution_pct,
        }
    }

    fn empty() -> Self {
        ClassStats {
            total_students: 0,
            average_grade: 0.0,
            highest_grade: 0,
            lowest_grade: 0,
            grade_range: 0,
            subject_counts: BTreeMap::new(),
            grade_distribution: LETTERS.iter().map(|l| (*l, 0)).collect(),
            grade_distribution_pct: LETTERS.iter().map(|l| (*l, 0.0)).collect(),
        }
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }
}
