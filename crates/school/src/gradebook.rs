//! Class-level reports over a snapshot of students.

use std::collections::BTreeMap;

use crate::student::{LetterGrade, Student};

/// Mean score, or `None` for an empty class.
pub fn class_average(students: &[Student]) -> Option<f64> {
    if students.is_empty() {
        return None;
    }
    let total: u32 = students.iter().map(|s| u32::from(s.score().get())).sum();
    Some(f64::from(total) / students.len() as f64)
}

/// Number of students per letter grade. Grades nobody earned are absent.
pub fn distribution(students: &[Student]) -> BTreeMap<LetterGrade, usize> {
    let mut counts = BTreeMap::new();
    for student in students {
        *counts.entry(student.letter_grade()).or_insert(0) += 1;
    }
    counts
}

/// Highest scorer; the earliest student wins a tie.
pub fn top_student(students: &[Student]) -> Option<&Student> {
    let mut best: Option<&Student> = None;
    for student in students {
        match best {
            Some(b) if b.score() >= student.score() => {}
            _ => best = Some(student),
        }
    }
    best
}
