//! School grading domain module.

pub mod gradebook;
pub mod student;

pub use gradebook::{class_average, distribution, top_student};
pub use student::{LetterGrade, Score, Student};
