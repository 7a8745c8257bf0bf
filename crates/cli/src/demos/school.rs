//! School grading demo.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use recordkeep_core::{DomainResult, Entity, InMemoryRepository, ItemId, Repository, seed};
use recordkeep_school::{LetterGrade, Student, class_average, distribution, top_student};

use crate::report::{Scenario, write_scenarios};

pub fn sample_students() -> DomainResult<Vec<Student>> {
    Ok(vec![
        Student::new(ItemId::new(1)?, "Emma Wilson", 94)?,
        Student::new(ItemId::new(2)?, "Liam Brown", 78)?,
        Student::new(ItemId::new(3)?, "Olivia Davis", 85)?,
        Student::new(ItemId::new(4)?, "Noah Miller", 58)?,
        Student::new(ItemId::new(5)?, "Ava Garcia", 71)?,
    ])
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolSummary {
    pub students: Vec<Student>,
    pub average: Option<f64>,
    pub distribution: BTreeMap<LetterGrade, usize>,
    pub top_student: Option<String>,
    pub scenarios: Vec<Scenario>,
}

pub fn run() -> DomainResult<SchoolSummary> {
    let mut roster: InMemoryRepository<Student> = InMemoryRepository::new();
    seed(&mut roster, sample_students()?)?;

    let scenarios = vec![
        Scenario::domain(
            "regrade student 2 to 88",
            roster.update(ItemId::new(2)?, 88),
            |_| "score updated".to_string(),
        ),
        Scenario::domain(
            "regrade student 3 to 150",
            roster.update(ItemId::new(3)?, 150),
            |_| "score updated".to_string(),
        ),
        Scenario::domain(
            "regrade unknown student 77 to -5",
            roster.update(ItemId::new(77)?, -5),
            |_| "score updated".to_string(),
        ),
        Scenario::domain(
            "look up student 5",
            roster.get(ItemId::new(5)?).map(|s| s.name().to_string()),
            |name| format!("found {name}"),
        ),
        Scenario::domain(
            "withdraw student 99",
            roster.remove(ItemId::new(99)?),
            |s| format!("removed {}", s.name()),
        ),
    ];

    let students = roster.all();
    Ok(SchoolSummary {
        average: class_average(&students),
        distribution: distribution(&students),
        top_student: top_student(&students).map(|s| s.name().to_string()),
        students,
        scenarios,
    })
}

impl fmt::Display for SchoolSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== School ==")?;
        for s in &self.students {
            writeln!(
                f,
                "  #{:<3} {:<14} {:>3}  {}",
                s.id(),
                s.name(),
                s.score().get(),
                s.letter_grade()
            )?;
        }
        match self.average {
            Some(avg) => writeln!(f, "Class average: {avg:.1}")?,
            None => writeln!(f, "Class average: n/a")?,
        }
        let dist: Vec<String> = self
            .distribution
            .iter()
            .map(|(grade, count)| format!("{grade}={count}"))
            .collect();
        writeln!(f, "Distribution: {}", dist.join(" "))?;
        if let Some(top) = &self.top_student {
            writeln!(f, "Top student: {top}")?;
        }
        write_scenarios(f, &self.scenarios)
    }
}
