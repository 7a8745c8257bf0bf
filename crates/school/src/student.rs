use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Name, ValueObject};

/// Percentage score in `0..=100`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> DomainResult<Self> {
        if !(0..=i64::from(Self::MAX)).contains(&value) {
            return Err(DomainError::invalid(format!(
                "score must be between 0 and {} (got {value})",
                Self::MAX
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn letter(self) -> LetterGrade {
        match self.0 {
            90.. => LetterGrade::A,
            80..=89 => LetterGrade::B,
            70..=79 => LetterGrade::C,
            60..=69 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }
}

impl ValueObject for Score {}

impl TryFrom<i64> for Score {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(value: Score) -> Self {
        value.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl core::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: ItemId,
    name: Name,
    score: Score,
}

impl Student {
    pub fn new(id: ItemId, name: &str, score: i64) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: Name::field("name", name)?,
            score: Score::new(score)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn letter_grade(&self) -> LetterGrade {
        self.score.letter()
    }
}

impl Entity for Student {
    type Id = ItemId;
    const KIND: &'static str = "student";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Adjustable for Student {
    type Input = i64;
    type Value = Score;

    fn validate_input(input: i64) -> DomainResult<Score> {
        Score::new(input)
    }

    fn apply_value(&mut self, value: Score) {
        self.score = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_grade_boundaries() {
        let letter = |v| Score::new(v).unwrap().letter();
        assert_eq!(letter(100), LetterGrade::A);
        assert_eq!(letter(90), LetterGrade::A);
        assert_eq!(letter(89), LetterGrade::B);
        assert_eq!(letter(80), LetterGrade::B);
        assert_eq!(letter(79), LetterGrade::C);
        assert_eq!(letter(60), LetterGrade::D);
        assert_eq!(letter(59), LetterGrade::F);
        assert_eq!(letter(0), LetterGrade::F);
    }

    #[test]
    fn score_out_of_range_is_invalid() {
        assert!(matches!(Score::new(-1), Err(DomainError::InvalidValue(_))));
        assert!(matches!(Score::new(101), Err(DomainError::InvalidValue(_))));
    }

    #[test]
    fn student_requires_name() {
        assert!(Student::new(ItemId::new(1).unwrap(), "", 50).is_err());
    }
}
