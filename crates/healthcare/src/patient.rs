use serde::{Deserialize, Serialize};

use recordkeep_core::{DomainError, DomainResult, Entity, ItemId, Name};

pub const MAX_AGE: u8 = 150;

/// Registered patient. Immutable once admitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatientFields")]
pub struct Patient {
    id: ItemId,
    name: Name,
    age: u8,
}

#[derive(Deserialize)]
struct PatientFields {
    id: ItemId,
    name: String,
    age: i64,
}

impl TryFrom<PatientFields> for Patient {
    type Error = DomainError;

    fn try_from(f: PatientFields) -> Result<Self, Self::Error> {
        Self::new(f.id, &f.name, f.age)
    }
}

impl Patient {
    pub fn new(id: ItemId, name: &str, age: i64) -> DomainResult<Self> {
        let age = u8::try_from(age)
            .ok()
            .filter(|a| *a <= MAX_AGE)
            .ok_or_else(|| {
                DomainError::invalid(format!("age must be between 0 and {MAX_AGE} (got {age})"))
            })?;

        Ok(Self {
            id,
            name: Name::field("name", name)?,
            age,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn age(&self) -> u8 {
        self.age
    }
}

impl Entity for Patient {
    type Id = ItemId;
    const KIND: &'static str = "patient";

    fn id(&self) -> ItemId {
        self.id
    }
}
