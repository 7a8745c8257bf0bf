use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Name};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PrescriptionFields")]
pub struct Prescription {
    id: ItemId,
    patient_id: ItemId,
    medication: Name,
    dosage: Name,
    refills: u32,
    expires_on: NaiveDate,
}

#[derive(Deserialize)]
struct PrescriptionFields {
    id: ItemId,
    patient_id: ItemId,
    medication: String,
    dosage: String,
    refills: i64,
    expires_on: NaiveDate,
}

impl TryFrom<PrescriptionFields> for Prescription {
    type Error = DomainError;

    fn try_from(f: PrescriptionFields) -> Result<Self, Self::Error> {
        Self::new(f.id, f.patient_id, &f.medication, &f.dosage, f.refills, f.expires_on)
    }
}

impl Prescription {
    pub fn new(
        id: ItemId,
        patient_id: ItemId,
        medication: &str,
        dosage: &str,
        refills: i64,
        expires_on: NaiveDate,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            patient_id,
            medication: Name::field("medication", medication)?,
            dosage: Name::field("dosage", dosage)?,
            refills: Self::validate_input(refills)?,
            expires_on,
        })
    }

    pub fn patient_id(&self) -> ItemId {
        self.patient_id
    }

    pub fn medication(&self) -> &str {
        self.medication.as_str()
    }

    pub fn dosage(&self) -> &str {
        self.dosage.as_str()
    }

    pub fn refills(&self) -> u32 {
        self.refills
    }

    pub fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expires_on
    }
}

impl Entity for Prescription {
    type Id = ItemId;
    const KIND: &'static str = "prescription";

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Remaining refills are the only mutable field.
impl Adjustable for Prescription {
    type Input = i64;
    type Value = u32;

    fn validate_input(input: i64) -> DomainResult<u32> {
        u32::try_from(input)
            .map_err(|_| DomainError::invalid(format!("refills cannot be negative (got {input})")))
    }

    fn apply_value(&mut self, value: u32) {
        self.refills = value;
    }
}
