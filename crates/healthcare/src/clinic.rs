//! Clinic: patient registry plus the prescriptions issued to them.

use chrono::NaiveDate;

use recordkeep_core::{DomainError, DomainResult, Entity, InMemoryRepository, ItemId, Repository};

use crate::patient::Patient;
use crate::prescription::Prescription;

#[derive(Debug, Clone, Default)]
pub struct Clinic {
    patients: InMemoryRepository<Patient>,
    prescriptions: InMemoryRepository<Prescription>,
}

impl Clinic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &InMemoryRepository<Patient> {
        &self.patients
    }

    pub fn prescriptions(&self) -> &InMemoryRepository<Prescription> {
        &self.prescriptions
    }

    pub fn admit(&mut self, patient: Patient) -> DomainResult<()> {
        self.patients.add(patient)
    }

    /// Record a prescription; the patient must already be admitted.
    pub fn prescribe(&mut self, prescription: Prescription) -> DomainResult<()> {
        self.patients.get(prescription.patient_id())?;
        self.prescriptions.add(prescription)
    }

    /// Dispense one fill. Returns the refills left afterwards.
    ///
    /// Fails with `InvalidValue` when the prescription has expired or has no
    /// refills left.
    pub fn dispense(&mut self, id: ItemId, today: NaiveDate) -> DomainResult<u32> {
        let rx = self.prescriptions.get(id)?;
        if rx.is_expired(today) {
            return Err(DomainError::invalid(format!(
                "prescription {id} expired on {}",
                rx.expires_on()
            )));
        }
        let remaining = rx
            .refills()
            .checked_sub(1)
            .ok_or_else(|| DomainError::invalid(format!("prescription {id} has no refills left")))?;

        self.prescriptions.update(id, i64::from(remaining))?;
        tracing::info!(%id, remaining, "prescription dispensed");
        Ok(remaining)
    }

    /// Unexpired prescriptions for one patient, in issue order.
    pub fn active_for(&self, patient_id: ItemId, today: NaiveDate) -> DomainResult<Vec<Prescription>> {
        self.patients.get(patient_id)?;
        Ok(self
            .prescriptions
            .iter()
            .filter(|rx| rx.patient_id() == patient_id && !rx.is_expired(today))
            .cloned()
            .collect())
    }

    /// Remove a patient together with every prescription issued to them.
    pub fn discharge(&mut self, patient_id: ItemId) -> DomainResult<Patient> {
        let patient = self.patients.remove(patient_id)?;
        let issued: Vec<ItemId> = self
            .prescriptions
            .iter()
            .filter(|rx| rx.patient_id() == patient_id)
            .map(|rx| rx.id())
            .collect();
        for rx_id in issued {
            self.prescriptions.remove(rx_id)?;
        }
        Ok(patient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clinic() -> Clinic {
        let mut clinic = Clinic::new();
        clinic.admit(Patient::new(id(1), "Jane Doe", 34).unwrap()).unwrap();
        clinic
            .prescribe(
                Prescription::new(id(10), id(1), "Amoxicillin", "500mg", 1, date(2026, 12, 31))
                    .unwrap(),
            )
            .unwrap();
        clinic
            .prescribe(
                Prescription::new(id(11), id(1), "Ibuprofen", "200mg", 3, date(2026, 1, 31))
                    .unwrap(),
            )
            .unwrap();
        clinic
    }

    #[test]
    fn prescribe_requires_admitted_patient() {
        let mut clinic = clinic();
        let rx = Prescription::new(id(12), id(99), "Aspirin", "81mg", 0, date(2026, 12, 31)).unwrap();
        assert!(matches!(clinic.prescribe(rx), Err(DomainError::NotFound(_))));
        assert_eq!(clinic.prescriptions().len(), 2);
    }

    #[test]
    fn dispense_counts_down_then_refuses() {
        let mut clinic = clinic();
        let today = date(2026, 6, 1);

        assert_eq!(clinic.dispense(id(10), today).unwrap(), 0);
        let err = clinic.dispense(id(10), today).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(ref m) if m.contains("no refills")));
    }

    #[test]
    fn expired_prescription_is_not_dispensed() {
        let mut clinic = clinic();
        let err = clinic.dispense(id(11), date(2026, 6, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(ref m) if m.contains("expired")));
        assert_eq!(clinic.prescriptions().get(id(11)).unwrap().refills(), 3);
    }

    #[test]
    fn active_for_skips_expired() {
        let clinic = clinic();
        let active = clinic.active_for(id(1), date(2026, 6, 1)).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].medication(), "Amoxicillin");
    }

    #[test]
    fn discharge_removes_prescriptions() {
        let mut clinic = clinic();
        let patient = clinic.discharge(id(1)).unwrap();
        assert_eq!(patient.name(), "Jane Doe");
        assert!(clinic.prescriptions().is_empty());
        assert!(matches!(clinic.discharge(id(1)), Err(DomainError::NotFound(_))));
    }
}
