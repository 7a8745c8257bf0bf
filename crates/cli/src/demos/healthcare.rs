//! Healthcare demo: patients and their prescriptions.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use recordkeep_core::{DomainResult, Entity, ItemId, Repository};
use recordkeep_healthcare::{Clinic, Patient, Prescription};

use crate::report::{Scenario, write_scenarios};

#[derive(Debug, Clone, Serialize)]
pub struct PatientChart {
    pub patient: Patient,
    pub active: Vec<Prescription>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthcareSummary {
    pub charts: Vec<PatientChart>,
    pub expired: Vec<Prescription>,
    pub scenarios: Vec<Scenario>,
}

pub fn run(today: NaiveDate) -> DomainResult<HealthcareSummary> {
    let jane = ItemId::new(1)?;
    let omar = ItemId::new(2)?;

    let mut clinic = Clinic::new();
    clinic.admit(Patient::new(jane, "Jane Cooper", 42)?)?;
    clinic.admit(Patient::new(omar, "Omar Haddad", 67)?)?;

    clinic.prescribe(Prescription::new(
        ItemId::new(101)?,
        jane,
        "Amoxicillin",
        "500mg",
        2,
        today + Duration::days(30),
    )?)?;
    clinic.prescribe(Prescription::new(
        ItemId::new(102)?,
        omar,
        "Atorvastatin",
        "20mg",
        5,
        today + Duration::days(180),
    )?)?;
    clinic.prescribe(Prescription::new(
        ItemId::new(103)?,
        omar,
        "Ibuprofen",
        "200mg",
        1,
        today - Duration::days(10),
    )?)?;

    let scenarios = vec![
        Scenario::domain(
            "dispense prescription 101",
            clinic.dispense(ItemId::new(101)?, today),
            |left| format!("{left} refills left"),
        ),
        Scenario::domain(
            "dispense expired prescription 103",
            clinic.dispense(ItemId::new(103)?, today),
            |left| format!("{left} refills left"),
        ),
        Scenario::domain(
            "prescribe for unknown patient 9",
            Prescription::new(ItemId::new(104)?, ItemId::new(9)?, "Aspirin", "81mg", 0, today)
                .and_then(|rx| clinic.prescribe(rx)),
            |_| "prescribed".to_string(),
        ),
        Scenario::domain(
            "admit patient 2 again",
            Patient::new(omar, "Omar Haddad", 67).and_then(|p| clinic.admit(p)),
            |_| "admitted".to_string(),
        ),
        Scenario::domain(
            "record prescription with blank medication",
            Prescription::new(ItemId::new(105)?, jane, "  ", "10mg", 1, today),
            |rx| format!("built prescription {}", rx.id()),
        ),
    ];

    let charts = clinic
        .patients()
        .all()
        .into_iter()
        .map(|patient| {
            let active = clinic.active_for(patient.id(), today)?;
            Ok(PatientChart { patient, active })
        })
        .collect::<DomainResult<Vec<_>>>()?;
    let expired = clinic
        .prescriptions()
        .iter()
        .filter(|rx| rx.is_expired(today))
        .cloned()
        .collect();

    Ok(HealthcareSummary {
        charts,
        expired,
        scenarios,
    })
}

impl fmt::Display for HealthcareSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Healthcare ==")?;
        for chart in &self.charts {
            writeln!(
                f,
                "Patient #{} {} (age {})",
                chart.patient.id(),
                chart.patient.name(),
                chart.patient.age()
            )?;
            for rx in &chart.active {
                writeln!(
                    f,
                    "  Rx #{} {} {}  refills {}  expires {}",
                    rx.id(),
                    rx.medication(),
                    rx.dosage(),
                    rx.refills(),
                    rx.expires_on()
                )?;
            }
        }
        for rx in &self.expired {
            writeln!(
                f,
                "Expired: Rx #{} {} for patient #{} (on {})",
                rx.id(),
                rx.medication(),
                rx.patient_id(),
                rx.expires_on()
            )?;
        }
        write_scenarios(f, &self.scenarios)
    }
}
