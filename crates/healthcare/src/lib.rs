//! Healthcare domain module: patients, prescriptions and the clinic that links them.

pub mod clinic;
pub mod patient;
pub mod prescription;

pub use clinic::Clinic;
pub use patient::Patient;
pub use prescription::Prescription;
