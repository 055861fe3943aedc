//! Procedure compliance validation.
//!
//! Pure functions over in-memory records: check-digit validators for the
//! national identifiers, and the rule-driven compliance validator that
//! decides whether a procedure may enter an export file.

pub mod digits;
pub mod validator;

pub use digits::{
    validate_cns, validate_cpf, validate_diagnosis_code, validate_facility_id,
    validate_procedure_code,
};
pub use validator::{PatientDocument, age_in_years, choose_document, validate};
