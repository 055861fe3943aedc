//! Input records handed to the compliance validator and file builders.
//!
//! The caller resolves these from storage before calling into the core;
//! nothing here knows about tenancy, transactions, or requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::competence::Competence;
use crate::enums::Sex;

/// A single clinical procedure to be billed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureRecord {
    /// National procedure table code, zero-left-padded numeric string.
    pub code: String,
    pub competence: Competence,
    /// Diagnosis code when one was recorded.
    pub diagnosis: Option<String>,
    pub quantity: u32,
    /// Unit value in integer cents.
    pub value_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub mother_name: Option<String>,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    /// National health card number, when the patient has one.
    pub cns: Option<String>,
    /// Taxpayer number, when the patient has one.
    pub cpf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalRecord {
    pub name: String,
    pub cns: String,
    /// Occupation classification code.
    pub cbo: String,
}

/// The health facility a procedure was performed at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    /// 7-digit national facility registry identifier.
    pub cnes: String,
    pub cnpj: String,
    /// Two-letter state code.
    pub state: String,
    /// IBGE municipality code.
    pub ibge_code: String,
}
