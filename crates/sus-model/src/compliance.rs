//! Compliance verdicts.
//!
//! Reason codes are part of the audit contract: the string form is stable,
//! the emission order is fixed, and codes are never renamed or removed.
//! Downstream audit tooling aggregates on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable reason codes emitted by the compliance validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The procedure code has never existed in any rule version.
    ProcedureNotFound,
    /// The code exists but no rule version covers the competence.
    ProcedureOutOfValidity,
    MissingRequiredCid,
    AgeBelowMinimum,
    AgeAboveMaximum,
    SexMismatch,
    /// The procedure is routed to the authorization-file path.
    RequiresPriorAuthorization,
    DocumentRequiresCns,
    DocumentRequiresCpf,
    InvalidFacilityCheckDigit,
    InvalidProfessionalCardCheckDigit,
    InvalidProcedureCheckDigit,
}

impl ReasonCode {
    /// The stable string form used in reports and audit trails.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::ProcedureNotFound => "procedure_not_found",
            ReasonCode::ProcedureOutOfValidity => "procedure_out_of_validity",
            ReasonCode::MissingRequiredCid => "missing_required_cid",
            ReasonCode::AgeBelowMinimum => "age_below_minimum",
            ReasonCode::AgeAboveMaximum => "age_above_maximum",
            ReasonCode::SexMismatch => "sex_mismatch",
            ReasonCode::RequiresPriorAuthorization => "requires_prior_authorization",
            ReasonCode::DocumentRequiresCns => "document_requires_cns",
            ReasonCode::DocumentRequiresCpf => "document_requires_cpf",
            ReasonCode::InvalidFacilityCheckDigit => "invalid_facility_check_digit",
            ReasonCode::InvalidProfessionalCardCheckDigit => {
                "invalid_professional_card_check_digit"
            }
            ReasonCode::InvalidProcedureCheckDigit => "invalid_procedure_check_digit",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one procedure. `ok` iff `errors` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub ok: bool,
    /// Ordered set: first-emission order, no duplicates.
    pub errors: Vec<ReasonCode>,
}

impl Default for ComplianceResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplianceResult {
    pub fn new() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
        }
    }

    /// Append a reason code, preserving first-emission order.
    pub fn record(&mut self, code: ReasonCode) {
        if !self.errors.contains(&code) {
            self.errors.push(code);
        }
        self.ok = false;
    }

    pub fn contains(&self, code: ReasonCode) -> bool {
        self.errors.contains(&code)
    }
}
