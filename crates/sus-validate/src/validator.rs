//! The rule-driven compliance validator.
//!
//! Check order is fixed: reason codes land in the result in a stable order
//! that audit trails and tests assert on.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use sus_model::{
    ComplianceResult, DocumentPolicy, FacilityRecord, PatientRecord, ProcedureRecord,
    ProfessionalRecord, ReasonCode, RuleResolution,
};

use crate::digits::{validate_cns, validate_facility_id, validate_procedure_code};

/// Completed years between `birth_date` and `at_date`: subtract the birth
/// year, decrement while the month/day has not yet been reached.
pub fn age_in_years(birth_date: NaiveDate, at_date: NaiveDate) -> i32 {
    let mut years = at_date.year() - birth_date.year();
    if (at_date.month(), at_date.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    years
}

/// Which patient document goes on an ambulatory billing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientDocument {
    Cns,
    Cpf,
}

/// Pick the document for a billing line from the rule's policy. Under
/// `Either`, the health card is preferred when the patient has one.
pub fn choose_document(patient: &PatientRecord, policy: DocumentPolicy) -> PatientDocument {
    match policy {
        DocumentPolicy::Cns => PatientDocument::Cns,
        DocumentPolicy::Cpf => PatientDocument::Cpf,
        DocumentPolicy::Either => {
            if patient.cns.is_some() {
                PatientDocument::Cns
            } else if patient.cpf.is_some() {
                PatientDocument::Cpf
            } else {
                PatientDocument::Cns
            }
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|text| text.trim().is_empty())
}

/// Validate one procedure against its resolved rule and the identifier
/// check digits.
///
/// Rule-dependent checks are skipped entirely when no rule version resolves;
/// identifier checks always run. Never mutates its inputs.
pub fn validate(
    procedure: &ProcedureRecord,
    patient: &PatientRecord,
    professional: &ProfessionalRecord,
    facility: &FacilityRecord,
    service_date: NaiveDate,
    resolution: RuleResolution<'_>,
) -> ComplianceResult {
    let mut result = ComplianceResult::new();

    match resolution {
        RuleResolution::Unknown => result.record(ReasonCode::ProcedureNotFound),
        RuleResolution::OutOfValidity => result.record(ReasonCode::ProcedureOutOfValidity),
        RuleResolution::Resolved(rule) => {
            if rule.requires_cid && is_blank(&procedure.diagnosis) {
                result.record(ReasonCode::MissingRequiredCid);
            }

            let age = age_in_years(patient.birth_date, service_date);
            if let Some(age_min) = rule.age_min
                && age < i32::from(age_min)
            {
                result.record(ReasonCode::AgeBelowMinimum);
            }
            if let Some(age_max) = rule.age_max
                && age > i32::from(age_max)
            {
                result.record(ReasonCode::AgeAboveMaximum);
            }

            if !rule.allowed_sex.allows(patient.sex) {
                result.record(ReasonCode::SexMismatch);
            }

            if rule.requires_authorization {
                result.record(ReasonCode::RequiresPriorAuthorization);
            }

            match rule.allowed_document {
                DocumentPolicy::Cns if is_blank(&patient.cns) => {
                    result.record(ReasonCode::DocumentRequiresCns);
                }
                DocumentPolicy::Cpf if is_blank(&patient.cpf) => {
                    result.record(ReasonCode::DocumentRequiresCpf);
                }
                _ => {}
            }
        }
    }

    if !validate_facility_id(&facility.cnes) {
        result.record(ReasonCode::InvalidFacilityCheckDigit);
    }
    if !validate_cns(&professional.cns) {
        result.record(ReasonCode::InvalidProfessionalCardCheckDigit);
    }
    if !validate_procedure_code(&procedure.code) {
        result.record(ReasonCode::InvalidProcedureCheckDigit);
    }

    trace!(
        code = %procedure.code,
        ok = result.ok,
        errors = result.errors.len(),
        "procedure validated"
    );
    result
}
