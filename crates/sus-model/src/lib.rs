pub mod competence;
pub mod compliance;
pub mod enums;
pub mod error;
pub mod records;
pub mod rule;

pub use competence::Competence;
pub use compliance::{ComplianceResult, ReasonCode};
pub use enums::{DocumentPolicy, Sex, SexPolicy};
pub use error::{ModelError, Result};
pub use records::{FacilityRecord, PatientRecord, ProcedureRecord, ProfessionalRecord};
pub use rule::{ProcedureRule, RuleResolution, normalize_procedure_code};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_result_collects_in_order() {
        let mut result = ComplianceResult::new();
        result.record(ReasonCode::AgeBelowMinimum);
        result.record(ReasonCode::SexMismatch);
        result.record(ReasonCode::AgeBelowMinimum);
        assert!(!result.ok);
        assert_eq!(
            result.errors,
            vec![ReasonCode::AgeBelowMinimum, ReasonCode::SexMismatch]
        );
    }

    #[test]
    fn reason_codes_serialize_as_stable_strings() {
        let json = serde_json::to_string(&ReasonCode::RequiresPriorAuthorization)
            .expect("serialize reason code");
        assert_eq!(json, "\"requires_prior_authorization\"");
    }
}
