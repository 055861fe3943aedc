//! Versioned procedure rules.
//!
//! A rule is created once by the import path and never mutated. At most one
//! rule version is in effect for a given code and competence; the repository
//! resolves which one.

use serde::{Deserialize, Serialize};

use crate::competence::Competence;
use crate::enums::{DocumentPolicy, SexPolicy};

/// Fixed width of a normalized procedure code.
pub const PROCEDURE_CODE_WIDTH: usize = 10;

/// Zero-left-pad a raw procedure code to the canonical fixed width.
pub fn normalize_procedure_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= PROCEDURE_CODE_WIDTH {
        return trimmed.to_string();
    }
    format!("{trimmed:0>width$}", width = PROCEDURE_CODE_WIDTH)
}

/// One version of the regulatory constraints attached to a procedure code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureRule {
    pub code: String,
    /// First competence this version applies to; `None` means "always".
    pub valid_from: Option<Competence>,
    /// Last competence this version applies to; `None` means open-ended.
    pub valid_to: Option<Competence>,
    pub requires_cid: bool,
    pub requires_authorization: bool,
    pub allowed_document: DocumentPolicy,
    pub allowed_sex: SexPolicy,
    pub age_min: Option<u16>,
    pub age_max: Option<u16>,
    pub description: String,
    /// Unit value in integer cents, when the table publishes one.
    pub unit_value: Option<i64>,
}

impl ProcedureRule {
    /// A rule with every constraint open, used when the supplementary rules
    /// listing is absent from an import archive.
    pub fn permissive(code: &str, description: &str) -> Self {
        Self {
            code: normalize_procedure_code(code),
            valid_from: None,
            valid_to: None,
            requires_cid: false,
            requires_authorization: false,
            allowed_document: DocumentPolicy::Either,
            allowed_sex: SexPolicy::Any,
            age_min: None,
            age_max: None,
            description: description.to_string(),
            unit_value: None,
        }
    }

    /// Whether this version covers the given competence.
    pub fn in_effect_for(&self, competence: &Competence) -> bool {
        let from_ok = self
            .valid_from
            .as_ref()
            .is_none_or(|from| from <= competence);
        let to_ok = self.valid_to.as_ref().is_none_or(|to| to >= competence);
        from_ok && to_ok
    }
}

/// Outcome of looking a procedure code up for a competence.
///
/// Distinguishes "this code has never existed" from "it exists but no
/// version covers the competence" — the validator reports them differently.
#[derive(Debug, Clone, Copy)]
pub enum RuleResolution<'a> {
    Resolved(&'a ProcedureRule),
    OutOfValidity,
    Unknown,
}

impl<'a> RuleResolution<'a> {
    pub fn rule(&self) -> Option<&'a ProcedureRule> {
        match self {
            RuleResolution::Resolved(rule) => Some(rule),
            _ => None,
        }
    }
}
