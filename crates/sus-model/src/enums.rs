//! Type-safe enumerations for regulatory record attributes.
//!
//! These enums give compile-time safety to concepts the national tables
//! represent as single-letter or keyword tokens.

use serde::{Deserialize, Serialize};

/// Biological sex as recorded on the patient register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Single-letter code used in the flat-file layouts.
    pub fn as_code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

/// Sex restriction attached to a procedure rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SexPolicy {
    Male,
    Female,
    #[default]
    Any,
}

impl SexPolicy {
    /// Parse the regulator token. `M`/`F` restrict; anything else is open.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "M" => SexPolicy::Male,
            "F" => SexPolicy::Female,
            _ => SexPolicy::Any,
        }
    }

    pub fn allows(&self, sex: Sex) -> bool {
        match self {
            SexPolicy::Male => sex == Sex::Male,
            SexPolicy::Female => sex == Sex::Female,
            SexPolicy::Any => true,
        }
    }
}

/// Which patient document a procedure rule admits on a billing line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentPolicy {
    /// Only the national health card number.
    Cns,
    /// Only the taxpayer number.
    Cpf,
    /// Either document is acceptable.
    #[default]
    Either,
}

impl DocumentPolicy {
    /// Parse the regulator token. Unknown tokens fall back to permissive.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_uppercase().as_str() {
            "CNS" => DocumentPolicy::Cns,
            "CPF" => DocumentPolicy::Cpf,
            _ => DocumentPolicy::Either,
        }
    }
}
