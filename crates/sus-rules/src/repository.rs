//! In-memory store of rule versions with temporal resolution.
//!
//! Reads dominate: exports resolve rules per procedure, while imports happen
//! in an infrequent administrative flow. Rules are immutable once inserted;
//! re-import is idempotent on `(code, valid_from)`.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use sus_model::{Competence, ProcedureRule, RuleResolution, normalize_procedure_code};

#[derive(Debug, Clone)]
struct StoredRule {
    /// Insertion sequence; breaks `valid_from` ties in favor of the most
    /// recently inserted version.
    seq: u64,
    rule: ProcedureRule,
}

/// Snapshot of repository contents for sync status reporting.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryStatus {
    pub rule_count: usize,
    pub procedure_count: usize,
    pub latest_competence: Option<Competence>,
}

#[derive(Debug, Default)]
pub struct RuleRepository {
    versions: BTreeMap<String, Vec<StoredRule>>,
    next_seq: u64,
}

impl RuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule unless a version with the same `(code, valid_from)`
    /// already exists. Returns whether an insert occurred, which the sync
    /// path uses for idempotence accounting.
    pub fn import_rule(&mut self, mut rule: ProcedureRule) -> bool {
        rule.code = normalize_procedure_code(&rule.code);
        let versions = self.versions.entry(rule.code.clone()).or_default();
        if versions
            .iter()
            .any(|stored| stored.rule.valid_from == rule.valid_from)
        {
            return false;
        }
        debug!(
            code = %rule.code,
            valid_from = rule.valid_from.as_ref().map(Competence::as_str),
            "rule version inserted"
        );
        versions.push(StoredRule {
            seq: self.next_seq,
            rule,
        });
        self.next_seq += 1;
        true
    }

    /// The rule version in effect for `code` at `competence`, if any.
    ///
    /// Among versions whose window covers the competence, the latest
    /// `valid_from` wins (`None` counts as the earliest possible start);
    /// ties go to the most recently inserted version.
    pub fn resolve(&self, code: &str, competence: &Competence) -> Option<&ProcedureRule> {
        let versions = self.versions.get(&normalize_procedure_code(code))?;
        versions
            .iter()
            .filter(|stored| stored.rule.in_effect_for(competence))
            .max_by(|a, b| {
                a.rule
                    .valid_from
                    .cmp(&b.rule.valid_from)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|stored| &stored.rule)
    }

    /// Resolve, distinguishing unknown codes from out-of-validity ones.
    pub fn resolution(&self, code: &str, competence: &Competence) -> RuleResolution<'_> {
        match self.resolve(code, competence) {
            Some(rule) => RuleResolution::Resolved(rule),
            None if self.exists(code) => RuleResolution::OutOfValidity,
            None => RuleResolution::Unknown,
        }
    }

    /// Whether any version of the code has ever been imported.
    pub fn exists(&self, code: &str) -> bool {
        self.versions
            .contains_key(&normalize_procedure_code(code))
    }

    /// Total number of rule versions held.
    pub fn count(&self) -> usize {
        self.versions.values().map(Vec::len).sum()
    }

    /// The most recent competence any version starts at, used to report how
    /// current the imported table is.
    pub fn latest_competence(&self) -> Option<Competence> {
        self.versions
            .values()
            .flatten()
            .filter_map(|stored| stored.rule.valid_from.clone())
            .max()
    }

    /// Whether any version starts at the given competence, i.e. that table
    /// release has been imported before.
    pub fn competence_imported(&self, competence: &Competence) -> bool {
        self.versions
            .values()
            .flatten()
            .any(|stored| stored.rule.valid_from.as_ref() == Some(competence))
    }

    pub fn status(&self) -> RepositoryStatus {
        RepositoryStatus {
            rule_count: self.count(),
            procedure_count: self.versions.len(),
            latest_competence: self.latest_competence(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competence(value: &str) -> Competence {
        Competence::new(value).expect("valid competence")
    }

    fn rule(code: &str, valid_from: Option<&str>, valid_to: Option<&str>) -> ProcedureRule {
        let mut rule = ProcedureRule::permissive(code, "TEST PROCEDURE");
        rule.valid_from = valid_from.map(competence);
        rule.valid_to = valid_to.map(competence);
        rule
    }

    #[test]
    fn import_is_idempotent_on_code_and_valid_from() {
        let mut repo = RuleRepository::new();
        assert!(repo.import_rule(rule("1234567890", Some("202501"), None)));
        assert!(!repo.import_rule(rule("1234567890", Some("202501"), None)));
        assert!(repo.import_rule(rule("1234567890", Some("202506"), None)));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn duplicate_import_keeps_first_version() {
        let mut repo = RuleRepository::new();
        let mut first = rule("1234567890", Some("202501"), None);
        first.requires_cid = true;
        let second = rule("1234567890", Some("202501"), None);
        repo.import_rule(first);
        repo.import_rule(second);

        let resolved = repo
            .resolve("1234567890", &competence("202501"))
            .expect("resolved");
        assert!(resolved.requires_cid);
    }

    #[test]
    fn resolve_prefers_latest_valid_from() {
        let mut repo = RuleRepository::new();
        repo.import_rule(rule("1234567890", Some("202401"), None));
        repo.import_rule(rule("1234567890", Some("202501"), None));

        let resolved = repo
            .resolve("1234567890", &competence("202503"))
            .expect("resolved");
        assert_eq!(resolved.valid_from, Some(competence("202501")));

        let resolved = repo
            .resolve("1234567890", &competence("202406"))
            .expect("resolved");
        assert_eq!(resolved.valid_from, Some(competence("202401")));
    }

    #[test]
    fn resolve_respects_valid_to() {
        let mut repo = RuleRepository::new();
        repo.import_rule(rule("1234567890", Some("202401"), Some("202412")));

        assert!(repo.resolve("1234567890", &competence("202501")).is_none());
        assert!(repo.resolve("1234567890", &competence("202406")).is_some());
    }

    #[test]
    fn open_start_loses_to_dated_version() {
        let mut repo = RuleRepository::new();
        repo.import_rule(rule("1234567890", None, None));
        repo.import_rule(rule("1234567890", Some("202501"), None));

        let resolved = repo
            .resolve("1234567890", &competence("202502"))
            .expect("resolved");
        assert_eq!(resolved.valid_from, Some(competence("202501")));
    }

    #[test]
    fn resolution_distinguishes_unknown_from_out_of_validity() {
        let mut repo = RuleRepository::new();
        repo.import_rule(rule("1234567890", Some("202501"), Some("202506")));

        assert!(matches!(
            repo.resolution("1234567890", &competence("202507")),
            RuleResolution::OutOfValidity
        ));
        assert!(matches!(
            repo.resolution("9999999999", &competence("202501")),
            RuleResolution::Unknown
        ));
        assert!(matches!(
            repo.resolution("1234567890", &competence("202503")),
            RuleResolution::Resolved(_)
        ));
    }

    #[test]
    fn status_reports_latest_competence() {
        let mut repo = RuleRepository::new();
        assert!(repo.latest_competence().is_none());
        repo.import_rule(rule("1234567890", Some("202501"), None));
        repo.import_rule(rule("0987654321", Some("202503"), None));

        let status = repo.status();
        assert_eq!(status.rule_count, 2);
        assert_eq!(status.procedure_count, 2);
        assert_eq!(status.latest_competence, Some(competence("202503")));
        assert!(repo.competence_imported(&competence("202503")));
        assert!(!repo.competence_imported(&competence("202504")));
    }

    #[test]
    fn resolve_normalizes_the_lookup_code() {
        let mut repo = RuleRepository::new();
        repo.import_rule(rule("0000000123", Some("202501"), None));
        assert!(repo.resolve("123", &competence("202501")).is_some());
    }
}
