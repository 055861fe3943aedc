//! The administrative sync flow: fetch, parse, import.
//!
//! Downloading is behind [`ArchiveFetcher`] so the network (and its retry
//! policy) stays with the external collaborator; the service itself only
//! orchestrates parse and per-row import.

use serde::Serialize;
use tracing::info;

use sus_model::Competence;
use sus_rules::RuleRepository;

use crate::error::ImportError;
use crate::parser::parse_rule_archive;

/// Explicit configuration for the sync path. Passed in by the caller;
/// nothing here reads ambient global state.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the regulator's release area. May contain a
    /// `{competence}` placeholder.
    pub base_url: String,
}

impl SyncConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Candidate archive URLs for a competence, tried in order by fetchers.
    pub fn candidate_urls(&self, competence: &Competence) -> Vec<String> {
        let base = self.base_url.trim_end_matches('/');
        if base.contains("{competence}") {
            return vec![base.replace("{competence}", competence.as_str())];
        }
        [
            format!("SIGTAP_{competence}.zip"),
            format!("sigtap_{competence}.zip"),
            format!("TabelaUnificada_{competence}.zip"),
        ]
        .into_iter()
        .map(|name| format!("{base}/{name}"))
        .collect()
    }
}

/// Source of archive bytes for a competence. Implementations live outside
/// the core (HTTP download, file read, test fixture).
pub trait ArchiveFetcher {
    fn fetch(&self, competence: &Competence) -> Result<Vec<u8>, ImportError>;
}

/// Outcome of one sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub competence: Competence,
    pub inserted: usize,
    pub already_existed: usize,
    /// Rule versions in the repository after the run.
    pub total_rules: usize,
}

pub struct SyncService<F> {
    config: SyncConfig,
    fetcher: F,
}

impl<F: ArchiveFetcher> SyncService<F> {
    pub fn new(config: SyncConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Fetch and import the rule release for a competence.
    ///
    /// Each candidate goes through `import_rule` individually so the report
    /// can state how many rows were new versus already present.
    pub fn sync(
        &self,
        competence: &str,
        repository: &mut RuleRepository,
    ) -> Result<SyncReport, ImportError> {
        let competence = Competence::new(competence)?;
        let bytes = self.fetcher.fetch(&competence)?;
        let candidates = parse_rule_archive(&bytes, &competence)?;

        let mut inserted = 0usize;
        let mut already_existed = 0usize;
        for candidate in candidates {
            if repository.import_rule(candidate) {
                inserted += 1;
            } else {
                already_existed += 1;
            }
        }

        info!(
            competence = %competence,
            inserted,
            already_existed,
            "rule sync finished"
        );
        Ok(SyncReport {
            competence,
            inserted,
            already_existed,
            total_rules: repository.count(),
        })
    }
}
