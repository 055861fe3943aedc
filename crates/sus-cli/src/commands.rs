//! Command implementations.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use sus_ingest::{ArchiveFetcher, ImportError, SyncConfig, SyncReport, SyncService};
use sus_model::Competence;
use sus_rules::RuleRepository;
use sus_validate::{
    validate_cns, validate_cpf, validate_diagnosis_code, validate_facility_id,
    validate_procedure_code,
};

use crate::cli::{CheckArgs, IdentifierKind, ImportArgs};

/// Fetcher that reads a release archive the operator already downloaded.
struct FileFetcher {
    path: PathBuf,
}

impl ArchiveFetcher for FileFetcher {
    fn fetch(&self, _competence: &Competence) -> Result<Vec<u8>, ImportError> {
        fs::read(&self.path).map_err(ImportError::Io)
    }
}

pub fn run_import(args: &ImportArgs) -> anyhow::Result<SyncReport> {
    let fetcher = FileFetcher {
        path: args.archive.clone(),
    };
    let service = SyncService::new(SyncConfig::new("file://local"), fetcher);
    let mut repository = RuleRepository::new();
    let report = service
        .sync(&args.competence, &mut repository)
        .with_context(|| {
            format!(
                "importing {} for competence {}",
                args.archive.display(),
                args.competence
            )
        })?;
    Ok(report)
}

pub fn run_check(args: &CheckArgs) -> bool {
    let value = args.value.trim();
    match args.kind {
        IdentifierKind::Cns => validate_cns(value),
        IdentifierKind::Facility => validate_facility_id(value),
        IdentifierKind::Procedure => validate_procedure_code(value),
        IdentifierKind::Cpf => validate_cpf(value),
        IdentifierKind::Diagnosis => validate_diagnosis_code(value),
    }
}
