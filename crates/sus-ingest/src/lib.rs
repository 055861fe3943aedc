//! Regulatory rule-archive ingestion.
//!
//! An archive is a zip of semicolon-delimited tables in a legacy 8-bit
//! encoding. The parser turns it into [`sus_model::ProcedureRule`]
//! candidates; the sync service drives fetch, parse, and per-row import.

pub mod archive;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod sync;

pub use archive::RuleArchive;
pub use error::ImportError;
pub use parser::{PROCEDURE_TABLE_KEYWORDS, RULES_TABLE_KEYWORDS, parse_rule_archive};
pub use sync::{ArchiveFetcher, SyncConfig, SyncReport, SyncService};
