//! Rule-archive parsing.
//!
//! Produces one [`ProcedureRule`] candidate per procedure-listing row,
//! enriched field-by-field from the optional supplementary rules listing.
//! Candidates are returned to the caller; the parser never writes to the
//! repository, so the sync path can account for per-row idempotence.

use std::collections::BTreeMap;
use std::io::Cursor;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use sus_model::{
    Competence, DocumentPolicy, ProcedureRule, SexPolicy, normalize_procedure_code,
};

use crate::archive::RuleArchive;
use crate::error::ImportError;
use crate::normalize::{first_filled, parse_flag, parse_int, parse_money_cents};

/// Name keywords identifying the procedure listing inside an archive.
pub const PROCEDURE_TABLE_KEYWORDS: &[&str] = &["proced", "tb_procedimento"];

/// Name keywords identifying the supplementary rules listing.
pub const RULES_TABLE_KEYWORDS: &[&str] = &["regra", "restricao", "condicao"];

const TABLE_DELIMITER: u8 = b';';

type Row = BTreeMap<String, String>;

/// Decode a legacy 8-bit table and read it as semicolon-delimited rows.
fn read_table(name: &str, bytes: &[u8]) -> Result<Vec<Row>, ImportError> {
    let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    let mut reader = ReaderBuilder::new()
        .delimiter(TABLE_DELIMITER)
        .flexible(true)
        .from_reader(Cursor::new(decoded.as_bytes().to_vec()));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| ImportError::Csv {
            name: name.to_string(),
            source,
        })?
        .iter()
        .map(|header| header.trim().trim_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ImportError::Csv {
            name: name.to_string(),
            source,
        })?;
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header.clone(), cell.trim().to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}

fn cell<'a>(row: &'a Row, key: &str) -> Option<&'a str> {
    row.get(key).map(String::as_str)
}

/// Index supplementary rule rows by normalized procedure code.
fn rules_by_code(rows: Vec<Row>) -> BTreeMap<String, Row> {
    let mut by_code = BTreeMap::new();
    for row in rows {
        let code = first_filled(&[cell(&row, "CO_PROCEDIMENTO"), cell(&row, "codigo")])
            .map(normalize_procedure_code);
        let Some(code) = code else {
            continue;
        };
        by_code.insert(code, row);
    }
    by_code
}

/// Parse a competence cell; malformed content degrades to `None`.
fn parse_competence(value: Option<&str>) -> Option<Competence> {
    let text = value?;
    match Competence::new(text) {
        Ok(competence) => Some(competence),
        Err(_) => {
            warn!(value = text, "unparseable competence cell, ignoring");
            None
        }
    }
}

fn candidate_from_row(row: &Row, extra: Option<&Row>, competence: &Competence) -> Option<ProcedureRule> {
    let empty = Row::new();
    let extra = extra.unwrap_or(&empty);

    let code = first_filled(&[cell(row, "CO_PROCEDIMENTO"), cell(row, "codigo")])?;
    let description = first_filled(&[cell(row, "NO_PROCEDIMENTO"), cell(row, "descricao")])
        .unwrap_or_default();

    // Sex comes listing-first; ages, document and the requirement flags are
    // rules-listing-first, matching the released table structure.
    let sex_token = first_filled(&[cell(row, "TP_SEXO"), cell(extra, "TP_SEXO")]).unwrap_or("A");
    let age_min = parse_int(first_filled(&[
        cell(extra, "NU_IDADE_MINIMA"),
        cell(row, "NU_IDADE_MINIMA"),
        cell(row, "IDADE_MIN"),
    ]));
    let age_max = parse_int(first_filled(&[
        cell(extra, "NU_IDADE_MAXIMA"),
        cell(row, "NU_IDADE_MAXIMA"),
        cell(row, "IDADE_MAX"),
    ]));
    let document_token =
        first_filled(&[cell(extra, "DOC_PACIENTE"), cell(row, "DOC_PACIENTE")]).unwrap_or("");
    let requires_cid = parse_flag(first_filled(&[
        cell(extra, "EXIGE_CID"),
        cell(row, "EXIGE_CID"),
    ]));
    let requires_authorization = parse_flag(first_filled(&[
        cell(extra, "EXIGE_APAC"),
        cell(row, "EXIGE_APAC"),
    ]));

    let valid_from = parse_competence(first_filled(&[
        cell(extra, "DT_INICIO"),
        cell(row, "DT_INICIO"),
        cell(row, "DT_COMPETENCIA"),
    ]))
    .unwrap_or_else(|| competence.clone());
    let valid_to = parse_competence(first_filled(&[
        cell(extra, "DT_FIM"),
        cell(row, "DT_FIM"),
    ]));

    let unit_value = parse_money_cents(first_filled(&[
        cell(row, "VL_PROCEDIMENTO"),
        cell(row, "valor"),
    ]));

    Some(ProcedureRule {
        code: normalize_procedure_code(code),
        valid_from: Some(valid_from),
        valid_to,
        requires_cid,
        requires_authorization,
        allowed_document: DocumentPolicy::from_token(document_token),
        allowed_sex: SexPolicy::from_token(sex_token),
        age_min,
        age_max,
        description: description.to_string(),
        unit_value,
    })
}

/// Parse a rule archive into candidates for the given competence.
///
/// The procedure listing is mandatory; the rules listing is optional and
/// its absence means every candidate gets permissive constraint values.
pub fn parse_rule_archive(
    bytes: &[u8],
    competence: &Competence,
) -> Result<Vec<ProcedureRule>, ImportError> {
    let archive = RuleArchive::from_bytes(bytes)?;

    let listing_name = archive
        .find_table(PROCEDURE_TABLE_KEYWORDS)
        .ok_or(ImportError::MissingPrimaryTable)?
        .to_string();
    let listing_bytes = archive
        .read(&listing_name)
        .ok_or(ImportError::MissingPrimaryTable)?;
    let listing_rows = read_table(&listing_name, listing_bytes)?;

    let rules_rows = match archive.find_table(RULES_TABLE_KEYWORDS) {
        Some(name) => {
            let name = name.to_string();
            let bytes = archive.read(&name).unwrap_or_default();
            read_table(&name, bytes)?
        }
        None => Vec::new(),
    };
    let extra_by_code = rules_by_code(rules_rows);

    let mut candidates = Vec::new();
    for row in &listing_rows {
        let code = first_filled(&[cell(row, "CO_PROCEDIMENTO"), cell(row, "codigo")])
            .map(normalize_procedure_code);
        let extra = code.as_ref().and_then(|code| extra_by_code.get(code));
        if let Some(candidate) = candidate_from_row(row, extra, competence) {
            candidates.push(candidate);
        }
    }

    debug!(
        competence = %competence,
        listing = listing_name,
        candidates = candidates.len(),
        "rule archive parsed"
    );
    Ok(candidates)
}
