//! Ambulatory batch file assembly.

pub mod layout;

use tracing::debug;

use sus_layout::{ValueMap, pack};

use crate::RECORD_TERMINATOR;
use crate::checksum::ambulatory_control;
use crate::error::ExportError;
use crate::require_record_length;

pub use layout::{HEADER_LEN, LINE_LEN, LINES_PER_SHEET, TRAILER_LEN};

/// Header parameters for one batch export.
#[derive(Debug, Clone)]
pub struct BpaOptions {
    pub competence: String,
    pub org_name: String,
    pub org_acronym: String,
    pub cnpj: String,
    /// Destination organ named in the header.
    pub destination_org: String,
    /// Emission target indicator (`M` municipal, `E` state).
    pub destination: String,
    /// Generating-software version stamp.
    pub version: String,
}

/// Builds a complete ambulatory batch file from pre-resolved body lines.
#[derive(Debug, Clone)]
pub struct BpaFileBuilder {
    options: BpaOptions,
}

impl BpaFileBuilder {
    pub fn new(options: BpaOptions) -> Self {
        Self { options }
    }

    /// Assemble header, body lines and trailer into the final file text.
    ///
    /// Each line map carries the documented field names (`cnes`,
    /// `competencia`, `cns_prof`, `cbo`, `data_atendimento`,
    /// `procedimento`, `cns_paciente` / `cpf_paciente`, `sexo`, `cid`,
    /// `idade`, `quantidade`, `valor` in integer cents). Page and sequence
    /// numbers are assigned here, never by the caller.
    pub fn build(&self, lines: &[ValueMap]) -> Result<String, ExportError> {
        let control = ambulatory_control(lines)?;
        let sheet_count = lines.len().div_ceil(LINES_PER_SHEET).max(1);

        let header = self.build_header(lines.len(), sheet_count, control)?;
        require_record_length(&header, layout::HEADER.name, HEADER_LEN)?;

        let mut records = Vec::with_capacity(lines.len() + 2);
        records.push(header);

        let mut total_cents = 0i64;
        for (index, line) in lines.iter().enumerate() {
            let record = build_line(line, index)?;
            require_record_length(&record, layout::LINE.name, LINE_LEN)?;
            total_cents += line
                .get("valor")
                .and_then(|value| value.trim().parse::<i64>().ok())
                .unwrap_or(0);
            records.push(record);
        }

        let trailer = build_trailer(lines.len(), total_cents, control)?;
        require_record_length(&trailer, layout::TRAILER.name, TRAILER_LEN)?;
        records.push(trailer);

        debug!(
            competence = %self.options.competence,
            lines = lines.len(),
            control,
            "ambulatory batch assembled"
        );

        let mut file = String::new();
        for record in records {
            file.push_str(&record);
            file.push_str(RECORD_TERMINATOR);
        }
        Ok(file)
    }

    fn build_header(
        &self,
        line_count: usize,
        sheet_count: usize,
        control: i64,
    ) -> Result<String, ExportError> {
        let mut values = ValueMap::new();
        values
            .set("competencia", &self.options.competence)
            .set("quantidade_linhas", line_count)
            .set("quantidade_folhas", sheet_count)
            .set("checksum", control)
            .set("orgao_nome", &self.options.org_name)
            .set("orgao_sigla", &self.options.org_acronym)
            .set("cnpj", &self.options.cnpj)
            .set("orgao_destino", &self.options.destination_org)
            .set("destino", &self.options.destination)
            .set("versao", &self.options.version);
        Ok(pack(&layout::HEADER, &values)?)
    }
}

/// Pack one body line, enforcing the patient-document exclusivity rule and
/// stamping the sheet/sequence pair derived from the line index.
fn build_line(line: &ValueMap, index: usize) -> Result<String, ExportError> {
    let has_cns = line.is_filled("cns_paciente");
    let has_cpf = line.is_filled("cpf_paciente");
    if has_cns && has_cpf {
        return Err(ExportError::DocumentConflict { index });
    }
    if !has_cns && !has_cpf {
        return Err(ExportError::MissingPatientDocument { index });
    }

    let mut values = line.clone();
    values.set("prd_flh", index / LINES_PER_SHEET + 1);
    values.set("prd_seq", index % LINES_PER_SHEET + 1);
    Ok(pack(&layout::LINE, &values)?)
}

fn build_trailer(
    line_count: usize,
    total_cents: i64,
    control: i64,
) -> Result<String, ExportError> {
    let mut values = ValueMap::new();
    values
        .set("total_procedimentos", line_count)
        .set("valor_total", total_cents)
        .set("checksum", control);
    Ok(pack(&layout::TRAILER, &values)?)
}
