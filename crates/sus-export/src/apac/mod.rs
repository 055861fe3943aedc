//! Authorization file assembly.

pub mod layout;

use tracing::debug;

use sus_layout::{ValueMap, pack, to_seven_bit};

use crate::RECORD_TERMINATOR;
use crate::checksum::authorization_control;
use crate::error::ExportError;
use crate::require_record_length;

pub use layout::{BODY_LEN, HEADER_LEN, PROCEDURE_LEN};

/// Conditional suppression of one body field, keyed by another field's
/// value. Applied to the value map before packing so the packer stays free
/// of format-specific control flow.
struct FieldSuppression {
    trigger_field: &'static str,
    /// Trigger values under which the suppressed field is kept.
    retain_values: &'static [&'static str],
    suppressed_field: &'static str,
}

/// Body-record suppressions: ethnicity only accompanies the indigenous
/// race/color code, and the death/discharge date only accompanies a
/// discharge or death motive.
const BODY_SUPPRESSIONS: &[FieldSuppression] = &[
    FieldSuppression {
        trigger_field: "raca_cor",
        retain_values: &["05"],
        suppressed_field: "etnia",
    },
    FieldSuppression {
        trigger_field: "motivo_saida",
        retain_values: &["01", "02", "03", "07", "08"],
        suppressed_field: "data_obito_alta",
    },
];

fn apply_suppressions(values: &mut ValueMap) {
    for suppression in BODY_SUPPRESSIONS {
        let trigger = values.get(suppression.trigger_field).unwrap_or_default();
        if !suppression.retain_values.contains(&trigger.trim()) {
            values.clear(suppression.suppressed_field);
        }
    }
}

/// Header parameters for one authorization export.
#[derive(Debug, Clone)]
pub struct ApacOptions {
    pub competence: String,
    pub org_name: String,
    pub org_acronym: String,
    pub cnpj: String,
    /// Destination organ named in the header.
    pub destination_org: String,
    /// Generation date stamped on the header, `AAAAMMDD`. Supplied by the
    /// caller so assembly stays a pure function.
    pub generated_on: String,
    /// Generating-software version stamp.
    pub version: String,
}

/// Builds a complete authorization file: one header, one demographic body
/// record, one or more procedure sub-records sharing the authorization
/// number.
#[derive(Debug, Clone)]
pub struct ApacFileBuilder {
    options: ApacOptions,
}

impl ApacFileBuilder {
    pub fn new(options: ApacOptions) -> Self {
        Self { options }
    }

    pub fn build(
        &self,
        body: &ValueMap,
        procedures: &[ValueMap],
    ) -> Result<String, ExportError> {
        if !body.is_filled("cns_paciente") {
            return Err(ExportError::MissingPatientCard);
        }
        let authorization_number = body
            .get("numero_apac")
            .filter(|number| !number.trim().is_empty())
            .ok_or(ExportError::MissingAuthorizationNumber)?
            .to_string();

        let control = authorization_control(procedures, &authorization_number)?;

        let header = self.build_header(control)?;
        require_record_length(&header, layout::HEADER.name, HEADER_LEN)?;

        let body_record = self.build_body(body)?;
        require_record_length(&body_record, layout::BODY.name, BODY_LEN)?;

        let mut procedure_records = Vec::with_capacity(procedures.len());
        for procedure in procedures {
            let mut values = procedure.clone();
            values.set("competencia", &self.options.competence);
            values.set("numero_apac", &authorization_number);
            let record = pack(&layout::PROCEDURE, &values)?;
            require_record_length(&record, layout::PROCEDURE.name, PROCEDURE_LEN)?;
            procedure_records.push(record);
        }

        debug!(
            competence = %self.options.competence,
            procedures = procedures.len(),
            control,
            "authorization file assembled"
        );

        let mut file = String::new();
        file.push_str(&header);
        file.push_str(RECORD_TERMINATOR);
        file.push_str(&body_record);
        file.push_str(RECORD_TERMINATOR);
        for record in procedure_records {
            file.push_str(&record);
            file.push_str(RECORD_TERMINATOR);
        }
        Ok(file)
    }

    fn build_header(&self, control: i64) -> Result<String, ExportError> {
        let mut values = ValueMap::new();
        values
            .set("competencia", &self.options.competence)
            .set("quantidade_apac", 1)
            .set("data_geracao", &self.options.generated_on)
            .set("checksum", control)
            .set("orgao", &self.options.org_name)
            .set("sigla", &self.options.org_acronym)
            .set("cnpj", &self.options.cnpj)
            .set("destino", &self.options.destination_org)
            .set("versao", &self.options.version);
        Ok(pack(&layout::HEADER, &values)?)
    }

    fn build_body(&self, body: &ValueMap) -> Result<String, ExportError> {
        let mut values = body.clone();
        // The regulator only accepts 7-bit text; fold free text first so
        // truncation happens on the folded form.
        values.map_values(to_seven_bit);
        apply_suppressions(&mut values);
        values.set("competencia", &self.options.competence);
        Ok(pack(&layout::BODY, &values)?)
    }
}
