//! Ambulatory batch field tables, 2025 layout revision.
//!
//! Positions are 1-based and lengths exact per the national layout
//! document. Record lengths exclude the CRLF terminator.

use sus_layout::{FieldSpec, RecordLayout};

pub const HEADER_LEN: usize = 132;
pub const LINE_LEN: usize = 352;
pub const TRAILER_LEN: usize = 132;

/// Body lines per sheet; page/sequence numbering resets at this count.
pub const LINES_PER_SHEET: usize = 20;

pub const HEADER: RecordLayout = RecordLayout {
    name: "bpa-header",
    total_length: HEADER_LEN,
    fields: &[
        FieldSpec::text("indicador", 1, 2).with_default("01"),
        FieldSpec::text("marcador", 3, 5).with_default("#BPA#"),
        FieldSpec::required_text("competencia", 8, 6),
        FieldSpec::numeric("quantidade_linhas", 14, 6),
        FieldSpec::numeric("quantidade_folhas", 20, 6),
        FieldSpec::numeric("checksum", 26, 4),
        FieldSpec::required_text("orgao_nome", 30, 30),
        FieldSpec::required_text("orgao_sigla", 60, 6),
        FieldSpec::required_text("cnpj", 66, 14),
        FieldSpec::required_text("orgao_destino", 80, 40),
        FieldSpec::required_text("destino", 120, 1),
        FieldSpec::required_text("versao", 121, 10),
        FieldSpec::text("fim", 131, 2).with_default("  "),
    ],
};

pub const LINE: RecordLayout = RecordLayout {
    name: "bpa-line",
    total_length: LINE_LEN,
    fields: &[
        FieldSpec::required_text("cnes", 1, 7),
        FieldSpec::required_text("competencia", 8, 6),
        FieldSpec::required_text("cns_prof", 14, 15),
        FieldSpec::required_text("cbo", 29, 6),
        FieldSpec::required_text("data_atendimento", 35, 8),
        FieldSpec::required_text("procedimento", 43, 10),
        FieldSpec::text("cns_paciente", 53, 15),
        FieldSpec::text("cpf_paciente", 68, 11),
        FieldSpec::required_text("sexo", 79, 1),
        FieldSpec::required_text("cid", 80, 4),
        FieldSpec::numeric("idade", 84, 3),
        FieldSpec::numeric("quantidade", 87, 6),
        FieldSpec::optional_numeric("valor", 93, 10),
        FieldSpec::optional_numeric("prd_flh", 103, 3),
        FieldSpec::optional_numeric("prd_seq", 106, 3),
        FieldSpec::text("fim", 109, 244),
    ],
};

pub const TRAILER: RecordLayout = RecordLayout {
    name: "bpa-trailer",
    total_length: TRAILER_LEN,
    fields: &[
        // The sentinel is wider than its field; packing truncates it to the
        // documented "99#BPA".
        FieldSpec::text("identificador", 1, 6).with_default("99#BPA#"),
        FieldSpec::numeric("total_procedimentos", 7, 6),
        FieldSpec::numeric("valor_total", 13, 12),
        FieldSpec::numeric("checksum", 25, 4),
        FieldSpec::text("fim", 29, 104),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_are_well_formed() {
        HEADER.check_well_formed().expect("header layout");
        LINE.check_well_formed().expect("line layout");
        TRAILER.check_well_formed().expect("trailer layout");
    }
}
