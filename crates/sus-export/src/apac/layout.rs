//! Authorization file field tables, 2025 layout revision.
//!
//! Record kinds: `01` header, `14` demographic body, `13` procedure
//! sub-record. Lengths exclude the CRLF terminator.

use sus_layout::{FieldSpec, RecordLayout};

pub const HEADER_LEN: usize = 139;
pub const BODY_LEN: usize = 538;
pub const PROCEDURE_LEN: usize = 99;

pub const HEADER: RecordLayout = RecordLayout {
    name: "apac-header",
    total_length: HEADER_LEN,
    fields: &[
        FieldSpec::text("indicador", 1, 2).with_default("01"),
        FieldSpec::text("marcador", 3, 5).with_default("#APAC"),
        FieldSpec::required_text("competencia", 8, 6),
        FieldSpec::numeric("quantidade_apac", 14, 6),
        FieldSpec::required_text("data_geracao", 20, 8),
        FieldSpec::numeric("checksum", 28, 4),
        FieldSpec::required_text("orgao", 32, 30),
        FieldSpec::required_text("sigla", 62, 6),
        FieldSpec::required_text("cnpj", 68, 14),
        FieldSpec::required_text("destino", 82, 32),
        FieldSpec::text("emissao", 114, 1).with_default("M"),
        FieldSpec::required_text("versao", 115, 10),
        FieldSpec::text("fim", 125, 15),
    ],
};

pub const BODY: RecordLayout = RecordLayout {
    name: "apac-body",
    total_length: BODY_LEN,
    fields: &[
        FieldSpec::text("tipo_registro", 1, 2).with_default("14"),
        FieldSpec::required_text("competencia", 3, 6),
        FieldSpec::required_text("numero_apac", 9, 13),
        FieldSpec::required_text("uf", 22, 2),
        FieldSpec::required_text("cnes", 24, 7),
        FieldSpec::required_text("data_processamento", 31, 8),
        FieldSpec::required_text("data_inicio_validade", 39, 8),
        FieldSpec::required_text("data_fim_validade", 47, 8),
        FieldSpec::required_text("tipo_atendimento", 55, 2),
        FieldSpec::required_text("tipo_apac", 57, 1),
        FieldSpec::required_text("nome_paciente", 58, 30),
        FieldSpec::text("nome_mae", 88, 30),
        FieldSpec::text("logradouro", 118, 30),
        FieldSpec::text("numero_endereco", 148, 5),
        FieldSpec::text("complemento", 153, 10),
        FieldSpec::text("cep", 163, 8),
        FieldSpec::text("municipio_ibge", 171, 7),
        FieldSpec::required_text("data_nascimento", 178, 8),
        FieldSpec::required_text("sexo", 186, 1),
        FieldSpec::text("nome_medico_responsavel", 187, 30),
        FieldSpec::required_text("procedimento_principal", 217, 10),
        FieldSpec::text("motivo_saida", 227, 2),
        FieldSpec::text("data_obito_alta", 229, 8),
        FieldSpec::text("nome_autorizador", 237, 30),
        FieldSpec::required_text("cns_paciente", 267, 15),
        FieldSpec::text("cns_medico_resp", 282, 15),
        FieldSpec::text("cns_autorizador", 297, 15),
        FieldSpec::text("cid_associado", 312, 4),
        FieldSpec::text("num_prontuario", 316, 10),
        FieldSpec::text("cnes_solicitante", 326, 7),
        FieldSpec::text("data_solicitacao", 333, 8),
        FieldSpec::text("data_autorizacao", 341, 8),
        FieldSpec::text("codigo_emissor", 349, 10),
        FieldSpec::text("carater_atendimento", 359, 2),
        FieldSpec::text("apac_anterior", 361, 13),
        FieldSpec::text("raca_cor", 374, 2),
        FieldSpec::text("nome_responsavel", 376, 30),
        FieldSpec::text("nacionalidade", 406, 3),
        FieldSpec::text("etnia", 409, 4),
        FieldSpec::text("cod_logradouro_ibge", 413, 3),
        FieldSpec::text("bairro", 416, 30),
        FieldSpec::text("ddd", 446, 2),
        FieldSpec::text("fone", 448, 9),
        FieldSpec::text("email", 457, 40),
        FieldSpec::text("cns_executor", 497, 15),
        FieldSpec::text("cpf_paciente", 512, 11),
        FieldSpec::text("ine", 523, 10),
        FieldSpec::text("pessoa_rua", 533, 1),
        FieldSpec::text("fonte_orc", 534, 2),
        FieldSpec::text("emenda", 536, 1),
        FieldSpec::text("fim", 537, 2).with_default("  "),
    ],
};

pub const PROCEDURE: RecordLayout = RecordLayout {
    name: "apac-procedure",
    total_length: PROCEDURE_LEN,
    fields: &[
        FieldSpec::text("tipo_registro", 1, 2).with_default("13"),
        FieldSpec::required_text("competencia", 3, 6),
        FieldSpec::required_text("numero_apac", 9, 13),
        FieldSpec::required_text("codigo", 22, 10),
        FieldSpec::text("cbo", 32, 6).with_default("000000"),
        FieldSpec::numeric("quantidade", 38, 7),
        FieldSpec::optional_numeric("valor", 45, 10),
        FieldSpec::text("fim", 55, 45),
    ],
};
