//! Authorization file end-to-end assembly tests, pinned to the documented
//! byte positions.

use sus_export::{ApacFileBuilder, ApacOptions, ExportError};
use sus_layout::ValueMap;

fn options() -> ApacOptions {
    ApacOptions {
        competence: "202501".to_string(),
        org_name: "CENTRO DE REABILITACAO".to_string(),
        org_acronym: "CER".to_string(),
        cnpj: "12345678000199".to_string(),
        destination_org: "SES".to_string(),
        generated_on: "20250131".to_string(),
        version: "0.1.0".to_string(),
    }
}

fn body() -> ValueMap {
    let mut map = ValueMap::new();
    map.set("numero_apac", "1234567890123")
        .set("uf", "11")
        .set("cnes", "1234560")
        .set("data_processamento", "20250101")
        .set("data_inicio_validade", "20250101")
        .set("data_fim_validade", "20250301")
        .set("tipo_atendimento", "01")
        .set("tipo_apac", "1")
        .set("nome_paciente", "Paciente Teste")
        .set("nome_mae", "Mae Teste")
        .set("logradouro", "Rua Teste")
        .set("numero_endereco", "123")
        .set("complemento", "Ap 10")
        .set("cep", "70000000")
        .set("municipio_ibge", "1100015")
        .set("data_nascimento", "19900101")
        .set("sexo", "M")
        .set("nome_medico_responsavel", "Resp Teste")
        .set("procedimento_principal", "1234567890")
        .set("motivo_saida", "01")
        .set("data_obito_alta", "20250110")
        .set("nome_autorizador", "Diretor")
        .set("cns_paciente", "898001160660006")
        .set("cns_medico_resp", "898001160660006")
        .set("cns_autorizador", "898001160660006")
        .set("cid_associado", "F329")
        .set("num_prontuario", "0000000001")
        .set("cnes_solicitante", "1234567")
        .set("data_solicitacao", "20250101")
        .set("data_autorizacao", "20250101")
        .set("codigo_emissor", "1234567890")
        .set("carater_atendimento", "01")
        .set("raca_cor", "99")
        .set("nome_responsavel", "Mae Teste")
        .set("nacionalidade", "010")
        .set("etnia", "")
        .set("cod_logradouro_ibge", "001")
        .set("bairro", "Centro")
        .set("ddd", "61")
        .set("fone", "999999999")
        .set("email", "a@b.com")
        .set("cns_executor", "898001160660006")
        .set("ine", "1234567890")
        .set("pessoa_rua", "N")
        .set("fonte_orc", "00")
        .set("emenda", "N");
    map
}

fn procedure() -> ValueMap {
    let mut map = ValueMap::new();
    map.set("codigo", "1234567890").set("quantidade", 1);
    map
}

#[test]
fn records_have_exact_lengths_and_kind_markers() {
    let file = ApacFileBuilder::new(options())
        .build(&body(), &[procedure()])
        .expect("build file");
    let records: Vec<&str> = file.split_terminator("\r\n").collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].len(), 139);
    assert_eq!(records[1].len(), 538);
    assert_eq!(records[2].len(), 99);

    assert!(records[0].starts_with("01"));
    assert!(records[1].starts_with("14"));
    assert!(records[2].starts_with("13"));
}

#[test]
fn header_pins() {
    let file = ApacFileBuilder::new(options())
        .build(&body(), &[procedure()])
        .expect("build file");
    let header = file.split_terminator("\r\n").next().expect("header");

    // Literal marker at 3-7 (1-based).
    assert_eq!(&header[2..7], "#APAC");
    // Emission indicator at 114.
    assert!(matches!(&header[113..114], "M" | "E"));
    // Generation date at 20-27.
    assert_eq!(&header[19..27], "20250131");
}

#[test]
fn body_pins() {
    let file = ApacFileBuilder::new(options())
        .build(&body(), &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");

    // Mother name at 88-117.
    assert_eq!(&record[87..117], format!("{:<30}", "Mae Teste"));
    // CEP at 163-170.
    assert_eq!(&record[162..170], "70000000");
    // Patient health card at 267-281.
    assert_eq!(&record[266..281], "898001160660006");
    // Responsible physician card at 282-296.
    assert_eq!(&record[281..296], "898001160660006");
    // Care character at 359-360.
    assert_eq!(&record[358..360], "01");
    // Email at 457-496.
    assert!(record[456..496].trim_start().starts_with("a@b.com"));
    // Trailing filler before the terminator.
    assert_eq!(&record[536..538], "  ");
}

#[test]
fn procedure_subrecord_pins() {
    let file = ApacFileBuilder::new(options())
        .build(&body(), &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(2).expect("procedure record");

    // The builder stamps competence and authorization number on every
    // sub-record.
    assert_eq!(&record[2..8], "202501");
    assert_eq!(&record[8..21], "1234567890123");
    assert_eq!(&record[21..31], "1234567890");
    // Occupation code defaults when the caller leaves it out.
    assert_eq!(&record[31..37], "000000");
    assert_eq!(&record[37..44], "0000001");
}

#[test]
fn free_text_is_transliterated_before_packing() {
    let mut accented = body();
    accented.set("nome_paciente", "José da Conceição");
    accented.set("bairro", "São João");
    let file = ApacFileBuilder::new(options())
        .build(&accented, &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");

    assert_eq!(&record[57..87], format!("{:<30}", "Jose da Conceicao"));
    assert_eq!(&record[415..445], format!("{:<30}", "Sao Joao"));
    assert!(record.is_ascii());
}

#[test]
fn ethnicity_is_cleared_unless_race_color_is_the_sentinel() {
    let mut indigenous = body();
    indigenous.set("raca_cor", "05").set("etnia", "0207");
    let file = ApacFileBuilder::new(options())
        .build(&indigenous, &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");
    assert_eq!(&record[408..412], "0207");

    let mut other = body();
    other.set("raca_cor", "99").set("etnia", "0207");
    let file = ApacFileBuilder::new(options())
        .build(&other, &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");
    assert_eq!(&record[408..412], "    ");
}

#[test]
fn discharge_date_is_cleared_for_other_motives() {
    let mut transferred = body();
    transferred.set("motivo_saida", "06");
    let file = ApacFileBuilder::new(options())
        .build(&transferred, &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");
    assert_eq!(&record[228..236], "        ");

    let discharged = body();
    let file = ApacFileBuilder::new(options())
        .build(&discharged, &[procedure()])
        .expect("build file");
    let record = file.split_terminator("\r\n").nth(1).expect("body record");
    assert_eq!(&record[228..236], "20250110");
}

#[test]
fn missing_patient_card_is_fatal() {
    let mut bad = body();
    bad.clear("cns_paciente");
    let error = ApacFileBuilder::new(options())
        .build(&bad, &[procedure()])
        .expect_err("must fail");
    assert!(matches!(error, ExportError::MissingPatientCard));
}

#[test]
fn missing_authorization_number_is_fatal() {
    let mut bad = body();
    bad.clear("numero_apac");
    let error = ApacFileBuilder::new(options())
        .build(&bad, &[procedure()])
        .expect_err("must fail");
    assert!(matches!(error, ExportError::MissingAuthorizationNumber));
}

#[test]
fn multiple_procedure_subrecords_share_the_authorization() {
    let file = ApacFileBuilder::new(options())
        .build(&body(), &[procedure(), procedure(), procedure()])
        .expect("build file");
    let records: Vec<&str> = file.split_terminator("\r\n").collect();
    assert_eq!(records.len(), 5);
    for record in &records[2..] {
        assert_eq!(&record[8..21], "1234567890123");
    }
}
