//! Unit tests for the interactive prompt flow.

use std::io::{self, Cursor};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::{fixture, rstest};

use super::*;
use crate::catalog::{RegionEntry, RegionGroup};

static BROKEN: [RegionGroup; 1] = [RegionGroup::new(
    "5",
    &[RegionEntry::new("5900000", "59139999", "Natal")],
)];

struct Transcript {
    outcome: Outcome,
    output: String,
}

fn drive(input: &str, options: &RunOptions) -> Transcript {
    drive_with(&RegionCatalog::brazil(), input, options)
}

fn drive_with(catalog: &RegionCatalog, input: &str, options: &RunOptions) -> Transcript {
    let mut reader = Cursor::new(input.to_owned());
    let mut writer = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let outcome = run(catalog, options, &mut reader, &mut writer, &mut rng).expect("prompt flow");
    Transcript {
        outcome,
        output: String::from_utf8(writer).expect("utf-8 output"),
    }
}

#[fixture]
fn options() -> RunOptions {
    RunOptions::default()
}

#[rstest]
fn lists_subregions_with_one_based_numbers(options: RunOptions) {
    let transcript = drive("1\n2\n", &options);

    assert!(transcript.output.starts_with(DIGIT_PROMPT));
    assert!(transcript.output.contains("Sub-regiões disponíveis:\n1. SP Litoral\n2. SP Interior\n"));
    assert!(transcript.output.contains(SELECTION_PROMPT));
}

#[rstest]
fn prints_code_and_region_for_valid_choice(options: RunOptions) {
    let transcript = drive("6\n17\n", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    let cep = generated.first().expect("one code");
    assert_eq!(generated.len(), 1);
    assert_eq!(cep.label, "Rio Branco");
    assert!(transcript.output.contains(&format!("CEP Gerado: {}\n", cep.code)));
    assert!(transcript.output.ends_with("Região: Rio Branco\n"));
}

#[rstest]
#[case("x\n")]
#[case("\n")]
#[case("")]
#[case("10\n")]
fn unknown_digit_stops_before_listing(options: RunOptions, #[case] input: &str) {
    let transcript = drive(input, &options);

    assert!(matches!(transcript.outcome, Outcome::UnknownDigit { .. }));
    assert!(transcript.output.ends_with("Primeiro dígito inválido.\n"));
    assert!(!transcript.output.contains(SUBREGIONS_HEADER));
}

#[rstest]
#[case("0")]
#[case("4")]
#[case("-1")]
#[case("um")]
#[case("")]
fn invalid_selection_is_reported(options: RunOptions, #[case] selection: &str) {
    let transcript = drive(&format!("9\n{selection}\n"), &options);

    assert_eq!(
        transcript.outcome,
        Outcome::InvalidSelection {
            input: selection.to_owned()
        }
    );
    assert!(transcript.output.ends_with("Escolha inválida.\n"));
    assert!(!transcript.output.contains("CEP Gerado"));
}

#[rstest]
fn surrounding_whitespace_is_ignored(options: RunOptions) {
    let transcript = drive("  8 \r\n 4 \r\n", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    assert_eq!(
        generated.first().map(|cep| cep.label.as_str()),
        Some("Florianópolis")
    );
}

#[rstest]
fn duplicate_label_selection_uses_first_range(options: RunOptions) {
    // The second listed entry shares its label with the first.
    let transcript = drive("0\n2\n", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    let value = generated.first().and_then(GeneratedCep::value).expect("code");
    assert!((1_000_000..=5_999_999).contains(&value), "{value}");
}

#[test]
fn presets_skip_prompts() {
    let options = RunOptions {
        digit: Some("2".to_owned()),
        selection: Some(4),
        ..RunOptions::default()
    };
    let transcript = drive("", &options);

    assert!(!transcript.output.contains(DIGIT_PROMPT));
    assert!(!transcript.output.contains(SELECTION_PROMPT));
    assert!(transcript.output.ends_with("Região: Vitória\n"));
}

#[test]
fn count_generates_several_codes() {
    let options = RunOptions {
        count: 3,
        ..RunOptions::default()
    };
    let transcript = drive("3\n1\n", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    assert_eq!(generated.len(), 3);
    assert_eq!(transcript.output.matches("CEP Gerado: ").count(), 3);
}

#[test]
fn preset_digit_is_trimmed() {
    let options = RunOptions {
        digit: Some(" 6 ".to_owned()),
        selection: Some(17),
        ..RunOptions::default()
    };
    let transcript = drive("", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    assert_eq!(
        generated.first().map(|cep| cep.label.as_str()),
        Some("Rio Branco")
    );
}

#[test]
fn count_at_limit_is_accepted() {
    let options = RunOptions {
        count: MAX_COUNT,
        ..RunOptions::default()
    };
    let transcript = drive("6\n17\n", &options);

    let Outcome::Generated(generated) = &transcript.outcome else {
        panic!("expected generated codes, got {:?}", transcript.outcome);
    };
    assert_eq!(generated.len(), MAX_COUNT);
}

#[rstest]
#[case(0)]
#[case(MAX_COUNT + 1)]
#[case(usize::MAX)]
fn out_of_range_count_is_rejected_before_prompting(#[case] count: usize) {
    let options = RunOptions {
        count,
        ..RunOptions::default()
    };
    let mut reader = Cursor::new("6\n17\n");
    let mut writer = Vec::new();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let err = run(
        &RegionCatalog::brazil(),
        &options,
        &mut reader,
        &mut writer,
        &mut rng,
    )
    .expect_err("count is rejected");

    assert_eq!(
        err,
        CliError::InvalidCount {
            count,
            max: MAX_COUNT
        }
    );
    assert!(writer.is_empty());
}

#[test]
fn json_format_writes_an_array() {
    let options = RunOptions {
        format: OutputFormat::Json,
        count: 2,
        ..RunOptions::default()
    };
    let transcript = drive("6\n17\n", &options);

    let json_start = transcript.output.find('[').expect("json array");
    let (_, json) = transcript.output.split_at(json_start);
    let parsed: Vec<GeneratedCep> = serde_json::from_str(json).expect("valid json");

    assert_eq!(Outcome::Generated(parsed), transcript.outcome);
    assert!(!transcript.output.contains("CEP Gerado"));
}

#[test]
fn catalog_rejection_is_reported_as_outcome() {
    let catalog = RegionCatalog::new(&BROKEN);
    let transcript = drive_with(&catalog, "5\n1\n", &RunOptions::default());

    assert!(matches!(
        transcript.outcome,
        Outcome::Rejected(CepError::MalformedRange { .. })
    ));
    assert!(transcript.output.contains("malformed CEP range"));
}

#[rstest]
#[case(&["SP Litoral", "SP Interior"], "1", Some("SP Litoral"))]
#[case(&["SP Litoral", "SP Interior"], "+2", Some("SP Interior"))]
#[case(&["SP Litoral", "SP Interior"], "3", None)]
#[case(&["SP Litoral", "SP Interior"], "0", None)]
#[case(&[], "1", None)]
fn resolves_selection_numbers(
    #[case] labels: &[&'static str],
    #[case] raw: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(resolve_selection(labels, raw), expected);
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_errors() {
    let mut reader = Cursor::new("6\n17\n");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let err = run(
        &RegionCatalog::brazil(),
        &RunOptions::default(),
        &mut reader,
        &mut FailingWriter,
        &mut rng,
    )
    .expect_err("writes fail");

    assert!(matches!(err, CliError::Io { .. }));
}
