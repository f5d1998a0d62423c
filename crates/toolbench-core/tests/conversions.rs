use std::fs;

use tempfile::tempdir;
use toolbench_core::tabular::{Format, convert_file};

const PEOPLE_JSON: &str = "[\n    {\"name\": \"Ada\", \"age\": \"36\"},\n    {\"name\": \"Grace\", \"age\": \"85\"}\n]";

#[test]
fn converts_json_file_to_csv_by_extension() {
    let temp = tempdir().expect("tempdir");
    let input = temp.path().join("people.json");
    let output = temp.path().join("people.csv");

    fs::write(&input, PEOPLE_JSON).expect("write fixture");

    convert_file(&input, &output, None, None).expect("conversion succeeds");

    let csv = fs::read_to_string(&output).expect("read output");
    assert_eq!(csv, "name,age\nAda,36\nGrace,85\n");
}

#[test]
fn csv_to_json_file_round_trip_preserves_records() {
    let temp = tempdir().expect("tempdir");
    let json_in = temp.path().join("in.json");
    let csv_mid = temp.path().join("mid.csv");
    let json_out = temp.path().join("out.json");

    fs::write(&json_in, PEOPLE_JSON).expect("write fixture");

    convert_file(&json_in, &csv_mid, None, None).expect("json -> csv");
    convert_file(&csv_mid, &json_out, None, None).expect("csv -> json");

    let original: serde_json::Value =
        serde_json::from_str(PEOPLE_JSON).expect("parse original");
    let round_tripped: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read output"))
            .expect("parse output");
    assert_eq!(round_tripped, original);
}

#[test]
fn yaml_output_is_block_style() {
    let temp = tempdir().expect("tempdir");
    let input = temp.path().join("people.json");
    let output = temp.path().join("people.yaml");

    fs::write(&input, PEOPLE_JSON).expect("write fixture");

    convert_file(&input, &output, None, None).expect("json -> yaml");

    let yaml = fs::read_to_string(&output).expect("read output");
    assert!(yaml.contains("- name: Ada"), "unexpected output: {yaml}");
    assert!(!yaml.contains('{'), "flow style leaked into output: {yaml}");
}

#[test]
fn explicit_formats_override_extensions() {
    let temp = tempdir().expect("tempdir");
    let input = temp.path().join("data.txt");
    let output = temp.path().join("out.txt");

    fs::write(&input, "name: Ada\nage: 36\n").expect("write fixture");

    convert_file(&input, &output, Some(Format::Yaml), Some(Format::Csv))
        .expect("yaml -> csv with explicit formats");

    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "name,age\nAda,36\n"
    );
}

#[test]
fn uninferable_format_is_reported() {
    let temp = tempdir().expect("tempdir");
    let input = temp.path().join("data.txt");
    fs::write(&input, "{}").expect("write fixture");

    let err = convert_file(&input, &temp.path().join("out.csv"), None, None).unwrap_err();
    assert!(matches!(err, toolbench_core::ToolError::InvalidFormat(_)));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let temp = tempdir().expect("tempdir");
    let err = convert_file(
        &temp.path().join("absent.json"),
        &temp.path().join("out.csv"),
        None,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, toolbench_core::ToolError::Io(_)));
}
