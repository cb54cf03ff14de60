//! Integration tests for csvvw.

use std::io::Write;
use tempfile::NamedTempFile;

use csvvw::{
    CsvVwError, Delimiter, FieldType, OverridePolicy, RowReader, TranscodeConfig,
    TranscodePipeline, transcode,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

/// Transcode CSV text and return the output lines.
fn convert(content: &str, config: TranscodeConfig) -> Vec<String> {
    let reader = RowReader::from_reader(content.as_bytes(), b',').expect("Failed to read header");
    let header = reader.headers().to_vec();
    TranscodePipeline::new(config)
        .run(header, reader)
        .expect("Failed to start run")
        .collect::<Result<_, _>>()
        .expect("Transcoding failed")
}

// =============================================================================
// End-to-end Examples
// =============================================================================

#[test]
fn test_default_mode_with_label() {
    let lines = convert("a,b,label\nx,5,0\n", TranscodeConfig::new().with_label("label"));
    assert_eq!(lines, vec!["-1 | a_x b:5"]);
}

#[test]
fn test_bag_of_words_with_label() {
    let config = TranscodeConfig::new().with_label("label").with_bow(true);
    let lines = convert("a,b,label\nx,5,0\n", config);
    assert_eq!(lines, vec!["-1 | x 5"]);
}

#[test]
fn test_namespace_names_without_label() {
    let config = TranscodeConfig::new().with_namespace_names(true);
    let lines = convert("a,b\nx,5\n", config);
    assert_eq!(lines, vec![" |a x |numeric b:5"]);
}

#[test]
fn test_namespace_assignment() {
    let config = TranscodeConfig::new().with_namespace("b", "ns1");
    let lines = convert("a,b\nx,5\n", config);
    assert_eq!(lines, vec![" | a_x |ns1 5"]);
}

#[test]
fn test_bow_with_namespace_names_drops_marker() {
    let config = TranscodeConfig::new()
        .with_label("label")
        .with_bow(true)
        .with_namespace_names(true);
    let lines = convert("a,b,label\nx,5,3\n", config);
    assert_eq!(lines, vec!["1 x 5"]);
}

// =============================================================================
// Labels
// =============================================================================

#[test]
fn test_integer_label_binarized_per_row() {
    let content = "f,y\n1.5,0\n2.5,1\n3.5,4\n4.5,0\n";
    let lines = convert(content, TranscodeConfig::new().with_label("y"));
    assert_eq!(
        lines,
        vec!["-1 | f:1.5", "1 | f:2.5", "1 | f:3.5", "-1 | f:4.5"]
    );
}

#[test]
fn test_float_label_passes_through() {
    let content = "f,price\na,0.0\nb,12.5\n";
    let lines = convert(content, TranscodeConfig::new().with_label("price"));
    assert_eq!(lines, vec!["0.0 | f_a", "12.5 | f_b"]);
}

#[test]
fn test_label_override_to_string_disables_binarization() {
    let config = TranscodeConfig::new()
        .with_label("y")
        .with_type_override("y", FieldType::String);
    let lines = convert("f,y\na,0\n", config);
    assert_eq!(lines, vec!["0 | f_a"]);
}

#[test]
fn test_ignored_label_still_emitted() {
    let config = TranscodeConfig::new().with_label("y").with_ignore("y");
    let lines = convert("f,y\na,0\n", config);
    assert_eq!(lines, vec!["-1 | f_a"]);
}

// =============================================================================
// Grouping
// =============================================================================

#[test]
fn test_ignore_in_every_mode() {
    let content = "id,a,b,y\n42,x,5,1\n";
    for (bow, namespace_names) in [(false, false), (true, false), (false, true), (true, true)] {
        let config = TranscodeConfig::new()
            .with_label("y")
            .with_ignore("id")
            .with_bow(bow)
            .with_namespace_names(namespace_names);
        let lines = convert(content, config);
        assert!(
            !lines[0].contains("42") && !lines[0].contains("id"),
            "ignored column leaked into {:?}",
            lines[0]
        );
    }
}

#[test]
fn test_namespaces_in_first_use_order() {
    let content = "a,b,c,d\nw,x,y,z\n";
    let config = TranscodeConfig::new()
        .with_namespace("d", "late")
        .with_namespace("b", "early")
        .with_namespace("c", "late");
    let lines = convert(content, config);
    assert_eq!(lines, vec![" | a_w |early x |late y z"]);
}

#[test]
fn test_type_override_moves_column_to_string_group() {
    let config = TranscodeConfig::new().with_type_override("zip", FieldType::String);
    let lines = convert("zip,n\n02134,3\n", config);
    assert_eq!(lines, vec![" | zip_02134 n:3"]);
}

#[test]
fn test_values_keep_whitespace() {
    let lines = convert("city\nnew york\n", TranscodeConfig::new());
    assert_eq!(lines, vec![" | city_new york"]);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_header_only_is_empty_input() {
    let reader = RowReader::from_reader("a,b\n".as_bytes(), b',').unwrap();
    let header = reader.headers().to_vec();
    let result = TranscodePipeline::default().run(header, reader);
    assert!(matches!(result, Err(CsvVwError::EmptyInput(_))));
}

#[test]
fn test_malformed_first_row_fails_before_output() {
    let reader = RowReader::from_reader("a,b\n1,2,3\n".as_bytes(), b',').unwrap();
    let header = reader.headers().to_vec();
    let result = TranscodePipeline::default().run(header, reader);
    assert!(matches!(
        result,
        Err(CsvVwError::MalformedRow { row: 0, expected: 2, found: 3 })
    ));
}

#[test]
fn test_strict_override_policy() {
    let config = TranscodeConfig::new()
        .with_type_override("nope", FieldType::Float)
        .with_override_policy(OverridePolicy::Error);
    let reader = RowReader::from_reader("a\n1\n".as_bytes(), b',').unwrap();
    let header = reader.headers().to_vec();
    let result = TranscodePipeline::new(config).run(header, reader);
    assert!(matches!(result, Err(CsvVwError::UnknownTypeOverride { .. })));
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_transcode_file_round() {
    let file = create_test_file("title\tviews\tclicked\nhello\t10\t0\nworld\t20\t1\n");
    let reader = RowReader::open(file.path(), Delimiter::Auto).expect("Failed to open");

    let mut output = Vec::new();
    let config = TranscodeConfig::new().with_label("clicked");
    let report = transcode(reader, &mut output, config).expect("Transcoding failed");

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "-1 | title_hello views:10\n1 | title_world views:20\n"
    );
    assert_eq!(report.summary.rows, 2);
    assert_eq!(report.summary.labelled_rows, 2);
    assert_eq!(report.schema.columns.len(), 3);
}

#[test]
fn test_config_file_drives_run() {
    let config_file = create_test_file(
        r#"{"label": "y", "namespaces": {"b": "ns1"}, "bow": false, "namespace_names": false}"#,
    );
    let config = TranscodeConfig::load(config_file.path()).expect("Failed to load config");
    let lines = convert("a,b,y\nx,5,0\n", config);
    assert_eq!(lines, vec!["-1 | a_x |ns1 5"]);
}
