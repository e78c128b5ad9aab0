use std::process::Command;

// A minimal scraped document covering one service with one privilege.
const EXAMPLE_DOCUMENT: &str = r#"[{
    "service_name": "Example Service",
    "prefix": "ex",
    "privileges": [{
        "privilege": "Get\"Thing",
        "access_level": "Read",
        "description": "Gets a thing",
        "resource_types": []
    }],
    "resources": [],
    "conditions": []
}]"#;

const INVALID_DOCUMENT: &str = r#"[{
    "service_name": "Example Service",
    "prefix": "ex",
    "privileges": [{"privilege": "GetThing", "description": "Gets a thing"}]
}]"#;

fn write_input(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("iam-definition.json");
    std::fs::write(&path, contents).expect("failed to write input document");
    path
}

#[test]
fn help_describes_generator() {
    let out = Command::new(env!("CARGO_BIN_EXE_parliament-datagen"))
        .arg("--help")
        .output()
        .expect("failed to run --help");
    assert_eq!(out.status.code(), Some(0));

    let s = String::from_utf8_lossy(&out.stdout);
    assert!(s.contains("--input"), "help was: {}", s);
    assert!(s.contains("--output"), "help was: {}", s);
    assert!(s.contains("--no-format"), "help was: {}", s);
}

#[test]
fn test_generates_permission_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, EXAMPLE_DOCUMENT);
    let output = dir.path().join("parliament.go");

    let out = Command::new(env!("CARGO_BIN_EXE_parliament-datagen"))
        .args(["--input"])
        .arg(&input)
        .args(["--output"])
        .arg(&output)
        .arg("--no-format")
        .output()
        .expect("failed to run generator");

    assert_eq!(out.status.code(), Some(0), "stderr was: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Done"), "stdout was: {}", stdout);

    let generated = std::fs::read_to_string(&output).expect("generated file missing");
    assert!(generated.contains("// Code generated by parliament-datagen; DO NOT EDIT."));
    assert!(generated.contains("package aws"));
    assert!(generated.contains("func getParliamentIamPermissions() []ParliamentService {"));
    assert!(generated.contains(r#"ServiceName: "Example Service","#));
    assert!(generated.contains(r#"Privilege: "Get\"Thing","#));
    assert!(generated.contains("ResourceTypes: []ParliamentResourceType{},"));
}

#[test]
fn test_output_is_byte_stable_across_runs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, EXAMPLE_DOCUMENT);
    let output = dir.path().join("parliament.go");

    let mut contents = Vec::new();
    for _ in 0..2 {
        let out = Command::new(env!("CARGO_BIN_EXE_parliament-datagen"))
            .args(["--input"])
            .arg(&input)
            .args(["--output"])
            .arg(&output)
            .arg("--no-format")
            .output()
            .expect("failed to run generator");
        assert_eq!(out.status.code(), Some(0));
        contents.push(std::fs::read(&output).expect("generated file missing"));
    }
    assert_eq!(contents[0], contents[1], "runs should be byte-identical");
}

#[test]
fn test_missing_input_document_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("no-such-document.json");
    let output = dir.path().join("parliament.go");

    let out = Command::new(env!("CARGO_BIN_EXE_parliament-datagen"))
        .args(["--input"])
        .arg(&input)
        .args(["--output"])
        .arg(&output)
        .arg("--no-format")
        .output()
        .expect("failed to run generator");

    assert_ne!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("no-such-document.json"),
        "stderr was: {}",
        stderr
    );
    assert!(!output.exists(), "no output should be written");
}

#[test]
fn test_missing_required_field_names_field_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_input(&dir, INVALID_DOCUMENT);
    let output = dir.path().join("parliament.go");

    let out = Command::new(env!("CARGO_BIN_EXE_parliament-datagen"))
        .args(["--input"])
        .arg(&input)
        .args(["--output"])
        .arg(&output)
        .arg("--no-format")
        .output()
        .expect("failed to run generator");

    assert_ne!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("access_level"), "stderr was: {}", stderr);
    assert!(!output.exists(), "no output should be written on input errors");
}
