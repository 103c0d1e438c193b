//! CLI integration tests running the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Minimal fragments file for CLI runs.
const FRAGMENTS_JSON: &str = r#"[
  {"text": "Gebührenreglement", "bbox": [56.7, 40.0, 300.0, 56.0], "page": 1},
  {"text": "Art. 1 Grundsatz", "bbox": [56.7, 90.0, 180.0, 102.0], "page": 1},
  {"text": "Die Gemeinde erhebt Gebühren nach diesem Reglement.", "bbox": [198.4, 90.0, 540.0, 102.0], "page": 1}
]"#;

#[test]
fn test_parse_no_enrich_writes_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("fragments.json");
    let output = dir.path().join("document.json");
    std::fs::write(&input, FRAGMENTS_JSON).expect("write input");

    let mut cmd = Command::cargo_bin("erlass-parser").expect("binary");
    cmd.arg("parse")
        .arg(&input)
        .arg(&output)
        .arg("--no-enrich")
        .env_remove("ANNOTATION_API_KEY");

    // The flag prints a bare "skipped", unlike the missing-key fallback.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Annotation: skipped\n"))
        .stdout(predicate::str::contains("Gebührenreglement"))
        .stdout(predicate::str::contains("Art. 1: Grundsatz"))
        .stdout(predicate::str::contains(
            "Die Gemeinde erhebt Gebühren nach diesem Reglement.",
        ))
        .stdout(predicate::str::contains("Saved to:"));

    let content = std::fs::read_to_string(&output).expect("read output");
    assert!(content.contains("\"title\": \"Gebührenreglement\""));
    assert!(content.contains("\"number\": \"1\""));
    assert!(
        !content.contains("\"summary\""),
        "no annotation fields without enrichment"
    );
}

/// Even with usable credentials in the environment, `--no-enrich` must
/// keep the binary off the annotation service entirely.
#[tokio::test]
async fn test_parse_no_enrich_sends_no_annotation_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    tokio::task::spawn_blocking(move || {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("fragments.json");
        let output = dir.path().join("document.json");
        std::fs::write(&input, FRAGMENTS_JSON).expect("write input");

        let mut cmd = Command::cargo_bin("erlass-parser").expect("binary");
        cmd.arg("parse")
            .arg(&input)
            .arg(&output)
            .arg("--no-enrich")
            .env("ANNOTATION_API_KEY", "test-key")
            .env("ANNOTATION_API_BASE_URL", &base_url);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Annotation: skipped\n"));

        let content = std::fs::read_to_string(&output).expect("read output");
        assert!(
            !content.contains("\"summary\""),
            "no annotation fields with --no-enrich"
        );
    })
    .await
    .expect("join");

    mock_server.verify().await;
}

#[test]
fn test_parse_missing_input_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("document.json");

    let mut cmd = Command::cargo_bin("erlass-parser").expect("binary");
    cmd.arg("parse")
        .arg(dir.path().join("missing.json"))
        .arg(&output)
        .arg("--no-enrich");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    assert!(!output.exists());
}

#[test]
fn test_parse_malformed_input_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("fragments.json");
    std::fs::write(&input, "{not json").expect("write input");

    let mut cmd = Command::cargo_bin("erlass-parser").expect("binary");
    cmd.arg("parse")
        .arg(&input)
        .arg(dir.path().join("document.json"))
        .arg("--no-enrich");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("fragments.json"));
}

#[test]
fn test_requires_subcommand() {
    let mut cmd = Command::cargo_bin("erlass-parser").expect("binary");
    cmd.assert().failure();
}
