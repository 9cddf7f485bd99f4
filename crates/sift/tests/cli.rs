//! CLI integration tests for sift.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a sift command.
fn sift() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("sift").unwrap()
}

/// A two-document collection used by the --docs tests.
const TINY_COLLECTION: &str = r#"[
    {"id": 1, "title": "One", "content": "java search engine", "date": "2024-01-15"},
    {"id": 2, "title": "Two", "content": "python scripting", "date": "2023-06-30"}
]"#;

mod one_shot {
    use super::*;

    #[test]
    fn term_query_against_sample_docs() {
        sift()
            .arg("inverted")
            .assert()
            .success()
            .stdout(predicate::str::contains("Inverted Index Internals"));
    }

    #[test]
    fn multiple_args_join_into_one_query() {
        sift()
            .args(["java", "AND", "search"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Java Search Basics"));
    }

    #[test]
    fn phrase_query_matches_exact_sequence() {
        sift()
            .arg("\"search engine\"")
            .assert()
            .success()
            .stdout(predicate::str::contains("Phrase Queries"));
    }

    #[test]
    fn unmatched_query_reports_no_results() {
        sift()
            .arg("zzzmissing")
            .assert()
            .success()
            .stdout(predicate::str::contains("No results"));
    }

    #[test]
    fn operator_only_query_reports_no_results() {
        sift()
            .args(["AND", "OR", "NOT"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results"));
    }
}

mod json_output {
    use super::*;

    #[test]
    fn emits_parseable_json_with_scores() {
        let output = sift().args(["--json", "inverted"]).assert().success();

        let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

        assert_eq!(parsed["query"], "inverted");
        let results = parsed["results"].as_array().unwrap();
        assert_eq!(parsed["total_matches"], results.len() as u64);
        assert!(!results.is_empty());
        for result in results {
            assert!(result["score"].as_f64().unwrap() >= 1.0);
            assert!(result["snippet"].is_string());
            assert!(result["document"]["id"].is_u64());
        }
    }

    #[test]
    fn scores_are_descending() {
        let output = sift()
            .args(["--json", "search", "OR", "index"])
            .assert()
            .success();

        let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

        let scores: Vec<f64> = parsed["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

mod collections {
    use super::*;

    #[test]
    fn loads_documents_from_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, TINY_COLLECTION).unwrap();

        sift()
            .arg("--docs")
            .arg(&path)
            .args(["--json", "NOT", "python"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"total_matches\": 1"));
    }

    #[test]
    fn missing_collection_file_fails() {
        sift()
            .args(["--docs", "/nonexistent/docs.json", "java"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn malformed_collection_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        fs::write(&path, "{not json").unwrap();

        sift()
            .arg("--docs")
            .arg(&path)
            .arg("java")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }
}

mod interactive {
    use super::*;

    #[test]
    fn reads_queries_from_stdin_until_exit() {
        sift()
            .write_stdin("inverted\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Inverted Index Internals"));
    }

    #[test]
    fn eof_ends_the_session() {
        sift()
            .write_stdin("")
            .assert()
            .success()
            .stdout(predicate::str::contains("documents loaded"));
    }
}
