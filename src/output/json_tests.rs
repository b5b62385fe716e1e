use serde_json::Value;

use crate::analyzer::Analyzer;
use crate::checks::catalogue;
use crate::context::Context;

use super::*;

fn analyze(html: &str, source: &str) -> DocumentReport {
    let analyzer = Analyzer::new(catalogue());
    DocumentReport {
        source: source.to_string(),
        analysis: analyzer.analyze(&Context::new(html)),
    }
}

#[test]
fn json_output_is_valid_and_carries_summary() {
    let reports = vec![analyze("<html><body><p>hi</p></body></html>", "page.html")];

    let output = JsonFormatter.format(&reports).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_documents"], 1);
    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["source"], "page.html");
}

#[test]
fn per_document_checks_are_keyed_by_check_id() {
    let reports = vec![analyze("<html><body><p>hi</p></body></html>", "page.html")];

    let output = JsonFormatter.format(&reports).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    let checks = parsed["results"][0]["checks"].as_object().unwrap();
    assert!(checks.contains_key("title-length"));
    assert!(checks.contains_key("meta-description"));

    let title = &checks["title-length"];
    assert_eq!(title["status"], "failed");
    assert!(title["message"].is_string());
    assert!(title["weight"].is_number());
}

#[test]
fn batch_summary_counts_statuses() {
    let reports = vec![
        analyze("<html><body><p>hi</p></body></html>", "a.html"),
        analyze("<html><body><p>hi</p></body></html>", "b.html"),
    ];

    let output = JsonFormatter.format(&reports).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    let summary = &parsed["summary"];
    let total = summary["passed"].as_u64().unwrap()
        + summary["warnings"].as_u64().unwrap()
        + summary["failed"].as_u64().unwrap();
    assert_eq!(total, 2);
}

#[test]
fn empty_batch_serializes_cleanly() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_documents"], 0);
    assert!(parsed["results"].as_array().unwrap().is_empty());
}
