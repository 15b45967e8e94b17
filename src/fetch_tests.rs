use std::fs;

use super::*;

#[test]
fn test_csv_url_layout() {
    let url = csv_url("https://example.com/data", Subset::Justice, "train");
    assert_eq!(url, "https://example.com/data/justice/train.csv");
}

#[test]
fn test_csv_url_tolerates_trailing_slash() {
    let url = csv_url("https://example.com/data/", Subset::Virtue, "test_hard");
    assert_eq!(url, "https://example.com/data/virtue/test_hard.csv");
}

#[test]
fn test_export_split_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("commonsense-train.jsonl");

    let csv_text = "label,input\n0,I returned the wallet.\n1,I kept the wallet.\n";
    let counts = export_split(csv_text, Subset::Commonsense, "train", &out).unwrap();
    assert_eq!(counts, ExportCounts { ok: 2, skipped: 0 });

    let written = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        r#"{"subset":"commonsense","split":"train","text":"I returned the wallet.","label":0}"#
    );

    // every line parses back as JSON with the expected fields
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["subset"], "commonsense");
        assert_eq!(v["split"], "train");
        assert!(v["text"].is_string());
    }
}

#[test]
fn test_export_split_preserves_quoted_commas() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("justice-train.jsonl");

    let csv_text = "label,scenario\n1,\"I shared the food, then left.\"\n";
    let counts = export_split(csv_text, Subset::Justice, "train", &out).unwrap();
    assert_eq!(counts.ok, 1);

    let written = fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
    assert_eq!(v["scenario"], "I shared the food, then left.");
}

#[test]
fn test_export_split_counts_bad_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("virtue-train.jsonl");

    // one good row, one unparseable label, one out-of-range label
    let csv_text = "label,scenario\n1,kind\nmaybe,honest\n9,patient\n";
    let counts = export_split(csv_text, Subset::Virtue, "train", &out).unwrap();
    assert_eq!(counts, ExportCounts { ok: 1, skipped: 2 });

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 1);
}

#[test]
fn test_export_split_skips_all_empty_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("commonsense-test.jsonl");

    let csv_text = "label,input\n,\n0,I told the truth.\n";
    let counts = export_split(csv_text, Subset::Commonsense, "test", &out).unwrap();
    assert_eq!(counts, ExportCounts { ok: 1, skipped: 1 });
}

#[test]
fn test_export_split_utilitarianism_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("utilitarianism-train.jsonl");

    let csv_text = "baseline,less_pleasant\nA sunny picnic.,A rained-out picnic.\n";
    let counts = export_split(csv_text, Subset::Utilitarianism, "train", &out).unwrap();
    assert_eq!(counts.ok, 1);

    let written = fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
    assert_eq!(v["baseline"], "A sunny picnic.");
    assert_eq!(v["less_pleasant"], "A rained-out picnic.");
    assert!(v.get("label").is_none());
}

#[test]
fn test_export_split_empty_input_writes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("justice-test.jsonl");

    let counts = export_split("label,scenario\n", Subset::Justice, "test", &out).unwrap();
    assert_eq!(counts, ExportCounts { ok: 0, skipped: 0 });
    assert_eq!(fs::read_to_string(&out).unwrap(), "");
}
