use serde_json::json;

use super::*;

#[test]
fn test_keep_at_cutoff_boundary() {
    let rec = json!({"text": "a".repeat(1000)});
    assert!(keep(&rec, "text", 1000));

    let rec = json!({"text": "a".repeat(1001)});
    assert!(!keep(&rec, "text", 1000));
}

#[test]
fn test_keep_trims_before_measuring() {
    // 1000 chars of content padded with whitespace still survives
    let padded = format!("  {}  ", "a".repeat(1000));
    let rec = json!({"text": padded});
    assert!(keep(&rec, "text", 1000));
}

#[test]
fn test_keep_counts_chars_not_bytes() {
    // 4 codepoints, 8 bytes
    let rec = json!({"text": "éééé"});
    assert!(keep(&rec, "text", 4));
    assert!(!keep(&rec, "text", 3));
}

#[test]
fn test_keep_rejects_missing_or_non_string_field() {
    assert!(!keep(&json!({"other": "x"}), "text", 1000));
    assert!(!keep(&json!({"text": 42}), "text", 1000));
    assert!(!keep(&json!({"text": null}), "text", 1000));
}

#[test]
fn test_keep_respects_field_name() {
    let rec = json!({"scenario": "ok"});
    assert!(keep(&rec, "scenario", 10));
    assert!(!keep(&rec, "text", 10));
}

#[test]
fn test_prune_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let indir = dir.path().join("raw");
    let outdir = dir.path().join("filtered");
    fs::create_dir_all(&indir).unwrap();

    let inpath = indir.join("commonsense-train.jsonl");
    let mut content = String::new();
    for len in [500usize, 1000, 1001] {
        content.push_str(&format!("{{\"text\": \"{}\"}}\n", "a".repeat(len)));
    }
    fs::write(&inpath, content).unwrap();

    let (outpath, outcome) = prune_file(&inpath, &outdir, "text", 1000).unwrap();
    assert_eq!(outcome, PruneOutcome { kept: 2, dropped: 1 });
    assert_eq!(outpath, outdir.join("commonsense-train.jsonl"));

    // survivors' maximum length is exactly the cutoff
    let max_len = crate::jsonl::text_lengths(&outpath, "text")
        .unwrap()
        .into_iter()
        .max()
        .unwrap();
    assert_eq!(max_len, 1000);
}

#[test]
fn test_prune_file_skips_malformed_lines_silently() {
    let dir = tempfile::tempdir().unwrap();
    let inpath = dir.path().join("noisy.jsonl");
    let outdir = dir.path().join("filtered");
    fs::write(
        &inpath,
        "{\"text\": \"short\"}\n\nnot json\n{\"text\": \"also short\"}\n",
    )
    .unwrap();

    let (_, outcome) = prune_file(&inpath, &outdir, "text", 100).unwrap();
    // blank and malformed lines are neither kept nor dropped
    assert_eq!(outcome, PruneOutcome { kept: 2, dropped: 0 });
}

#[test]
fn test_prune_file_preserves_surviving_lines() {
    let dir = tempfile::tempdir().unwrap();
    let inpath = dir.path().join("data.jsonl");
    let outdir = dir.path().join("filtered");
    let line = r#"{"text": "kept as-is", "label": 1}"#;
    fs::write(&inpath, format!("{}\n", line)).unwrap();

    let (outpath, outcome) = prune_file(&inpath, &outdir, "text", 100).unwrap();
    assert_eq!(outcome.kept, 1);
    assert_eq!(fs::read_to_string(outpath).unwrap(), format!("{}\n", line));
}
