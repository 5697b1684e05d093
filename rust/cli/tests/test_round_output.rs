use serde_json::Value;
use serial_test::serial;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = parlor_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn records(path: &std::path::Path) -> Vec<Value> {
    let text = std::fs::read_to_string(path).unwrap();
    assert!(!text.contains('\r'), "log must use LF line endings");
    text.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
}

#[test]
#[serial]
fn poker_writes_one_record_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("poker.jsonl");
    let (code, _, err) = run(&[
        "parlor",
        "poker",
        "--seed",
        "42",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", err);

    let recs = records(&path);
    assert_eq!(recs.len(), 3);
    for (i, rec) in recs.iter().enumerate() {
        assert_eq!(rec["game"], "poker");
        assert_eq!(rec["seed"], 42);
        assert_eq!(rec["round"], i + 1);
        assert_eq!(rec["entries"].as_array().unwrap().len(), 3);
        assert!(!rec["winners"].as_array().unwrap().is_empty());
        assert!(rec["ts"].is_string());
        assert!(rec["round_id"].as_str().unwrap().ends_with(&format!("-{:06}", i + 1)));
    }
    let first = &recs[0]["entries"][0];
    assert_eq!(first["player"], "Alice");
    assert_eq!(first["symbols"].as_array().unwrap().len(), 5);
}

#[test]
#[serial]
fn yahtzee_records_carry_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("yahtzee.jsonl");
    let (code, _, _) = run(&[
        "parlor",
        "yahtzee",
        "--seed",
        "4",
        "--players",
        "Ann",
        "--rounds",
        "3",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let recs = records(&path);
    assert_eq!(recs.len(), 3);
    for rec in &recs {
        assert_eq!(rec["game"], "yahtzee");
        let entry = &rec["entries"][0];
        assert_eq!(entry["player"], "Ann");
        assert_eq!(entry["symbols"].as_array().unwrap().len(), 5);
        assert!(entry["score"].is_u64());
        assert_eq!(rec["winners"], serde_json::json!(["Ann"]));
    }
}
