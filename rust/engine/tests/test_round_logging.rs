use std::fs;

use parlor_engine::cards::full_deck;
use parlor_engine::entropy::SeededEntropy;
use parlor_engine::logger::{EntryRecord, GameKind, RoundLogger, RoundRecord};
use parlor_engine::poker::{play_round, seat};

fn sample(ts: Option<String>) -> RoundRecord {
    RoundRecord {
        round_id: "20250102-000001".to_string(),
        game: GameKind::Yahtzee,
        seed: Some(1),
        round: 1,
        entries: vec![EntryRecord {
            player: "Alice".to_string(),
            symbols: vec!["6".to_string(); 5],
            category: "Yahtzee".to_string(),
            score: Some(50),
        }],
        winners: vec!["Alice".to_string()],
        ts,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample(None)).expect("write");
    logger.write(&sample(None)).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("rounds.jsonl");
    let mut logger = RoundLogger::create(&path).expect("create logger creates parents");
    logger.write(&sample(None)).expect("write");
    logger
        .write(&sample(Some("2025-01-02T03:04:05Z".to_string())))
        .expect("write");

    let text = fs::read_to_string(&path).expect("read");
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert!(records[0].ts.as_deref().is_some_and(|ts| ts.ends_with('Z')));
    assert_eq!(records[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn poker_outcome_converts_to_a_record() {
    let deck = full_deck().shuffle(&mut SeededEntropy::new_with_seed(3));
    let (_, outcome) = play_round(&deck, &seat(["Alice", "Bob"]), 1).unwrap();

    let mut logger = RoundLogger::with_seq_for_test("20250102");
    let record = RoundRecord::from_poker(logger.next_id(), Some(3), &outcome);
    assert_eq!(record.round_id, "20250102-000001");
    assert_eq!(record.game, GameKind::Poker);
    assert_eq!(record.entries.len(), 2);
    assert!(record.entries.iter().all(|e| e.symbols.len() == 5));
    assert!(record.entries.iter().all(|e| e.score.is_none()));
    assert_eq!(record.winners, outcome.winners);

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["game"], "poker");
}
