use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::game::Phase;
use holdem_engine::logger::{format_hand_id, ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::PlayerAction;

fn record(hand_id: String) -> HandRecord {
    HandRecord {
        hand_id,
        seed: Some(42),
        actions: vec![ActionRecord {
            seat: 0,
            phase: Phase::Preflop,
            action: PlayerAction::Raise(40),
        }],
        board: vec![Card {
            suit: Suit::Hearts,
            rank: Rank::Ace,
        }],
        results: Vec::new(),
        ts: None,
    }
}

#[test]
fn hand_ids_are_date_plus_six_digit_sequence() {
    assert_eq!(format_hand_id("20260829", 1), "20260829-000001");
    assert_eq!(format_hand_id("20260829", 123456), "20260829-123456");

    let mut logger = HandLogger::sink_with_date("20260829");
    assert_eq!(logger.next_id(), "20260829-000001");
    assert_eq!(logger.next_id(), "20260829-000002");
    assert_eq!(logger.next_id(), "20260829-000003");
}

#[test]
fn writes_one_json_line_per_hand_and_injects_a_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).unwrap();

    let first = logger.next_id();
    logger.write(&record(first)).unwrap();
    let second = logger.next_id();
    logger.write(&record(second)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let parsed: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(parsed.hand_id.ends_with("-000001"));
    assert_eq!(parsed.seed, Some(42));
    assert_eq!(parsed.actions.len(), 1);
    // timestamp injected on write, RFC3339 with a trailing Z
    let ts = parsed.ts.unwrap();
    assert!(ts.ends_with('Z'), "unexpected timestamp format: {}", ts);
}

#[test]
fn a_caller_supplied_timestamp_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).unwrap();

    let mut rec = record(logger.next_id());
    rec.ts = Some("2026-08-29T12:00:00Z".to_string());
    logger.write(&rec).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: HandRecord = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    assert_eq!(parsed.ts.as_deref(), Some("2026-08-29T12:00:00Z"));
}

#[test]
fn reopening_a_log_path_appends_instead_of_truncating() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");

    let mut first = HandLogger::create(&path).unwrap();
    let id = first.next_id();
    first.write(&record(id)).unwrap();
    drop(first);

    let mut second = HandLogger::create(&path).unwrap();
    let id = second.next_id();
    second.write(&record(id)).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);
    for line in contents.lines() {
        let parsed: HandRecord = serde_json::from_str(line).unwrap();
        assert_eq!(parsed.seed, Some(42));
    }
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("deep").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).unwrap();
    let id = logger.next_id();
    logger.write(&record(id)).unwrap();
    assert!(path.exists());
}
