//! High-score board and repository tests.

use std::path::PathBuf;

use bjround::{
    HighScoreBoard, HighScoreEntry, HighScoreRepository, JsonFileRepository, MemoryRepository,
    PlayerName, StoreError,
};

fn name(s: &str) -> PlayerName {
    PlayerName::parse(s).unwrap()
}

fn temp_file(test: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bjround-{test}-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);
    path
}

fn scores(board: &HighScoreBoard<impl HighScoreRepository>) -> Vec<(String, usize)> {
    board
        .top()
        .into_iter()
        .map(|e| (e.name.to_string(), e.score))
        .collect()
}

#[test]
fn record_evicts_lowest_and_persists() {
    let repository = MemoryRepository::with_entries(vec![
        HighScoreEntry::new(name("AAA"), 90),
        HighScoreEntry::new(name("BBB"), 80),
        HighScoreEntry::new(name("CCC"), 70),
    ]);
    let board = HighScoreBoard::open(repository).unwrap();

    assert!(board.is_high_score(75));
    assert!(!board.is_high_score(70));

    let evicted = board.record(name("DDD"), 75).unwrap();
    assert_eq!(evicted, Some(HighScoreEntry::new(name("CCC"), 70)));
    assert_eq!(
        scores(&board),
        [
            ("AAA".to_string(), 90),
            ("BBB".to_string(), 80),
            ("DDD".to_string(), 75)
        ]
    );

    let repository = board.into_repository();
    assert_eq!(repository.entries().len(), 3);
    assert_eq!(repository.entries()[2].score, 75);
}

#[test]
fn oversized_store_is_trimmed_on_open() {
    let repository = MemoryRepository::with_entries(vec![
        HighScoreEntry::new(name("A"), 10),
        HighScoreEntry::new(name("B"), 40),
        HighScoreEntry::new(name("C"), 30),
        HighScoreEntry::new(name("D"), 20),
    ]);
    let board = HighScoreBoard::open(repository).unwrap();
    assert_eq!(
        scores(&board),
        [
            ("B".to_string(), 40),
            ("C".to_string(), 30),
            ("D".to_string(), 20)
        ]
    );
}

#[test]
fn board_with_larger_capacity_keeps_more_entries() {
    let repository = MemoryRepository::with_entries(vec![
        HighScoreEntry::new(name("A"), 10),
        HighScoreEntry::new(name("B"), 40),
        HighScoreEntry::new(name("C"), 30),
        HighScoreEntry::new(name("D"), 20),
    ]);
    let board = HighScoreBoard::open_with_capacity(repository, 5).unwrap();
    assert_eq!(board.top().len(), 4);
    assert!(board.is_high_score(1));

    assert_eq!(board.record(name("E"), 5).unwrap(), None);
    assert!(!board.is_high_score(5));

    let evicted = board.record(name("F"), 50).unwrap();
    assert_eq!(evicted, Some(HighScoreEntry::new(name("E"), 5)));
    assert_eq!(
        board.top().iter().map(|e| e.score).collect::<Vec<_>>(),
        [50, 40, 30, 20, 10]
    );
    assert_eq!(board.into_repository().entries().len(), 5);
}

#[test]
fn board_with_single_slot_keeps_only_the_best() {
    let board = HighScoreBoard::open_with_capacity(MemoryRepository::new(), 1).unwrap();
    board.record(name("LOW"), 20).unwrap();
    board.record(name("TOP"), 60).unwrap();
    board.record(name("MID"), 40).unwrap();

    assert_eq!(scores(&board), [("TOP".to_string(), 60)]);
}

#[test]
fn clear_empties_board_and_store() {
    let board = HighScoreBoard::open(MemoryRepository::new()).unwrap();
    board.record(name("ZZ"), 5).unwrap();
    board.clear().unwrap();

    assert!(board.top().is_empty());
    assert!(board.into_repository().entries().is_empty());
}

#[test]
fn concurrent_recordings_are_not_lost() {
    let board = HighScoreBoard::open(MemoryRepository::new()).unwrap();

    std::thread::scope(|scope| {
        for worker in 0..4usize {
            let board = &board;
            scope.spawn(move || {
                for round in 0..5usize {
                    board.record(name("T"), worker * 10 + round).unwrap();
                }
            });
        }
    });

    let top: Vec<usize> = board.top().iter().map(|e| e.score).collect();
    assert_eq!(top, [34, 33, 32]);
}

#[test]
fn json_file_is_created_and_reloaded() {
    let path = temp_file("reload");

    let board = HighScoreBoard::open(JsonFileRepository::open(&path).unwrap()).unwrap();
    assert!(path.exists());
    assert!(board.top().is_empty());

    board.record(name("ANN"), 150).unwrap();
    board.record(name("BEN"), 120).unwrap();
    drop(board);

    let reopened = HighScoreBoard::open(JsonFileRepository::open(&path).unwrap()).unwrap();
    assert_eq!(
        scores(&reopened),
        [("ANN".to_string(), 150), ("BEN".to_string(), 120)]
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn malformed_json_is_reported() {
    let path = temp_file("malformed");
    std::fs::write(&path, r#"[{"name": "TOOLONG", "score": 3}]"#).unwrap();

    let err = HighScoreBoard::open(JsonFileRepository::open(&path).unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::Format(_)));

    std::fs::remove_file(&path).unwrap();
}
