//! Tests for the headless script runner.

use tictactoe_tally::{InputEvent, Roster, Session, parse_events, run_script};

fn tokens(s: &str) -> Vec<String> {
    s.split_whitespace().map(String::from).collect()
}

#[test]
fn test_text_output_shows_each_event() {
    let mut session = Session::new(Roster::default());
    let events = parse_events(&tokens("0 0 3")).unwrap();
    let mut out = Vec::new();

    run_script(&mut session, &events, false, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("> select 0 (Top-left)"));
    assert!(text.contains("(ignored: Top-left is already occupied)"));
    assert!(text.contains("🐱's turn"));
    assert!(text.contains("Games: 0"));
}

#[test]
fn test_json_snapshot_after_win() {
    let mut session = Session::new(Roster::default());
    let events = parse_events(&tokens("0 3 1 4 2")).unwrap();
    let mut out = Vec::new();

    run_script(&mut session, &events, true, &mut out).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["status"], "🐱 wins!");
    assert_eq!(value["statistics"]["first_wins"], 1);
    assert_eq!(value["statistics"]["total_games"], 1);
    assert_eq!(value["board"][0], "🐱");
    assert_eq!(value["board"][3], "🐶");
    assert!(value["board"][8].is_null());
    assert_eq!(value["history"], serde_json::json!([0, 3, 1, 4, 2]));
}

#[test]
fn test_restart_and_reset_tokens() {
    let mut session = Session::new(Roster::default());
    let events = parse_events(&tokens("0 3 1 4 2 r 4 s")).unwrap();
    assert_eq!(events[5], InputEvent::Restart);
    assert_eq!(events[7], InputEvent::ResetStatistics);

    run_script(&mut session, &events, true, &mut Vec::new()).unwrap();

    assert_eq!(session.stats().total_games(), 0);
    assert_eq!(session.game().history().len(), 1);
}
