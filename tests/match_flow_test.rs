use cricket_scorer::{BallOutcome, InningsStatus, MatchEngine, ScorerError, Team};

fn team(name: &str, players: &[&str]) -> Team {
    Team::new(name, players.iter().map(|p| p.to_string()).collect())
}

fn record_all(engine: &mut MatchEngine, tokens: &[&str]) -> InningsStatus {
    let mut status = InningsStatus::Continue;
    for token in tokens {
        let outcome: BallOutcome = token.parse().unwrap();
        status = engine.record_ball(outcome).unwrap();
    }
    status
}

/// India post 119 and are bowled out, leaving a target of 120.
fn engine_chasing_120(chasers: &[&str]) -> MatchEngine {
    let mut engine = MatchEngine::new();
    engine
        .initialize_match(team("India", &["Rohit", "Kohli"]), team("Australia", chasers), 20)
        .unwrap();

    let mut first_innings = vec!["6"; 19];
    first_innings.extend(["4", "1", "W"]);
    let status = record_all(&mut engine, &first_innings);
    assert_eq!(status, InningsStatus::InningsOneDone);

    let state = engine.switch_innings().unwrap();
    assert_eq!(state.target(), Some(120));
    engine
}

#[test]
fn test_legal_ball_count_ignores_extras() {
    let mut engine = MatchEngine::new();
    engine
        .initialize_match(team("A", &["A1", "A2", "A3"]), team("B", &["B1"]), 10)
        .unwrap();

    let tokens = ["0", "WD", "1", "2", "NB", "3", "4", "WD", "6", "W", "0"];
    record_all(&mut engine, &tokens);

    let state = engine.state().unwrap();
    let legal = tokens.iter().filter(|t| !matches!(**t, "WD" | "NB")).count();
    assert_eq!(state.legal_balls() as usize, legal);
    assert_eq!(state.score(), 1 + 1 + 2 + 1 + 3 + 4 + 1 + 6);
    assert_eq!(state.overs_text(), "1.2");
}

#[test]
fn test_chase_resolves_the_moment_target_is_reached() {
    let mut engine = engine_chasing_120(&["Warner", "Head", "Smith"]);

    let status = record_all(&mut engine, &["W"]);
    assert_eq!(status, InningsStatus::Continue);

    let mut status = InningsStatus::Continue;
    for ball in 0..20 {
        status = engine.record_ball(BallOutcome::Runs(6)).unwrap();
        if ball < 19 {
            assert_eq!(status, InningsStatus::Continue);
        }
    }

    assert_eq!(
        status,
        InningsStatus::MatchWon {
            winner: "Australia".to_string(),
            wickets: 1
        }
    );
    let state = engine.state().unwrap();
    assert!(state.is_match_over());
    assert!(state.balls_remaining() > 0);
    assert_eq!(state.runs_needed(), Some(0));
    assert!(matches!(
        engine.record_ball(BallOutcome::Dot),
        Err(ScorerError::InvalidTransitionError { .. })
    ));
}

#[test]
fn test_switch_innings_only_once() {
    let mut engine = engine_chasing_120(&["Warner", "Head"]);

    let state = engine.state().unwrap();
    assert_eq!(state.innings(), 2);
    assert_eq!(state.batting_team().name, "Australia");
    assert_eq!(state.bowling_team().name, "India");
    assert_eq!((state.score(), state.wickets(), state.legal_balls()), (0, 0, 0));
    assert_eq!(state.striker(), "Warner");
    assert_eq!(state.bowler(), "Rohit");
    assert!(state.history().is_empty());

    assert!(matches!(
        engine.switch_innings(),
        Err(ScorerError::InvalidTransitionError { .. })
    ));
    assert_eq!(engine.state().unwrap().batting_team().name, "Australia");
}

#[test]
fn test_first_innings_snapshot_survives_second_innings() {
    let mut engine = engine_chasing_120(&["Warner", "Head"]);
    record_all(&mut engine, &["4", "4"]);

    let state = engine.state().unwrap();
    let snapshot = state.first_innings().unwrap();
    assert_eq!(snapshot.team_name(), "India");
    assert_eq!(snapshot.score(), 119);
    assert_eq!(snapshot.overs(), "3.4");

    let bowling = &snapshot.bowling()[0];
    assert_eq!(bowling.bowler, "Warner");
    assert_eq!(bowling.runs, 119);
    assert_eq!(bowling.wickets, 1);

    assert_eq!(state.batting_record("Warner").unwrap().runs, 8);
}

#[test]
fn test_reset_returns_to_pre_setup() {
    let mut engine = engine_chasing_120(&["Warner", "Head"]);
    engine.reset_match();
    assert!(!engine.is_setup());
    assert!(engine.state().is_err());
    assert!(engine.record_ball(BallOutcome::Dot).is_err());
}

#[test]
fn test_metrics_are_repeatable() {
    let mut engine = MatchEngine::new();
    engine
        .initialize_match(team("A", &["A1", "A2"]), team("B", &["B1"]), 5)
        .unwrap();
    record_all(&mut engine, &["4", "1", "0", "6", "WD", "2", "0"]);

    let state = engine.state().unwrap();
    let first = (state.current_run_rate(), state.bowling_rows(), state.batting_rows());
    let second = (state.current_run_rate(), state.bowling_rows(), state.batting_rows());
    assert_eq!(first, second);
    assert_eq!(state.current_run_rate(), 14.0);
    assert_eq!(state.bowling_rows()[0].economy, 14.0);
}
