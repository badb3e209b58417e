//! End-to-end scoreboard scenarios through the validating facade.

use scoreboard_registry::{RegistryError, Scoreboard, ScoreboardError};
use scoreboard_types::Score;

#[test]
fn single_match_on_empty_board() {
    let board = Scoreboard::new();
    board.start_match("teamA", "teamB").unwrap();

    let rows = board.summary();
    assert_eq!(rows.len(), 1);

    let row = &rows[0];
    assert_eq!(row.home, "teamA");
    assert_eq!(row.away, "teamB");
    assert_eq!(row.score(), Score::new(0, 0));
    assert!(row.sequence > 0, "start sequence has to be incremented");
}

#[test]
fn busy_team_cannot_start_a_second_match() {
    let board = Scoreboard::new();
    board.start_match("HomeTeam", "OtherTeam").unwrap();

    let err = board.start_match("HomeTeam", "AwayTeam").unwrap_err();
    assert_eq!(
        err,
        ScoreboardError::Registry(RegistryError::AlreadyPlaying("HomeTeam".into()))
    );

    let rows = board.summary();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].home, "HomeTeam");
    assert_eq!(rows[0].away, "OtherTeam");
}

#[test]
fn away_conflict_rolls_back_and_keeps_board_intact() {
    let board = Scoreboard::new();
    board.start_match("HomeTeam", "OtherTeam").unwrap();

    let err = board.start_match("AwayTeam", "OtherTeam").unwrap_err();
    assert_eq!(
        err,
        ScoreboardError::Registry(RegistryError::AlreadyPlaying("OtherTeam".into()))
    );

    // The failed start must not leave "AwayTeam" reserved.
    board.start_match("AwayTeam", "ThirdTeam").unwrap();
    assert_eq!(board.summary().len(), 2);
}

#[test]
fn world_cup_summary_ordering() {
    let board = Scoreboard::new();
    board.start_match("Mexico", "Canada").unwrap();
    board.start_match("Spain", "Brazil").unwrap();
    board.start_match("Germany", "France").unwrap();
    board.start_match("Uruguay", "Italy").unwrap();
    board.start_match("Argentina", "Australia").unwrap();

    board.update_score("Mexico", "Canada", 0, 5).unwrap();
    board.update_score("Spain", "Brazil", 10, 2).unwrap();
    board.update_score("Germany", "France", 2, 2).unwrap();
    board.update_score("Uruguay", "Italy", 6, 6).unwrap();
    board.update_score("Argentina", "Australia", 3, 1).unwrap();

    let rows = board.summary();
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|m| (m.home.as_str(), m.away.as_str()))
        .collect();

    // Totals 12, 12, 5, 4, 4; equal totals rank the later start first.
    assert_eq!(
        pairs,
        vec![
            ("Uruguay", "Italy"),
            ("Spain", "Brazil"),
            ("Mexico", "Canada"),
            ("Argentina", "Australia"),
            ("Germany", "France"),
        ]
    );
}

#[test]
fn update_on_empty_board_reports_not_started() {
    let board = Scoreboard::new();
    let err = board.update_score("Mexico", "Canada", 1, 0).unwrap_err();
    assert_eq!(
        err,
        ScoreboardError::Registry(RegistryError::MatchNotStarted("Mexico".into()))
    );
}

#[test]
fn updates_hit_the_right_match_on_a_multi_match_board() {
    let board = Scoreboard::new();
    board.start_match("Mexico", "Canada").unwrap();
    board.start_match("Spain", "Brazil").unwrap();

    board.update_score("Mexico", "Canada", 1, 0).unwrap();
    board.update_score("Spain", "Brazil", 0, 2).unwrap();

    let rows = board.summary();
    let mexico = rows.iter().find(|m| m.home == "Mexico").unwrap();
    let spain = rows.iter().find(|m| m.home == "Spain").unwrap();
    assert_eq!(mexico.score(), Score::new(1, 0));
    assert_eq!(spain.score(), Score::new(0, 2));
}

#[test]
fn removing_a_match_twice_fails_the_second_time() {
    let board = Scoreboard::new();
    board.start_match("Uruguay", "Italy").unwrap();

    board.remove_match("Uruguay", "Italy").unwrap();
    assert!(board.summary().is_empty());

    let err = board.remove_match("Uruguay", "Italy").unwrap_err();
    assert_eq!(
        err,
        ScoreboardError::Registry(RegistryError::MatchNotStarted("Uruguay".into()))
    );
}

#[test]
fn remove_keeps_the_other_matches() {
    let board = Scoreboard::new();
    board.start_match("Mexico", "Canada").unwrap();
    board.start_match("Spain", "Brazil").unwrap();

    board.remove_match("Mexico", "Canada").unwrap();

    let rows = board.summary();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].home, "Spain");
}

#[test]
fn same_teams_can_replay_after_finishing() {
    let board = Scoreboard::new();
    let first = board.start_match("teamA", "teamB").unwrap();
    board.update_score("teamA", "teamB", 3, 3).unwrap();
    board.remove_match("teamA", "teamB").unwrap();

    let second = board.start_match("teamA", "teamB").unwrap();
    assert!(second.sequence > first.sequence);

    let rows = board.summary();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].score(), Score::new(0, 0), "replay starts from scratch");
}
