//! Integration tests for standings: points, goals, ordering, stale references.

use fifa_league_web::{
    calculate_standings, generate_fixture, FixtureMode, LeagueError, Match, Player, StandingsRow,
};

fn roster(names: &[&str]) -> Vec<Player> {
    names.iter().map(|n| Player::new(*n, None)).collect()
}

/// Record a result on the match between `home` and `away` (by name).
fn play(matches: &mut [Match], home: &str, away: &str, home_score: u32, away_score: u32) {
    let m = matches
        .iter_mut()
        .find(|m| m.home_player.name == home && m.away_player.name == away)
        .unwrap_or_else(|| panic!("no match {home} v {away}"));
    m.home_score = Some(home_score);
    m.away_score = Some(away_score);
}

fn row<'a>(rows: &'a [StandingsRow], name: &str) -> &'a StandingsRow {
    rows.iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no row for {name}"))
}

#[test]
fn empty_fixture_gives_one_zero_row_per_player() {
    let players = roster(&["Alice", "Bob", "Carol"]);
    let rows = calculate_standings(&players, &[]).unwrap();
    assert_eq!(rows.len(), 3);
    for r in &rows {
        assert_eq!(
            (r.points, r.goals_for, r.goals_against, r.goal_difference),
            (0, 0, 0, 0)
        );
    }
}

#[test]
fn incomplete_matches_contribute_nothing() {
    let players = roster(&["Alice", "Bob", "Carol"]);
    let mut matches = generate_fixture(&players, FixtureMode::Single);
    matches[0].home_score = Some(4); // away score still unset
    let rows = calculate_standings(&players, &matches).unwrap();
    for r in &rows {
        assert_eq!(r.points, 0);
        assert_eq!(r.goals_for, 0);
    }
}

#[test]
fn three_player_league_table() {
    // Alice beats Bob 3-1, Bob draws Carol 2-2, Carol loses to Alice 0-2.
    let players = roster(&["Alice", "Bob", "Carol"]);
    let mut matches = generate_fixture(&players, FixtureMode::Single);
    play(&mut matches, "Alice", "Bob", 3, 1);
    play(&mut matches, "Bob", "Carol", 2, 2);
    play(&mut matches, "Alice", "Carol", 2, 0);

    let rows = calculate_standings(&players, &matches).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Alice");

    let alice = row(&rows, "Alice");
    assert_eq!(
        (alice.points, alice.goals_for, alice.goals_against, alice.goal_difference),
        (6, 5, 1, 4)
    );
    let bob = row(&rows, "Bob");
    assert_eq!(
        (bob.points, bob.goals_for, bob.goals_against, bob.goal_difference),
        (1, 3, 5, -2)
    );
    let carol = row(&rows, "Carol");
    assert_eq!(
        (carol.points, carol.goals_for, carol.goals_against, carol.goal_difference),
        (1, 2, 4, -2)
    );
    // Bob and Carol are tied on points and goal difference; both must be
    // present but their relative order is unspecified.
}

#[test]
fn total_points_match_decisive_and_drawn_counts() {
    let players = roster(&["Alice", "Bob", "Carol", "Dave"]);
    let mut matches = generate_fixture(&players, FixtureMode::Double);
    let results = [(3u32, 1u32), (2, 2), (0, 0), (1, 0), (4, 2), (1, 1), (0, 3)];
    for (m, (h, a)) in matches.iter_mut().zip(results) {
        m.home_score = Some(h);
        m.away_score = Some(a);
    }
    let decisive = results.iter().filter(|(h, a)| h != a).count() as u32;
    let drawn = results.iter().filter(|(h, a)| h == a).count() as u32;

    let rows = calculate_standings(&players, &matches).unwrap();
    let total: u32 = rows.iter().map(|r| r.points).sum();
    assert_eq!(total, 3 * decisive + 2 * drawn);
}

#[test]
fn goal_difference_equals_for_minus_against() {
    let players = roster(&["Alice", "Bob", "Carol"]);
    let mut matches = generate_fixture(&players, FixtureMode::Double);
    for (k, m) in matches.iter_mut().enumerate() {
        m.home_score = Some(k as u32);
        m.away_score = Some((k as u32 * 3) % 4);
    }
    let rows = calculate_standings(&players, &matches).unwrap();
    for r in &rows {
        assert_eq!(
            r.goal_difference,
            i64::from(r.goals_for) - i64::from(r.goals_against)
        );
    }
}

#[test]
fn table_sorted_by_points_then_goal_difference() {
    let players = roster(&["Alice", "Bob", "Carol", "Dave"]);
    let mut matches = generate_fixture(&players, FixtureMode::Single);
    // Carol and Dave finish level on points; Dave's goal difference is better.
    play(&mut matches, "Alice", "Bob", 1, 0);
    play(&mut matches, "Alice", "Carol", 0, 1);
    play(&mut matches, "Alice", "Dave", 0, 4);
    play(&mut matches, "Bob", "Carol", 2, 2);
    play(&mut matches, "Bob", "Dave", 1, 1);
    play(&mut matches, "Carol", "Dave", 3, 3);

    let rows = calculate_standings(&players, &matches).unwrap();
    for pair in rows.windows(2) {
        let higher = (pair[0].points, pair[0].goal_difference);
        let lower = (pair[1].points, pair[1].goal_difference);
        assert!(higher >= lower, "rows out of order: {pair:?}");
    }
    assert_eq!(rows[0].name, "Dave");
}

#[test]
fn idempotent_for_identical_inputs() {
    let players = roster(&["Alice", "Bob", "Carol"]);
    let mut matches = generate_fixture(&players, FixtureMode::Single);
    play(&mut matches, "Alice", "Bob", 2, 1);
    let first = calculate_standings(&players, &matches).unwrap();
    let second = calculate_standings(&players, &matches).unwrap();
    assert_eq!(first, second);
}

#[test]
fn stale_player_reference_is_an_explicit_error() {
    let players = roster(&["Alice", "Bob"]);
    let mut matches = generate_fixture(&players, FixtureMode::Single);
    play(&mut matches, "Alice", "Bob", 1, 0);

    // Bob leaves the roster after the fixture was generated.
    let remaining = roster(&["Alice"]);
    let err = calculate_standings(&remaining, &matches).unwrap_err();
    assert_eq!(err, LeagueError::UnknownPlayerReference("Bob".to_string()));
}

#[test]
fn unplayed_stale_matches_do_not_error() {
    // The stale reference only matters once the match is complete.
    let players = roster(&["Alice", "Bob"]);
    let matches = generate_fixture(&players, FixtureMode::Single);
    let remaining = roster(&["Alice"]);
    let rows = calculate_standings(&remaining, &matches).unwrap();
    assert_eq!(rows.len(), 1);
}
