//! Standings computation over completed matches.

use crate::models::{LeagueError, Match, Player, StandingsRow};
use std::collections::HashMap;

const WIN_POINTS: u32 = 3;
const DRAW_POINTS: u32 = 1;

/// Compute the standings table from the roster and the fixture.
///
/// Rows start at zero in roster order. Every complete match adds its goals
/// to both sides and awards 3 points to the strictly higher scorer, or 1
/// point each on a draw; incomplete matches contribute nothing. A match
/// naming a player missing from the roster fails the whole computation
/// with `UnknownPlayerReference` rather than dropping its goals.
///
/// The table is sorted by points, then goal difference, both descending.
/// Rows tied on both keep their relative roster order (stable sort), but
/// callers must not depend on tie order beyond those two keys.
pub fn calculate_standings(
    players: &[Player],
    matches: &[Match],
) -> Result<Vec<StandingsRow>, LeagueError> {
    let mut rows: Vec<StandingsRow> = players.iter().map(StandingsRow::zero).collect();
    let index: HashMap<&str, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name.as_str(), i))
        .collect();

    for m in matches {
        let (Some(home_score), Some(away_score)) = (m.home_score, m.away_score) else {
            continue;
        };
        let home = lookup(&index, &m.home_player.name)?;
        let away = lookup(&index, &m.away_player.name)?;

        add_goals(&mut rows[home], home_score, away_score);
        add_goals(&mut rows[away], away_score, home_score);

        if home_score > away_score {
            rows[home].points += WIN_POINTS;
        } else if away_score > home_score {
            rows[away].points += WIN_POINTS;
        } else {
            rows[home].points += DRAW_POINTS;
            rows[away].points += DRAW_POINTS;
        }
    }

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
    });
    Ok(rows)
}

fn add_goals(row: &mut StandingsRow, scored: u32, conceded: u32) {
    row.goals_for += scored;
    row.goals_against += conceded;
    row.goal_difference = i64::from(row.goals_for) - i64::from(row.goals_against);
}

/// Explicit lookup instead of indexing by name, so a miss becomes a
/// reported error rather than a panic.
fn lookup(index: &HashMap<&str, usize>, name: &str) -> Result<usize, LeagueError> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| LeagueError::UnknownPlayerReference(name.to_string()))
}
