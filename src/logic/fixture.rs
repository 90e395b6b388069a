//! Fixture generation: single and double round-robin.

use crate::models::{FixtureMode, Leg, Match, MatchId, Player};

/// Players required for a non-empty fixture. Fewer than this is reported
/// by the calling boundary as `InsufficientPlayers`; the generator itself
/// just produces an empty fixture.
pub const MIN_PLAYERS: usize = 2;

/// Generate the full round-robin fixture for `players` in roster order.
///
/// Single mode emits one match per unordered pair {i, j} with i < j, the
/// lower index at home: N·(N−1)/2 matches. Double mode emits two per
/// pair, leg "ida" (i home) immediately followed by leg "vuelta" (j home):
/// N·(N−1) matches. All matches start with both scores unset. Ids depend
/// only on (i, j, leg), so regenerating with the same roster order and
/// mode yields identical ids.
pub fn generate_fixture(players: &[Player], mode: FixtureMode) -> Vec<Match> {
    let mut matches = Vec::new();
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            match mode {
                FixtureMode::Single => {
                    matches.push(Match::new(
                        MatchId { pair: (i, j), leg: Leg::Single },
                        players[i].clone(),
                        players[j].clone(),
                    ));
                }
                FixtureMode::Double => {
                    matches.push(Match::new(
                        MatchId { pair: (i, j), leg: Leg::Ida },
                        players[i].clone(),
                        players[j].clone(),
                    ));
                    matches.push(Match::new(
                        MatchId { pair: (i, j), leg: Leg::Vuelta },
                        players[j].clone(),
                        players[i].clone(),
                    ));
                }
            }
        }
    }
    matches
}
