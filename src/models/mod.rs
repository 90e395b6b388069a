//! Data structures for the league: players, matches, standings.

mod game;
mod league;
mod player;
mod standings;

pub use game::{FixtureMode, Leg, Match, MatchId};
pub use league::LeagueError;
pub use player::{Player, DEFAULT_IMAGE_URL};
pub use standings::StandingsRow;
