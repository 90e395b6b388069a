//! Round-robin league web app: library with models, pure logic, and the
//! persistence gateway.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{calculate_standings, generate_fixture, MIN_PLAYERS};
pub use models::{
    FixtureMode, LeagueError, Leg, Match, MatchId, Player, StandingsRow, DEFAULT_IMAGE_URL,
};
pub use store::{
    load_matches, load_players, save_matches, save_players, FileStore, KeyValueStore, MemoryStore,
    MATCHES_KEY, PLAYERS_KEY,
};
