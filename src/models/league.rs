//! Errors that can occur during league operations.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// Fixture generation requested with fewer than 2 players.
    InsufficientPlayers { found: usize },
    /// A match names a player with no roster row (stale fixture after a
    /// roster edit); the standings computation fails instead of silently
    /// dropping the match's goals.
    UnknownPlayerReference(String),
}

impl std::fmt::Display for LeagueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeagueError::InsufficientPlayers { found } => {
                write!(f, "Need at least 2 players to generate a fixture (have {})", found)
            }
            LeagueError::UnknownPlayerReference(name) => {
                write!(f, "Match references unknown player '{}'; regenerate the fixture", name)
            }
        }
    }
}
