//! Derived standings table row.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// A player's aggregated record over completed matches. Recomputed from
/// scratch on every evaluation, never persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub name: String,
    pub image_url: String,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
}

impl StandingsRow {
    /// Zero-valued row for a player with no completed matches.
    pub fn zero(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            image_url: player.image_url.clone(),
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }
}
