//! Match, MatchId, Leg, and FixtureMode for round-robin play.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which meeting of a pair this match is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Leg {
    /// Only meeting (single round-robin).
    Single,
    /// First leg of a double round-robin (lower roster index at home).
    Ida,
    /// Return leg (higher roster index at home).
    Vuelta,
}

impl Leg {
    pub fn as_str(self) -> &'static str {
        match self {
            Leg::Single => "single",
            Leg::Ida => "ida",
            Leg::Vuelta => "vuelta",
        }
    }
}

/// How the fixture is generated: each pair meets once, or home-and-away.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureMode {
    #[default]
    Single,
    Double,
}

/// Identity of a match within a fixture: the pair of roster indices
/// (lower first) plus the leg. Depends only on roster order and mode, so
/// regenerating the same fixture yields the same ids. Persisted as the
/// string `"i-j-leg"`; the tagged form is used everywhere else so leg
/// classification never re-parses the string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MatchId {
    pub pair: (usize, usize),
    pub leg: Leg,
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.pair.0, self.pair.1, self.leg.as_str())
    }
}

impl FromStr for MatchId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(i), Some(j), Some(leg)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid match id '{}'", s));
        };
        let i: usize = i.parse().map_err(|_| format!("Invalid match id '{}'", s))?;
        let j: usize = j.parse().map_err(|_| format!("Invalid match id '{}'", s))?;
        let leg = match leg {
            "single" => Leg::Single,
            "ida" => Leg::Ida,
            "vuelta" => Leg::Vuelta,
            _ => return Err(format!("Invalid match id '{}'", s)),
        };
        Ok(MatchId { pair: (i, j), leg })
    }
}

impl From<MatchId> for String {
    fn from(id: MatchId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MatchId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A fixture entry: embedded player copies plus optional scores.
/// `None` means "not yet played"; the match counts toward standings only
/// when both scores are set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub home_player: Player,
    pub away_player: Player,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Match {
    pub fn new(id: MatchId, home_player: Player, away_player: Player) -> Self {
        Self {
            id,
            home_player,
            away_player,
            home_score: None,
            away_score: None,
        }
    }

    /// Complete iff both scores are recorded.
    pub fn is_complete(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}
