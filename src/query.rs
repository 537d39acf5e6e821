use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Phase of the season a game belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonPhase {
    Preseason,
    Regular,
    Postseason,
}

/// Caller-supplied restriction over games. Every populated field must hold
/// (logical AND); `involving` matches games where the named team played at
/// home *or* away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScope {
    pub season: Option<u16>,
    pub week: Option<u8>,
    pub phase: Option<SeasonPhase>,
    pub involving: Option<String>,
}

impl GameScope {
    pub fn involving_team(mut self, team: &str) -> Self {
        self.involving = Some(team.to_string());
        self
    }
}

/// Drive possession filter: either exactly this team, or any other team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Possession {
    By(String),
    NotBy(String),
}

impl Possession {
    pub fn matches(&self, team: &str) -> bool {
        match self {
            Possession::By(t) => t == team,
            Possession::NotBy(t) => t != team,
        }
    }
}

/// Per-player attempt marker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptKind {
    Pass,
    Rush,
}

/// Typed play filter over a single game. Populated fields AND together.
///
/// With `attempt` set, a source returns one row per flagged per-player
/// attempt record, so the row count is the attempt count. A play can carry
/// zero or several such records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayQuery {
    pub game_id: String,
    /// Keep plays whose drive number is strictly below this one.
    pub drive_below: Option<u32>,
    /// Keep plays belonging to exactly this drive.
    pub drive: Option<u32>,
    pub possession: Option<Possession>,
    /// Keep plays whose recorded points are non-negative.
    pub nonnegative_points: bool,
    pub attempt: Option<AttemptKind>,
}

/// One drive as materialized by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveRow {
    pub game_id: String,
    pub drive_number: u32,
    pub possession: String,
}

/// One play (or per-player attempt record) as materialized by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRow {
    pub points: i32,
}

/// Read-only statistics source. Implementations own storage and query
/// execution; this crate only issues the fixed filter shapes above and
/// propagates implementation failures unchanged.
pub trait StatsSource {
    fn drives(&self, scope: &GameScope) -> Result<Vec<DriveRow>>;
    fn plays(&self, query: &PlayQuery) -> Result<Vec<PlayRow>>;
}
