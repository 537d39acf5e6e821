use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::query::{
    AttemptKind, DriveRow, GameScope, PlayQuery, PlayRow, SeasonPhase, StatsSource,
};

/// A game row held by [`MemorySource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub home: String,
    pub away: String,
    pub season: u16,
    pub week: u8,
    pub phase: SeasonPhase,
}

/// A play row held by [`MemorySource`]. Attempt counts are per-player record
/// counts: one play can carry zero or several of either kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRecord {
    pub game_id: String,
    pub drive_number: u32,
    pub points: i32,
    pub pass_attempts: u32,
    pub rush_attempts: u32,
}

/// In-memory [`StatsSource`] for tests, benches, and self-contained callers.
/// Holds flat game/drive/play tables and answers the fixed query shapes the
/// crate issues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySource {
    games: Vec<GameRecord>,
    drives: Vec<DriveRow>,
    plays: Vec<PlayRecord>,
}

impl MemorySource {
    pub fn push_game(&mut self, game: GameRecord) {
        self.games.push(game);
    }

    pub fn push_drive(&mut self, game_id: &str, drive_number: u32, possession: &str) {
        self.drives.push(DriveRow {
            game_id: game_id.to_string(),
            drive_number,
            possession: possession.to_string(),
        });
    }

    pub fn push_play(&mut self, play: PlayRecord) {
        self.plays.push(play);
    }

    fn game(&self, id: &str) -> Result<&GameRecord> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or_else(|| anyhow!("unknown game id {id}"))
    }

    fn drive_possession(&self, game_id: &str, drive_number: u32) -> Option<&str> {
        self.drives
            .iter()
            .find(|d| d.game_id == game_id && d.drive_number == drive_number)
            .map(|d| d.possession.as_str())
    }
}

fn game_matches(game: &GameRecord, scope: &GameScope) -> bool {
    if scope.season.is_some_and(|s| s != game.season) {
        return false;
    }
    if scope.week.is_some_and(|w| w != game.week) {
        return false;
    }
    if scope.phase.is_some_and(|p| p != game.phase) {
        return false;
    }
    if let Some(team) = &scope.involving
        && game.home != *team
        && game.away != *team
    {
        return false;
    }
    true
}

impl StatsSource for MemorySource {
    fn drives(&self, scope: &GameScope) -> Result<Vec<DriveRow>> {
        let mut out = Vec::new();
        for drive in &self.drives {
            let game = self.game(&drive.game_id)?;
            if game_matches(game, scope) {
                out.push(drive.clone());
            }
        }
        Ok(out)
    }

    fn plays(&self, query: &PlayQuery) -> Result<Vec<PlayRow>> {
        self.game(&query.game_id)?;

        let mut out = Vec::new();
        for play in self.plays.iter().filter(|p| p.game_id == query.game_id) {
            if query.drive_below.is_some_and(|n| play.drive_number >= n) {
                continue;
            }
            if query.drive.is_some_and(|n| play.drive_number != n) {
                continue;
            }
            if let Some(possession) = &query.possession {
                let Some(team) = self.drive_possession(&play.game_id, play.drive_number) else {
                    continue;
                };
                if !possession.matches(team) {
                    continue;
                }
            }
            if query.nonnegative_points && play.points < 0 {
                continue;
            }
            match query.attempt {
                // One row per flagged per-player attempt record.
                Some(AttemptKind::Pass) => {
                    out.extend((0..play.pass_attempts).map(|_| PlayRow { points: play.points }));
                }
                Some(AttemptKind::Rush) => {
                    out.extend((0..play.rush_attempts).map(|_| PlayRow { points: play.points }));
                }
                None => out.push(PlayRow { points: play.points }),
            }
        }
        Ok(out)
    }
}
