use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::query::{AttemptKind, DriveRow, GameScope, PlayQuery, Possession, StatsSource};

/// Run/pass mix per score-differential bucket.
///
/// The count maps cover every bucket that had at least one qualifying drive.
/// A bucket whose drives recorded no attempt of either kind keeps its zero
/// counts but is omitted from both percentage maps; a percentage is never
/// derived from a zero total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaycallBreakdown {
    pub passing: HashMap<i32, u32>,
    pub rushing: HashMap<i32, u32>,
    pub passing_pct: HashMap<i32, f64>,
    pub rushing_pct: HashMap<i32, f64>,
}

/// Classify a team's offensive drives by the score differential at the moment
/// each drive started, then tally the run/pass attempt mix inside every
/// bucket.
///
/// `scope` carries the caller's game filters (season, week, phase) and is
/// narrowed here to games the team actually played. Source failures propagate
/// unchanged.
pub fn rush_pass_breakdown<S: StatsSource>(
    source: &S,
    scope: &GameScope,
    team: &str,
) -> Result<PlaycallBreakdown> {
    let scope = scope.clone().involving_team(team);

    let drives: Vec<DriveRow> = source
        .drives(&scope)?
        .into_iter()
        .filter(|d| d.possession == team)
        .collect();

    // Group qualifying drives by the score differential when each one began.
    let mut buckets: HashMap<i32, Vec<DriveRow>> = HashMap::new();
    for drive in drives {
        let diff = start_differential(source, &drive, team)?;
        buckets.entry(diff).or_default().push(drive);
    }

    let mut out = PlaycallBreakdown::default();
    for (diff, bucket) in &buckets {
        let mut pass_att = 0u32;
        let mut rush_att = 0u32;
        for drive in bucket {
            pass_att += attempt_records(source, drive, AttemptKind::Pass)?;
            rush_att += attempt_records(source, drive, AttemptKind::Rush)?;
        }
        out.passing.insert(*diff, pass_att);
        out.rushing.insert(*diff, rush_att);

        let total = pass_att + rush_att;
        if total > 0 {
            out.passing_pct
                .insert(*diff, pass_att as f64 * 100.0 / total as f64);
            out.rushing_pct
                .insert(*diff, rush_att as f64 * 100.0 / total as f64);
        }
    }

    Ok(out)
}

/// Team score minus opponent score over everything that happened in the game
/// strictly before this drive.
fn start_differential<S: StatsSource>(source: &S, drive: &DriveRow, team: &str) -> Result<i32> {
    let team_score = points_before(source, drive, Possession::By(team.to_string()))?;
    let opp_score = points_before(source, drive, Possession::NotBy(team.to_string()))?;
    Ok(team_score - opp_score)
}

fn points_before<S: StatsSource>(
    source: &S,
    drive: &DriveRow,
    possession: Possession,
) -> Result<i32> {
    let query = PlayQuery {
        game_id: drive.game_id.clone(),
        drive_below: Some(drive.drive_number),
        possession: Some(possession),
        nonnegative_points: true,
        ..PlayQuery::default()
    };
    Ok(source.plays(&query)?.iter().map(|p| p.points).sum())
}

fn attempt_records<S: StatsSource>(
    source: &S,
    drive: &DriveRow,
    kind: AttemptKind,
) -> Result<u32> {
    let query = PlayQuery {
        game_id: drive.game_id.clone(),
        drive: Some(drive.drive_number),
        attempt: Some(kind),
        ..PlayQuery::default()
    };
    Ok(source.plays(&query)?.len() as u32)
}
