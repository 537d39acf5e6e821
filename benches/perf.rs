use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use playcall_mix::breakdown::rush_pass_breakdown;
use playcall_mix::memory::{GameRecord, MemorySource, PlayRecord};
use playcall_mix::query::{GameScope, SeasonPhase};
use playcall_mix::threshold::{attempt_floor, percentile};

/// A deterministic 17-game season for one team, alternating possessions with
/// a scoring play sprinkled into every third drive.
fn seeded_season() -> MemorySource {
    let mut src = MemorySource::default();
    for week in 1u8..=17 {
        let id = format!("2025-w{week:02}");
        let (home, away) = if week % 2 == 0 {
            ("DEN".to_string(), "KC".to_string())
        } else {
            ("KC".to_string(), "DEN".to_string())
        };
        src.push_game(GameRecord {
            id: id.clone(),
            home,
            away,
            season: 2025,
            week,
            phase: SeasonPhase::Regular,
        });

        for drive in 1u32..=20 {
            let possession = if drive % 2 == 0 { "DEN" } else { "KC" };
            src.push_drive(&id, drive, possession);
            for snap in 0u32..6 {
                let points = if drive % 3 == 0 && snap == 5 { 7 } else { 0 };
                src.push_play(PlayRecord {
                    game_id: id.clone(),
                    drive_number: drive,
                    points,
                    pass_attempts: u32::from((snap + drive) % 2 == 0),
                    rush_attempts: u32::from((snap + drive) % 2 == 1),
                });
            }
        }
    }
    src
}

fn bench_breakdown(c: &mut Criterion) {
    let source = seeded_season();
    let scope = GameScope::default();
    c.bench_function("rush_pass_breakdown_season", |b| {
        b.iter(|| {
            let out = rush_pass_breakdown(black_box(&source), &scope, "DEN").unwrap();
            black_box(out.passing.len());
        })
    });
}

fn bench_attempt_floor(c: &mut Criterion) {
    let source = seeded_season();
    let out = rush_pass_breakdown(&source, &GameScope::default(), "DEN").unwrap();
    c.bench_function("attempt_floor", |b| {
        b.iter(|| {
            let floor = attempt_floor(black_box(&out.passing), black_box(&out.rushing)).unwrap();
            black_box(floor);
        })
    });
}

fn bench_percentile(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| ((i * 7919) % 10_000) as f64).collect();
    c.bench_function("percentile_10k", |b| {
        b.iter(|| black_box(percentile(black_box(&values), 10.0)))
    });
}

criterion_group!(
    benches,
    bench_breakdown,
    bench_attempt_floor,
    bench_percentile
);
criterion_main!(benches);
