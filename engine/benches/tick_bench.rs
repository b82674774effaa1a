use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use snake_engine::{CellMarker, Direction, GameSettings, NullSink, SessionRng, SnakeGame, TickOutcome};

const MAX_TICKS: u32 = 20_000;

fn greedy_direction(game: &SnakeGame) -> Direction {
    let head = game.head_position();
    let Some(food) = game.food_position() else {
        return game.heading();
    };

    Direction::ALL
        .into_iter()
        .filter(|d| !d.is_opposite(&game.heading()))
        .filter(|&d| game.grid().is_in_bounds(head.x, head.y, d))
        .filter(|&d| game.grid().status_at(head.neighbour(d)) != CellMarker::Occupied)
        .min_by_key(|&d| head.neighbour(d).manhattan_distance(&food))
        .unwrap_or(game.heading())
}

fn play_greedy_game(seed: u64, grid_side: usize) -> u32 {
    let settings = GameSettings {
        grid_width: grid_side,
        grid_height: grid_side,
        ..GameSettings::default()
    };
    let mut game = SnakeGame::new(&settings, SessionRng::new(seed)).unwrap();
    let mut sink = NullSink;

    for _ in 0..MAX_TICKS {
        game.set_heading(greedy_direction(&game));
        match game.tick(&mut sink) {
            Ok(TickOutcome::Advanced { .. }) => {}
            Ok(TickOutcome::Terminated(_)) | Err(_) => break,
        }
    }
    game.score()
}

fn bench_full_games(c: &mut Criterion) {
    c.bench_function("greedy_game_20x20", |b| {
        b.iter(|| play_greedy_game(black_box(42), 20))
    });
    c.bench_function("greedy_game_100x100", |b| {
        b.iter(|| play_greedy_game(black_box(42), 100))
    });
}

criterion_group!(benches, bench_full_games);
criterion_main!(benches);
