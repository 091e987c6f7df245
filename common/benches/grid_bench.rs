use criterion::{criterion_group, criterion_main, Criterion};
use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, Game, Grid, Player};
use common::save::{load_game_from_str, save_game_to_string};

fn play_random_game(session_rng: &mut SessionRng) -> Game {
    let mut game = Game::with_first_player("Ann", "Bob", FirstPlayerMode::Random, session_rng)
        .expect("valid players");

    while !game.is_game_over() {
        let moves = game.grid().available_moves();
        let (x, y) = moves[session_rng.random_range(0..moves.len())];
        game.apply_move(x, y).expect("available cell");
    }
    game
}

fn bench_random_games() {
    let mut session_rng = SessionRng::new(42);
    for _ in 0..100 {
        play_random_game(&mut session_rng);
    }
}

fn bench_fill_grid() {
    let ann = Player::new("Ann", 'X').expect("valid player");
    let bob = Player::new("Bob", 'O').expect("valid player");
    let mut grid = Grid::new();
    let order = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
    for (index, (x, y)) in order.into_iter().enumerate() {
        let player = if index % 2 == 0 { &ann } else { &bob };
        grid.place_move(player, x, y).expect("empty cell");
    }
}

fn grid_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    group.bench_function("100_random_games", |b| b.iter(bench_random_games));

    group.bench_function("fill_grid_to_draw", |b| b.iter(bench_fill_grid));

    let finished = play_random_game(&mut SessionRng::new(7));
    group.bench_function("save_load_round_trip", |b| {
        b.iter(|| {
            let content = save_game_to_string(&finished).expect("serialize");
            load_game_from_str(&content).expect("round trip")
        })
    });

    group.finish();
}

criterion_group!(benches, grid_bench);
criterion_main!(benches);
