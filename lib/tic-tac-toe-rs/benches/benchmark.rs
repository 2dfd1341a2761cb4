use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
};
use std::time::Duration;
use tic_tac_toe::{
    Board,
    Minimax,
    Player,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("choose_move empty", |b| {
        b.iter(|| tic_tac_toe::choose_move(black_box(Board::new()), black_box(Player::One)))
    });

    c.bench_function("choose_move empty raw", |b| {
        let minimax = Minimax::new().depth_adjusted(false);
        b.iter(|| minimax.choose_move(black_box(Board::new()), black_box(Player::One)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
