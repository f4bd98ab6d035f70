use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mancala::board::{Board, Side};
use mancala::rules::apply_move;
use mancala::search::Searcher;
use mancala::Pit;

/// Start position search, South to move
fn bench_initial_position(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("search_initial_position");

    for depth in 1..=7u8 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::new(Side::South);
            b.iter(|| black_box(searcher.search(black_box(&board), Side::South, depth)));
        });
    }

    group.finish();
}

/// Pruned search against exhaustive minimax on the same tree
fn bench_pruning_efficiency(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("pruning_efficiency");

    for depth in [3u8, 5] {
        group.bench_with_input(BenchmarkId::new("alpha_beta", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::new(Side::South);
            b.iter(|| black_box(searcher.search(black_box(&board), Side::South, depth)));
        });
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::new(Side::South);
            b.iter(|| black_box(searcher.minimax(black_box(board), Side::South, depth)));
        });
    }

    group.finish();
}

/// A few plies in, with seeds spread unevenly
fn bench_midgame(c: &mut Criterion) {
    let mut board = Board::new();
    for (side, label) in [
        (Side::South, 'C'),
        (Side::North, 'H'),
        (Side::South, 'F'),
        (Side::North, 'K'),
    ] {
        let pit = Pit::from_label(label).expect("valid label");
        apply_move(&mut board, side, pit).expect("legal opening move");
    }

    c.bench_function("midgame_depth6", |b| {
        let mut searcher = Searcher::new(Side::South);
        b.iter(|| black_box(searcher.search(black_box(&board), Side::South, 6)));
    });
}

criterion_group!(
    benches,
    bench_initial_position,
    bench_pruning_efficiency,
    bench_midgame
);
criterion_main!(benches);
