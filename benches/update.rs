use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use sparse_life::{find_pattern, Board, Cell};

const SEED: u64 = 42;

fn bench_soup(c: &mut Criterion) {
    let soup = Board::random(Cell::new(0, 0), 128, 128, 0.3, Some(SEED));
    c.bench_function("update_soup_128", |b| {
        b.iter_batched(|| soup.clone(), |mut board| board.update(), BatchSize::SmallInput)
    });
}

fn bench_glider_gun(c: &mut Criterion) {
    let mut gun = Board::new();
    let cells = find_pattern("Gosper glider gun")
        .and_then(|p| p.cells().ok())
        .unwrap();
    gun.place(cells, Cell::new(0, 0));
    // let the gun emit a few gliders first
    gun.step(300);
    c.bench_function("update_glider_gun", |b| {
        b.iter_batched(|| gun.clone(), |mut board| board.update(), BatchSize::SmallInput)
    });
}

criterion_group!(benches, bench_soup, bench_glider_gun);
criterion_main!(benches);
