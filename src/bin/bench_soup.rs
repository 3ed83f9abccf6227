use sparse_life::{Board, Cell};
use std::time::Instant;

const SIDE: u32 = 256;
const FILL_RATE: f64 = 0.3;
const SEED: u64 = 42;
const GENERATIONS: u64 = 1000;
const CHECK_INTERVAL: u64 = 100;

fn main() {
    env_logger::init();

    let timer = Instant::now();
    let mut board = Board::random(Cell::new(0, 0), SIDE, SIDE, FILL_RATE, Some(SEED));
    println!(
        "Time to build a {SIDE}x{SIDE} soup: {:?}, population = {}",
        timer.elapsed(),
        board.population()
    );

    let timer = Instant::now();
    let mut phase = Instant::now();
    for generation in 1..=GENERATIONS {
        board.update();
        if generation % CHECK_INTERVAL == 0 {
            let ms = phase.elapsed().as_secs_f64() * 1e3;
            println!(
                "Generation {generation}: population = {}, {:.3} ms/gen",
                board.population(),
                ms / CHECK_INTERVAL as f64
            );
            phase = Instant::now();
        }
    }
    println!("Time on {GENERATIONS} updates: {:?}", timer.elapsed());
}
