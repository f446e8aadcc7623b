//! Generate a random maze and tick the search to completion.

use pathtick_core::Config;
use pathtick_search::{Status, StepSearch};

fn main() {
    let config = Config {
        columns: 20,
        rows: 12,
        obstacle_probability: 0.3,
        ..Config::default()
    };
    let mut search = StepSearch::generate(&config, &mut rand::rng()).expect("default-ish config");

    let mut ticks = 0usize;
    while search.status() == Status::Running {
        search.step().expect("search is running");
        ticks += 1;
    }

    println!(
        "{:?} after {ticks} ticks ({} -> {})",
        search.status(),
        search.grid().start(),
        search.grid().end()
    );
    if search.status() == Status::Found {
        let mut route = search.reconstruct_path();
        route.reverse();
        let cells: Vec<String> = route.iter().map(|p| p.to_string()).collect();
        println!("{}", cells.join(" -> "));
    }
}
