/// Number of vertices and arcs of the random graphs.
pub const BENCH_GRAPHS: [(usize, usize); 3] = [
    (10_000, 30_000),
    (100_000, 300_000),
    (100_000, 1_000_000),
];
pub const NUM_SAMPLES: usize = 10;
pub const SEED: u64 = 0;
