use super::params::*;
use criterion::{BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::prelude::*;
use hybrid_ssc::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A random graph in which arcs touching the first tenth of the vertices
/// always go forward, so that vertex 0 is a source.
fn random_graph(num_vertices: usize, num_arcs: usize) -> GraphInput<AdjacencyStore> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let cut = num_vertices / 10;
    let arcs = (0..num_arcs).map(|_| {
        let u = rng.random_range(0..num_vertices);
        let v = rng.random_range(0..num_vertices);
        if u.min(v) < cut {
            let tail = u.min(v);
            (tail, u.max(v).max(tail + 1))
        } else {
            (u, v)
        }
    });
    GraphInput::from_graph(AdjacencyStore::from_arcs(arcs.collect::<Vec<_>>()), no_logging![])
        .unwrap()
}

fn graph_name(num_vertices: usize, num_arcs: usize) -> String {
    format!("{}-{}", num_vertices, num_arcs)
}

pub fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single-source closure");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for (num_vertices, num_arcs) in BENCH_GRAPHS {
        let input = random_graph(num_vertices, num_arcs);
        let graph = input.graph();
        let sources = &input.sources()[..input.sources().len().min(100)];
        group.throughput(Throughput::Elements(sources.len() as u64));

        group.bench_function(
            BenchmarkId::new("SSC1", graph_name(num_vertices, num_arcs)),
            |b| {
                let ssc1 = Ssc1::new(graph, Thresholds::unlimited());
                b.iter(|| {
                    for &source in sources {
                        ssc1.compute(source).unwrap();
                    }
                })
            },
        );
        group.bench_function(
            BenchmarkId::new("SSC2", graph_name(num_vertices, num_arcs)),
            |b| {
                let mut ssc2 = Ssc2::new(graph);
                b.iter(|| {
                    for &source in sources {
                        ssc2.compute(source);
                    }
                })
            },
        );
    }
    group.finish();
}

pub fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("Worker pool");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for (num_vertices, num_arcs) in BENCH_GRAPHS {
        let input = random_graph(num_vertices, num_arcs);
        group.throughput(Throughput::Elements(input.sources().len() as u64));
        for threads in [1, 4] {
            let ssc = Ssc12Builder::new(&input)
                .with_threads(Threads::NumThreads(threads))
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(
                    format!("{} workers", threads),
                    graph_name(num_vertices, num_arcs),
                ),
                &ssc,
                |b, ssc| b.iter(|| ssc.run(no_logging![]).unwrap()),
            );
        }
    }
    group.finish();
}
