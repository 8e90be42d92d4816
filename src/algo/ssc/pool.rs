/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ClosureAggregator, CostFormula, Ssc1, Ssc2, Thresholds};
use crate::{algo::adjacency::Adjacency, error::SscError, utils::Threads};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use dsi_progress_logger::ProgressLog;
use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    time::{Duration, Instant},
};

/// An element of the work queue.
///
/// Each worker stops after receiving exactly one [`Stop`](WorkItem::Stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkItem {
    Vertex(usize),
    Stop,
}

/// The algorithm that produced a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    Ssc1,
    Ssc2,
}

/// The closure of a source vertex, as delivered on the result queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceClosure {
    pub source: usize,
    /// The id of the worker that computed the closure.
    pub worker: usize,
    pub engine: Engine,
    /// The closure, sorted.
    pub closure: Box<[usize]>,
}

/// What a worker did during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerSummary {
    pub id: usize,
    /// Number of source vertices processed.
    pub processed: usize,
    /// Number of closures computed by [`Ssc1`].
    pub by_ssc1: usize,
    /// Number of closures computed by [`Ssc2`].
    pub by_ssc2: usize,
    /// If the worker switched to [`Ssc2`], the number of vertices it had
    /// completed before switching.
    pub switched_after: Option<usize>,
    /// Whether the worker stopped because it received a
    /// [`Stop`](WorkItem::Stop).
    pub stopped_by_sentinel: bool,
}

enum Mode<'a, G: ?Sized> {
    Ssc1,
    /// Absorbing: the buffers are allocated on entry and reused for every
    /// following vertex.
    Ssc2(Ssc2<'a, G>),
}

/// A worker of the [`WorkerPool`].
///
/// A worker starts computing closures with [`Ssc1`]. The first time
/// [`Ssc1`] gives up on a vertex, the worker allocates the buffers of an
/// [`Ssc2`], computes the closure of that vertex with it, and then uses
/// [`Ssc2`] for all following vertices.
pub struct Worker<'a, G: ?Sized> {
    graph: &'a G,
    ssc1: Ssc1<'a, G>,
    mode: Mode<'a, G>,
    summary: WorkerSummary,
}

impl<'a, G: Adjacency + ?Sized> Worker<'a, G> {
    pub fn new(id: usize, graph: &'a G, thresholds: Thresholds, cost_formula: CostFormula) -> Self {
        Self {
            graph,
            ssc1: Ssc1::new(graph, thresholds).with_cost_formula(cost_formula),
            mode: Mode::Ssc1,
            summary: WorkerSummary {
                id,
                ..Default::default()
            },
        }
    }

    /// Returns the algorithm that will be tried first on the next vertex.
    pub fn mode(&self) -> Engine {
        match self.mode {
            Mode::Ssc1 => Engine::Ssc1,
            Mode::Ssc2(_) => Engine::Ssc2,
        }
    }

    /// Computes the closure of `source`, switching algorithm if needed.
    pub fn process(&mut self, source: usize) -> (Engine, Box<[usize]>) {
        let (engine, closure) = match self.mode {
            Mode::Ssc1 => match self.ssc1.compute(source) {
                Ok(closure) => (Engine::Ssc1, closure),
                Err(violation) => {
                    log::debug!(
                        "Worker {}: thresholds violated on source {} at step {} with small-delta cost {} and big-delta cost {}",
                        self.summary.id,
                        violation.source,
                        violation.step,
                        violation.cost.small_delta,
                        violation.cost.big_delta,
                    );
                    log::info!(
                        "Worker {} switched to SSC2 after {} closures",
                        self.summary.id,
                        self.summary.processed
                    );
                    self.summary.switched_after = Some(self.summary.processed);
                    let mut ssc2 = Ssc2::new(self.graph);
                    let closure = ssc2.compute(source);
                    self.mode = Mode::Ssc2(ssc2);
                    (Engine::Ssc2, closure)
                }
            },
            Mode::Ssc2(ref mut ssc2) => (Engine::Ssc2, ssc2.compute(source)),
        };

        self.summary.processed += 1;
        match engine {
            Engine::Ssc1 => self.summary.by_ssc1 += 1,
            Engine::Ssc2 => self.summary.by_ssc2 += 1,
        }
        (engine, closure)
    }

    pub fn summary(&self) -> &WorkerSummary {
        &self.summary
    }

    /// Processes work items until a [`Stop`](WorkItem::Stop) is received,
    /// sending each closure on `results`.
    ///
    /// The loop also ends if the work queue is disconnected and empty, or if
    /// nobody is listening for results anymore; in both cases the summary
    /// will report that the worker did not stop on a sentinel.
    pub fn run(mut self, work: Receiver<WorkItem>, results: Sender<SourceClosure>) -> WorkerSummary {
        loop {
            match work.recv() {
                Ok(WorkItem::Vertex(source)) => {
                    let (engine, closure) = self.process(source);
                    let result = SourceClosure {
                        source,
                        worker: self.summary.id,
                        engine,
                        closure,
                    };
                    if results.send(result).is_err() {
                        log::warn!("Worker {}: result queue closed", self.summary.id);
                        break;
                    }
                }
                Ok(WorkItem::Stop) => {
                    self.summary.stopped_by_sentinel = true;
                    break;
                }
                Err(_) => {
                    log::warn!(
                        "Worker {}: work queue closed without a stop marker",
                        self.summary.id
                    );
                    break;
                }
            }
        }
        self.summary
    }
}

/// The result of a [`WorkerPool::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureReport {
    /// The union of the closures of all sources, sorted.
    pub closure: Box<[usize]>,
    /// Wall-clock time of the run, including queue setup.
    pub elapsed: Duration,
    /// One summary per worker, sorted by id.
    pub workers: Vec<WorkerSummary>,
}

impl ClosureReport {
    /// Returns the number of vertices in the aggregate closure.
    pub fn len(&self) -> usize {
        self.closure.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closure.is_empty()
    }

    pub fn ssc1_closures(&self) -> usize {
        self.workers.iter().map(|w| w.by_ssc1).sum()
    }

    pub fn ssc2_closures(&self) -> usize {
        self.workers.iter().map(|w| w.by_ssc2).sum()
    }

    /// Returns the number of workers that switched to [`Ssc2`].
    pub fn switched_workers(&self) -> usize {
        self.workers
            .iter()
            .filter(|w| w.switched_after.is_some())
            .count()
    }
}

/// A pool of workers computing the union of the closures of a set of
/// sources.
///
/// All sources, followed by one [`Stop`](WorkItem::Stop) per worker, are
/// placed on a bounded work queue before any worker is started. Then each
/// worker runs on its own thread of a dedicated [`rayon::ThreadPool`],
/// pulling vertices and pushing their closures on a result queue, while the
/// calling thread drains the result queue into a [`ClosureAggregator`].
///
/// The graph is shared by all workers and never modified; each worker owns
/// its [`Ssc2`] buffers.
pub struct WorkerPool<'a, G: ?Sized> {
    graph: &'a G,
    thresholds: Thresholds,
    cost_formula: CostFormula,
    queue_capacity: Option<usize>,
}

impl<'a, G: Adjacency + Sync + ?Sized> WorkerPool<'a, G> {
    pub fn new(graph: &'a G, thresholds: Thresholds) -> Self {
        Self {
            graph,
            thresholds,
            cost_formula: CostFormula::default(),
            queue_capacity: None,
        }
    }

    /// Sets the formula used by [`Ssc1`] to estimate the cost of a step.
    pub fn with_cost_formula(mut self, cost_formula: CostFormula) -> Self {
        self.cost_formula = cost_formula;
        self
    }

    /// Sets the capacity of the work queue.
    ///
    /// If [`None`], the default, the queue can hold all sources and all stop
    /// markers. A smaller capacity makes [`run`](WorkerPool::run) fail with
    /// [`SscError::WorkQueueExhausted`].
    pub fn with_queue_capacity(mut self, queue_capacity: Option<usize>) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Computes the union of the closures of `sources` using `num_workers`
    /// parallel workers.
    ///
    /// The number of workers is clamped between one and the number of
    /// sources. Each source must appear once.
    ///
    /// Fails with [`SscError::InvalidSource`] if a source is not a vertex of
    /// the graph, and with [`SscError::WorkerDisconnected`] if a worker
    /// panics.
    pub fn run(
        &self,
        sources: &[usize],
        num_workers: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<ClosureReport, SscError> {
        let start = Instant::now();
        if sources.is_empty() {
            return Err(SscError::ZeroSourceVertices);
        }
        let num_vertices = self.graph.num_vertices();
        if let Some(&vertex) = sources.iter().find(|&&vertex| vertex >= num_vertices) {
            return Err(SscError::InvalidSource {
                vertex,
                num_vertices,
            });
        }
        let num_workers = num_workers.clamp(1, sources.len());
        let capacity = self
            .queue_capacity
            .unwrap_or(sources.len() + num_workers);

        let (work_tx, work_rx) = bounded(capacity);
        enqueue(&work_tx, sources, num_workers, capacity)?;
        drop(work_tx);

        pl.info(format_args!(
            "Computing closures of {} sources with {} workers and thresholds alpha = {}, beta = {}",
            sources.len(),
            num_workers,
            self.thresholds.alpha_threshold(),
            self.thresholds.beta_threshold(),
        ));

        let threads = Threads::build(num_workers)?;
        let (result_tx, result_rx) = bounded(num_workers);
        let (summary_tx, summary_rx) = unbounded();
        let mut aggregator = ClosureAggregator::new(num_vertices, sources.len());

        let graph = self.graph;
        let thresholds = self.thresholds;
        let cost_formula = self.cost_formula;

        let drained = threads.in_place_scope(|scope| {
            for id in 0..num_workers {
                let worker = Worker::new(id, graph, thresholds, cost_formula);
                let work = work_rx.clone();
                let results = result_tx.clone();
                let summaries = summary_tx.clone();
                scope.spawn(move |_| {
                    // On panic the result sender is dropped, so the
                    // coordinator sees a disconnection instead of the panic
                    match catch_unwind(AssertUnwindSafe(|| worker.run(work, results))) {
                        // The receiver outlives the scope
                        Ok(summary) => {
                            let _ = summaries.send(summary);
                        }
                        Err(_) => log::error!("Worker {} panicked", id),
                    }
                });
            }
            // Only workers may keep the result queue alive
            drop(result_tx);
            aggregator.drain(&result_rx, pl)
        });
        drained?;

        let mut workers = summary_rx.try_iter().collect::<Vec<_>>();
        workers.sort_by_key(|summary| summary.id);

        Ok(ClosureReport {
            closure: aggregator.into_sorted(),
            elapsed: start.elapsed(),
            workers,
        })
    }
}

/// Enqueues all sources followed by `num_workers` stop markers, without
/// blocking.
fn enqueue(
    work: &Sender<WorkItem>,
    sources: &[usize],
    num_workers: usize,
    capacity: usize,
) -> Result<(), SscError> {
    let total = sources.len() + num_workers;
    let items = sources
        .iter()
        .map(|&vertex| WorkItem::Vertex(vertex))
        .chain(std::iter::repeat(WorkItem::Stop).take(num_workers));

    for (enqueued, item) in items.enumerate() {
        work.try_send(item)
            .map_err(|_| SscError::WorkQueueExhausted {
                enqueued,
                total,
                capacity,
            })?;
    }
    Ok(())
}
