//! Multi-threaded breadth-first exploration of the component graph
//!
//! Workers share three locks: the file queue, the signature table and the
//! graph output. Everything else (analyzer buffers, rebuilt states) is owned
//! by the worker that uses it.

use crate::explorer::graph::GraphWriter;
use crate::explorer::queue::{FileQueue, QueueElement};
use crate::explorer::table::SignatureTable;
use crate::feasibility::analyzer::FeasibilityAnalyzer;
use crate::feasibility::signature::Signature;
use crate::io::configuration::{IDLE_ROUNDS, IDLE_WAIT};
use crate::io::error::{DecyclingError, Result};
use crate::io::progress::ExplorationProgress;
use crate::state::decycling::{DecyclingState, MoveList};
use crate::word::alphabet::{Alphabet, Word};
use parking_lot::Mutex;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Worker pool settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Number of worker threads (at least one is always started)
    pub threads: usize,
    /// Pause between two looks at an empty queue
    pub idle_wait: Duration,
    /// Consecutive idle looks before a worker exits
    pub idle_rounds: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            threads: 1,
            idle_wait: IDLE_WAIT,
            idle_rounds: IDLE_ROUNDS,
        }
    }
}

impl ExplorerConfig {
    /// Default settings with `threads` workers, `0` meaning one per core
    pub fn with_threads(threads: usize) -> Self {
        let threads = if threads == 0 {
            thread::available_parallelism().map_or(1, std::num::NonZero::get)
        } else {
            threads
        };
        Self {
            threads,
            ..Self::default()
        }
    }
}

/// Validated starting component
#[derive(Clone, Debug)]
pub struct SeedComponent {
    /// State built from the starting word list
    pub state: DecyclingState,
    /// Its applicable-move list
    pub moves: MoveList,
    /// Its I-move signature
    pub signature: Signature,
}

/// Outcome of a complete exploration
#[derive(Debug)]
pub struct ExplorationReport<W> {
    /// Signature of every node, indexed by node id
    pub signatures: Vec<Signature>,
    /// Number of edges written
    pub edges: u64,
    /// Number of components expanded
    pub expansions: u64,
    /// Graph sink, footer written and flushed
    pub graph: W,
}

impl<W> ExplorationReport<W> {
    /// Number of distinct components reached
    pub fn node_count(&self) -> usize {
        self.signatures.len()
    }
}

/// Breadth-first explorer of the components reachable from one MDS
#[derive(Clone, Copy, Debug)]
pub struct ComponentExplorer {
    alphabet: Alphabet,
    config: ExplorerConfig,
}

impl ComponentExplorer {
    /// Explorer for one alphabet
    pub const fn new(alphabet: Alphabet, config: ExplorerConfig) -> Self {
        Self { alphabet, config }
    }

    /// Alphabet being explored
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Validate the starting words and derive move list and signature
    ///
    /// Nothing is written anywhere; a failure here leaves no output behind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCandidate` if the words are not one per rotation orbit
    /// and `IncompleteDecyclingSet` if they do not break every cycle
    pub fn seed(&self, start: &[Word]) -> Result<SeedComponent> {
        let state = DecyclingState::from_candidate(self.alphabet, start)?;
        let moves = state.compute_move_list()?;
        let signature = FeasibilityAnalyzer::new(self.alphabet).signature(&state);
        info!(
            words = start.len(),
            imoves = signature.len(),
            "starting set is a minimal decycling set"
        );
        Ok(SeedComponent {
            state,
            moves,
            signature,
        })
    }

    /// Explore every component reachable from `seed`
    ///
    /// The queue log at `queue_path` is truncated first. Each traversed edge
    /// is written to `graph` as soon as it is found.
    ///
    /// # Errors
    ///
    /// Returns the first error of any worker: file system failures on the
    /// queue, `CorruptQueueRecord`, or `GraphOutput`
    ///
    /// # Panics
    ///
    /// Re-raises the panic of a worker that hit a broken invariant
    pub fn explore<W: Write + Send>(
        &self,
        seed: SeedComponent,
        queue_path: &Path,
        graph: W,
        progress: &ExplorationProgress,
    ) -> Result<ExplorationReport<W>> {
        let mut queue = FileQueue::create(queue_path, self.alphabet)?;
        let graph = GraphWriter::begin(graph)?;
        let table = SignatureTable::new();

        let (id, _) = table.insert_or_lookup(&seed.signature);
        queue.enqueue(&QueueElement {
            id,
            moves: seed.moves,
            signature: seed.signature,
        })?;
        progress.discovered();

        let pool = WorkerPool {
            alphabet: self.alphabet,
            config: self.config,
            queue: Mutex::new(queue),
            table,
            graph,
            progress,
            in_flight: AtomicUsize::new(0),
            failed: AtomicBool::new(false),
            edges: AtomicU64::new(0),
            expansions: AtomicU64::new(0),
        };

        let threads = self.config.threads.max(1);
        info!(threads, alphabet = %self.alphabet, "exploring component graph");
        thread::scope(|scope| {
            let pool = &pool;
            let handles: Vec<_> = (0..threads)
                .map(|worker| scope.spawn(move || pool.run_worker(worker)))
                .collect();

            let mut first_error = None;
            for handle in handles {
                match handle.join() {
                    Ok(Ok(())) => {}
                    Ok(Err(error)) => {
                        if first_error.is_none() {
                            first_error = Some(error);
                        }
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            first_error.map_or(Ok(()), Err)
        })?;

        let WorkerPool {
            table,
            graph,
            edges,
            expansions,
            ..
        } = pool;
        let report = ExplorationReport {
            signatures: table.into_signatures(),
            edges: edges.into_inner(),
            expansions: expansions.into_inner(),
            graph: graph.finish()?,
        };
        progress.finish();
        info!(
            nodes = report.node_count(),
            edges = report.edges,
            expansions = report.expansions,
            "component graph explored"
        );
        Ok(report)
    }
}

// Releases a claimed element even when its expansion panics
struct InFlight<'a> {
    in_flight: &'a AtomicUsize,
    failed: &'a AtomicBool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.failed.store(true, Ordering::Release);
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

struct WorkerPool<'a, W: Write> {
    alphabet: Alphabet,
    config: ExplorerConfig,
    queue: Mutex<FileQueue>,
    table: SignatureTable,
    graph: GraphWriter<W>,
    progress: &'a ExplorationProgress,
    in_flight: AtomicUsize,
    failed: AtomicBool,
    edges: AtomicU64,
    expansions: AtomicU64,
}

impl<W: Write> WorkerPool<'_, W> {
    fn run_worker(&self, worker: usize) -> Result<()> {
        let mut analyzer = FeasibilityAnalyzer::new(self.alphabet);
        let mut idle = 0;

        while !self.failed.load(Ordering::Acquire) {
            // Claimed under the queue lock so an empty queue with nothing in
            // flight really means the frontier is exhausted
            let next = {
                let mut queue = self.queue.lock();
                let next = queue.dequeue();
                if matches!(next, Ok(Some(_))) {
                    self.in_flight.fetch_add(1, Ordering::SeqCst);
                }
                next
            };

            match next {
                Err(error) => return Err(self.fail(worker, error)),
                Ok(None) => {
                    if self.in_flight.load(Ordering::SeqCst) == 0 {
                        idle += 1;
                        if idle >= self.config.idle_rounds {
                            break;
                        }
                    } else {
                        idle = 0;
                    }
                    thread::sleep(self.config.idle_wait);
                }
                Ok(Some(element)) => {
                    idle = 0;
                    let guard = InFlight {
                        in_flight: &self.in_flight,
                        failed: &self.failed,
                    };
                    let outcome = self.expand(&mut analyzer, &element);
                    drop(guard);
                    outcome.map_err(|error| self.fail(worker, error))?;
                }
            }
        }

        debug!(worker, "worker finished");
        Ok(())
    }

    fn expand(&self, analyzer: &mut FeasibilityAnalyzer, element: &QueueElement) -> Result<()> {
        let state = DecyclingState::from_move_list(self.alphabet, &element.moves)?;

        for imove in &element.signature {
            let traversal = state.traverse_move(&element.moves, imove.slot, imove.mask);
            debug_assert!(
                traversal.state.has_move(imove.slot),
                "I-move {imove} does not leave its slot ready"
            );

            let signature = analyzer.signature(&traversal.state);
            let (id, is_new) = self.table.insert_or_lookup(&signature);
            self.graph.edge(element.id, id, imove.slot)?;
            self.edges.fetch_add(1, Ordering::Relaxed);

            if is_new {
                self.progress.discovered();
                self.queue.lock().enqueue(&QueueElement {
                    id,
                    moves: traversal.moves,
                    signature,
                })?;
            }
        }

        self.expansions.fetch_add(1, Ordering::Relaxed);
        self.progress.expanded();
        debug!(
            id = element.id,
            imoves = element.signature.len(),
            "component expanded"
        );
        Ok(())
    }

    fn fail(&self, worker: usize, error: DecyclingError) -> DecyclingError {
        self.failed.store(true, Ordering::Release);
        warn!(worker, %error, "worker stopped");
        error
    }
}
