//! The repeat-loop wrapping every randomized contraction algorithm, plus
//! its two-thread "cutoff" variant.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cut::Cut;
use crate::error::Error;
use crate::{Hypergraph, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct RunStats {
    pub runs_performed: u64,
    pub contractions_performed: u64,
}

/// One randomized contraction algorithm, able to run a single trial against
/// a private copy of a hypergraph.
pub trait ContractionAlgorithm {
    /// Runs one trial, returning the cut it found and how many individual
    /// edge contractions it performed getting there.
    fn trial(&self, h: &Hypergraph, k: usize, rng: &mut StdRng) -> Result<(Cut, u64)>;

    /// The algorithm-specific "high probability" default run cap.
    fn default_cap(h: &Hypergraph, k: usize) -> u64;
}

/// Termination predicates and PRNG seed for a run of trials.
///
/// There is no process-wide PRNG anywhere in this crate: every `Context`
/// owns the seed for its own run.
pub struct Context {
    pub k: usize,
    pub seed: u64,
    pub discovery_value: f64,
    pub max_runs: Option<u64>,
    pub deadline: Option<Instant>,
}

impl Context {
    pub fn new(k: usize) -> Self {
        Self { k, seed: 0, discovery_value: 0.0, max_runs: None, deadline: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_discovery_value(mut self, discovery_value: f64) -> Self {
        self.discovery_value = discovery_value;
        self
    }

    pub fn with_max_runs(mut self, max_runs: u64) -> Self {
        self.max_runs = Some(max_runs);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

fn should_keep_going(best: &Option<Cut>, runs: u64, ctx: &Context, cap: u64) -> bool {
    let below_discovery = best.as_ref().map(|c| c.value > ctx.discovery_value).unwrap_or(true);
    let under_deadline = ctx.deadline.map(|d| Instant::now() < d).unwrap_or(true);
    below_discovery && runs < cap && under_deadline
}

fn keep_better(best: Option<Cut>, candidate: Cut) -> Cut {
    match best {
        Some(b) if b.value <= candidate.value => b,
        _ => candidate,
    }
}

/// Repeats trials of `algo` against `h` until the best cut reaches the
/// discovery value, the run cap is exhausted, or the deadline passes.
///
/// # Failure
/// `Error::InvalidArgument` if the run cap resolves to zero (no trial ever
/// executes, so there is no cut to return).
pub fn run<A: ContractionAlgorithm>(algo: &A, h: &Hypergraph, ctx: &Context) -> Result<(Cut, RunStats)> {
    let mut rng = StdRng::seed_from_u64(ctx.seed);
    let cap = ctx.max_runs.unwrap_or_else(|| A::default_cap(h, ctx.k).max(1));
    log::debug!("run: k={} seed={} cap={cap}", ctx.k, ctx.seed);

    let mut stats = RunStats::default();
    let mut best: Option<Cut> = None;

    while should_keep_going(&best, stats.runs_performed, ctx, cap) {
        let (cut, contractions) = algo.trial(h, ctx.k, &mut rng)?;
        stats.runs_performed += 1;
        stats.contractions_performed += contractions;
        best = Some(keep_better(best, cut));
        log::trace!("trial {}: value={}", stats.runs_performed, best.as_ref().unwrap().value);
    }

    log::debug!(
        "run finished after {} trials, best value {}",
        stats.runs_performed,
        best.as_ref().map(|c| c.value).unwrap_or(f64::NAN)
    );
    best.ok_or_else(|| Error::invalid_argument("runner performed zero trials (run cap was zero)"))
        .map(|cut| (cut, stats))
}

/// Two-thread cutoff variant: the writer thread runs the same loop as
/// [`run`], publishing its current best value into a shared atomic after
/// every trial; the monitor thread sleeps on `poll_schedule` and samples
/// that atomic, calling `on_poll` at each wakeup. The monitor never touches
/// the hypergraph, the algorithm, or the PRNG; the atomic is the only
/// state shared between the two threads.
pub fn run_with_cutoff<A>(
    algo: A,
    h: Hypergraph,
    ctx: Context,
    poll_schedule: Vec<Duration>,
    mut on_poll: impl FnMut(f64) + Send + 'static,
) -> Result<(Cut, RunStats)>
where
    A: ContractionAlgorithm + Send + 'static,
{
    let best_value_bits = Arc::new(AtomicU64::new(f64::INFINITY.to_bits()));
    let done = Arc::new(AtomicBool::new(false));

    let writer_value = Arc::clone(&best_value_bits);
    let writer_done = Arc::clone(&done);

    let writer = thread::spawn(move || {
        let result = (|| -> Result<(Cut, RunStats)> {
            let mut rng = StdRng::seed_from_u64(ctx.seed);
            let cap = ctx.max_runs.unwrap_or_else(|| A::default_cap(&h, ctx.k).max(1));
            let mut stats = RunStats::default();
            let mut best: Option<Cut> = None;

            while should_keep_going(&best, stats.runs_performed, &ctx, cap) {
                let (cut, contractions) = algo.trial(&h, ctx.k, &mut rng)?;
                stats.runs_performed += 1;
                stats.contractions_performed += contractions;
                best = Some(keep_better(best, cut));
                writer_value.store(best.as_ref().unwrap().value.to_bits(), Ordering::Relaxed);
            }
            log::debug!("cutoff run finished after {} trials", stats.runs_performed);

            best.ok_or_else(|| Error::invalid_argument("runner performed zero trials (run cap was zero)"))
                .map(|cut| (cut, stats))
        })();
        writer_done.store(true, Ordering::Relaxed);
        result
    });

    let monitor_done = Arc::clone(&done);
    let monitor = thread::spawn(move || {
        for sleep_for in poll_schedule {
            thread::sleep(sleep_for);
            if monitor_done.load(Ordering::Relaxed) {
                break;
            }
            on_poll(f64::from_bits(best_value_bits.load(Ordering::Relaxed)));
        }
    });

    let result = writer.join().expect("contraction runner writer thread panicked");
    let _ = monitor.join();
    result
}
