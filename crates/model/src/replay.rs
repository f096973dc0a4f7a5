//! Trace replay against the cache model.
//!
//! The replayer turns parsed trace operations into `Cache::access` calls,
//! strictly in trace order. It provides:
//! 1. **Operation dispatch:** Loads and stores issue one access, modifies
//!    issue two back-to-back accesses to the same address, instruction
//!    fetches are ignored entirely.
//! 2. **Verbose annotation:** An optional per-operation line written to a
//!    caller-supplied sink, echoing the operation and the outcome of each
//!    of its accesses in order.
//! 3. **Replay accounting:** Operation-mix counts in [`TraceStats`].
//!
//! Nothing ever intervenes between the two sub-accesses of a modify, so
//! whenever its first access misses the second is guaranteed to hit.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::cache::{Cache, Outcome};
use crate::common::error::SimError;
use crate::report::SummaryReporter;
use crate::stats::TraceStats;
use crate::trace::{OpKind, TraceOp, parse_line};

/// Outcomes of the one or two accesses a single operation generated.
///
/// `first` is `None` only for ignored operations (instruction fetches);
/// `second` is `Some` only for modifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Outcome of the first access, if the operation touched the cache.
    pub first: Option<Outcome>,
    /// Outcome of the second access (modify operations only).
    pub second: Option<Outcome>,
}

impl StepOutcome {
    const IGNORED: Self = Self {
        first: None,
        second: None,
    };

    /// Iterates over the outcomes in the order the accesses occurred.
    pub fn outcomes(&self) -> impl Iterator<Item = Outcome> {
        self.first.into_iter().chain(self.second)
    }
}

/// Replays trace operations against a borrowed cache.
///
/// The replayer is the cache's only mutator for the duration of the run;
/// accesses happen exactly in the order the trace presents them.
#[derive(Debug)]
pub struct Replayer<'c> {
    cache: &'c mut Cache,
    stats: TraceStats,
}

impl<'c> Replayer<'c> {
    /// Creates a replayer driving the given cache.
    pub fn new(cache: &'c mut Cache) -> Self {
        Self {
            cache,
            stats: TraceStats::default(),
        }
    }

    /// Applies one operation to the cache and returns its access outcomes.
    ///
    /// Loads and stores generate one access; modifies generate two accesses
    /// to the same address in sequence; instruction fetches generate none.
    pub fn step(&mut self, op: TraceOp) -> StepOutcome {
        self.stats.record(op.kind);
        match op.kind {
            OpKind::Instruction => StepOutcome::IGNORED,
            OpKind::Load | OpKind::Store => {
                let outcome = self.cache.access(op.addr);
                trace!(kind = %op.kind, addr = op.addr, %outcome, "access");
                StepOutcome {
                    first: Some(outcome),
                    second: None,
                }
            }
            OpKind::Modify => {
                // Load half then store half, nothing in between.
                let first = self.cache.access(op.addr);
                let second = self.cache.access(op.addr);
                trace!(kind = %op.kind, addr = op.addr, %first, %second, "access");
                StepOutcome {
                    first: Some(first),
                    second: Some(second),
                }
            }
        }
    }

    /// Replays every line of `input` in order.
    ///
    /// Malformed lines are skipped silently (counted in the stats, never
    /// fatal). When `annotations` is supplied, each recognized data
    /// operation produces one line in the sink: the operation as it
    /// appeared, followed by the outcome of each access in order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading the input or writing an annotation
    /// fails. Parse failures are not errors.
    pub fn replay<R: BufRead>(
        &mut self,
        input: R,
        mut annotations: Option<&mut dyn Write>,
    ) -> Result<(), SimError> {
        for (line_no, line) in input.lines().enumerate() {
            let line = line?;
            let Some(op) = parse_line(&line) else {
                self.stats.skipped += 1;
                debug!(line = line_no + 1, "skipping malformed trace line");
                continue;
            };

            let result = self.step(op);

            if op.kind != OpKind::Instruction {
                if let Some(sink) = annotations.as_deref_mut() {
                    write!(sink, "{} {:x},{}", op.kind, op.addr, op.size)?;
                    for outcome in result.outcomes() {
                        write!(sink, " {outcome}")?;
                    }
                    writeln!(sink)?;
                }
            }
        }
        Ok(())
    }

    /// Opens a trace file and replays it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceOpen`] if the file cannot be opened, or an
    /// I/O error from [`Replayer::replay`].
    pub fn replay_file(
        &mut self,
        path: &Path,
        annotations: Option<&mut dyn Write>,
    ) -> Result<(), SimError> {
        let file = File::open(path).map_err(|source| SimError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.replay(BufReader::new(file), annotations)
    }

    /// Returns the operation-mix statistics accumulated so far.
    pub const fn stats(&self) -> TraceStats {
        self.stats
    }

    /// Hands the final cache counters to the reporter, in the well-known
    /// order: hits, misses, evictions.
    pub fn finish<R: SummaryReporter>(&self, reporter: &mut R) {
        reporter.report(
            self.cache.hits(),
            self.cache.misses(),
            self.cache.evictions(),
        );
    }
}
