//! Summary reporting seam.
//!
//! The simulator computes three integers — hits, misses, evictions — and
//! hands them to a [`SummaryReporter`] supplied by the caller. A production
//! embedding (e.g. a grading harness) injects its own implementation; the
//! [`PrintSummary`] default covers standalone use. The core never writes
//! the summary itself and never special-cases which reporter it is driving.

/// Receives the final aggregate counters of a simulation run.
pub trait SummaryReporter {
    /// Reports the final hit, miss, and eviction counts, in that order.
    fn report(&mut self, hits: u64, misses: u64, evictions: u64);
}

/// Default reporter printing the classic one-line summary to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintSummary;

impl SummaryReporter for PrintSummary {
    fn report(&mut self, hits: u64, misses: u64, evictions: u64) {
        println!("hits:{hits} misses:{misses} evictions:{evictions}");
    }
}

/// Adapter turning a plain callback into a [`SummaryReporter`].
///
/// Lets an embedding hand the core a closure taking the three counts
/// without defining a reporter type of its own.
#[derive(Clone, Copy, Debug)]
pub struct SummaryFn<F>(pub F);

impl<F: FnMut(u64, u64, u64)> SummaryReporter for SummaryFn<F> {
    fn report(&mut self, hits: u64, misses: u64, evictions: u64) {
        (self.0)(hits, misses, evictions);
    }
}
