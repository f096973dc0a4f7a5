//! Replay statistics collection and reporting.
//!
//! This module tracks what the replayer saw in the trace, independent of
//! the cache counters. It provides:
//! 1. **Operation mix:** Counts of loads, stores, modifies, and ignored
//!    instruction-fetch lines.
//! 2. **Skip accounting:** Malformed lines dropped by the permissive parser.
//! 3. **Reporting:** A human-readable breakdown for standalone runs.
//!
//! None of these counts feed back into the simulation; they exist for
//! analysis and test assertions.

use crate::trace::OpKind;

/// Statistics of one trace replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Load operations replayed (one access each).
    pub loads: u64,
    /// Store operations replayed (one access each).
    pub stores: u64,
    /// Modify operations replayed (two accesses each).
    pub modifies: u64,
    /// Instruction-fetch lines ignored (zero accesses).
    pub instructions: u64,
    /// Malformed lines silently skipped.
    pub skipped: u64,
}

impl TraceStats {
    /// Records one recognized operation.
    pub const fn record(&mut self, kind: OpKind) {
        match kind {
            OpKind::Load => self.loads += 1,
            OpKind::Store => self.stores += 1,
            OpKind::Modify => self.modifies += 1,
            OpKind::Instruction => self.instructions += 1,
        }
    }

    /// Total cache accesses the recorded operations generate
    /// (loads + stores + 2 × modifies).
    pub const fn total_accesses(&self) -> u64 {
        self.loads + self.stores + 2 * self.modifies
    }

    /// Prints the operation-mix breakdown to standard output.
    pub fn print(&self) {
        println!("\n[Trace Operation Mix]");
        println!("  Loads:                {}", self.loads);
        println!("  Stores:               {}", self.stores);
        println!("  Modifies:             {}", self.modifies);
        println!("  Instruction fetches:  {} (ignored)", self.instructions);
        println!("  Malformed lines:      {} (skipped)", self.skipped);
        println!("  Cache accesses:       {}", self.total_accesses());
    }
}
