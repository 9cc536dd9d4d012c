//! Counter block for arena instrumentation.

use std::cell::Cell;
use std::fmt;

/// Counters maintained by a [`FixedArena`](super::FixedArena).
///
/// The arena is single-threaded by construction, so plain `Cell`s are
/// enough; there is no atomic traffic on the allocation path.
#[derive(Debug, Default)]
pub struct ArenaStats {
    allocations: Cell<u64>,
    refusals: Cell<u64>,
    resets: Cell<u64>,
    finalizers_run: Cell<u64>,
    bytes_peak: Cell<usize>,
    bytes_padding: Cell<usize>,
}

impl ArenaStats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Successful allocations (trivial, tracked, and array calls each
    /// count once).
    pub fn allocations(&self) -> u64 {
        self.allocations.get()
    }

    /// Refused allocations, including ledger-pressure rollbacks.
    pub fn refusals(&self) -> u64 {
        self.refusals.get()
    }

    /// Completed resets.
    pub fn resets(&self) -> u64 {
        self.resets.get()
    }

    /// Finalizer invocations executed by resets, counted per element.
    pub fn finalizers_run(&self) -> u64 {
        self.finalizers_run.get()
    }

    /// High-water mark of the bump region, in bytes.
    pub fn bytes_peak(&self) -> usize {
        self.bytes_peak.get()
    }

    /// Total padding inserted for alignment, in bytes.
    pub fn bytes_padding(&self) -> usize {
        self.bytes_padding.get()
    }

    pub(crate) fn record_allocation(&self, used_after: usize) {
        self.allocations.set(self.allocations.get() + 1);
        if used_after > self.bytes_peak.get() {
            self.bytes_peak.set(used_after);
        }
    }

    pub(crate) fn record_refusal(&self) {
        self.refusals.set(self.refusals.get() + 1);
    }

    pub(crate) fn record_padding(&self, bytes: usize) {
        self.bytes_padding.set(self.bytes_padding.get() + bytes);
    }

    pub(crate) fn record_reset(&self, finalizers: u64) {
        self.resets.set(self.resets.get() + 1);
        self.finalizers_run
            .set(self.finalizers_run.get() + finalizers);
    }

    /// Creates a plain-data snapshot of the current counters.
    pub fn snapshot(&self) -> ArenaStatsSnapshot {
        ArenaStatsSnapshot {
            allocations: self.allocations(),
            refusals: self.refusals(),
            resets: self.resets(),
            finalizers_run: self.finalizers_run(),
            bytes_peak: self.bytes_peak(),
            bytes_padding: self.bytes_padding(),
        }
    }
}

/// Immutable snapshot of [`ArenaStats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaStatsSnapshot {
    /// Successful allocations.
    pub allocations: u64,
    /// Refused allocations.
    pub refusals: u64,
    /// Completed resets.
    pub resets: u64,
    /// Finalizer invocations, per element.
    pub finalizers_run: u64,
    /// High-water mark of the bump region, in bytes.
    pub bytes_peak: usize,
    /// Alignment padding inserted, in bytes.
    pub bytes_padding: usize,
}

impl fmt::Display for ArenaStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arena statistics:")?;
        writeln!(f, "  Allocations: {}", self.allocations)?;
        writeln!(f, "  Refusals: {}", self.refusals)?;
        writeln!(f, "  Resets: {}", self.resets)?;
        writeln!(f, "  Finalizers run: {}", self.finalizers_run)?;
        writeln!(f, "  Peak usage: {} bytes", self.bytes_peak)?;
        writeln!(f, "  Padding: {} bytes", self.bytes_padding)?;
        Ok(())
    }
}
