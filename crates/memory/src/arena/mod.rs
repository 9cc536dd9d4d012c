//! Fixed-capacity arena allocation with deferred destruction
//!
//! This module provides the allocation substrate for the front end: one
//! contiguous buffer, bump allocation from the low end, and a ledger of
//! pending finalizers growing down from the high end. Bulk teardown is
//! O(1) in live objects and replays finalizers in reverse construction
//! order.
//!
//! # Arena Types
//!
//! - [`FixedArena`]: the single-buffer, dual-cursor arena
//! - [`ArenaScope`]: RAII epoch guard that resets on drop
//! - [`ArenaStats`] / [`ArenaStatsSnapshot`]: counter block
//!
//! Basic usage:
//!
//! ```
//! use ingot_memory::FixedArena;
//!
//! let mut arena = FixedArena::small();
//! let token = arena.alloc_str("identifier")?;
//! assert_eq!(token, "identifier");
//! arena.reset();
//! # Ok::<(), ingot_memory::ArenaError>(())
//! ```

mod fixed;
mod scope;
mod stats;

pub use self::fixed::{DEFAULT_CAPACITY, FixedArena};
pub use self::scope::ArenaScope;
pub use self::stats::{ArenaStats, ArenaStatsSnapshot};

/// Creates an arena at the default capacity.
pub fn new_arena() -> FixedArena {
    FixedArena::default()
}

/// Creates an arena with the given capacity in bytes.
pub fn new_arena_with_capacity(capacity: usize) -> FixedArena {
    FixedArena::new(capacity)
}
