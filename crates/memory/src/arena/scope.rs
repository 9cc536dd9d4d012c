//! RAII epoch guard for scoped arena use.

use std::fmt;
use std::ops::Deref;

use super::FixedArena;

/// An allocation epoch: borrows the arena exclusively and resets it when
/// the epoch ends.
///
/// This encodes the intended usage model of one logical build phase per
/// arena epoch. The guard dereferences to the arena, so all allocation
/// methods are available; references handed out during the epoch cannot
/// outlive it, and the reset at the end runs every pending finalizer.
///
/// # Examples
///
/// ```
/// use ingot_memory::FixedArena;
///
/// let mut arena = FixedArena::tiny();
/// {
///     let scope = arena.scope();
///     let node = scope.alloc(String::from("temporary"))?;
///     assert_eq!(node, "temporary");
/// } // epoch ends: the String is dropped, every byte released
/// assert!(arena.is_empty());
/// # Ok::<(), ingot_memory::ArenaError>(())
/// ```
pub struct ArenaScope<'a> {
    arena: &'a mut FixedArena,
}

impl<'a> ArenaScope<'a> {
    pub(crate) fn new(arena: &'a mut FixedArena) -> Self {
        Self { arena }
    }

    /// Ends the epoch now, consuming the guard.
    pub fn finish(self) {
        drop(self);
    }
}

impl Deref for ArenaScope<'_> {
    type Target = FixedArena;

    fn deref(&self) -> &FixedArena {
        self.arena
    }
}

impl fmt::Debug for ArenaScope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArenaScope").field(&self.arena).finish()
    }
}

impl Drop for ArenaScope<'_> {
    fn drop(&mut self) {
        self.arena.reset();
    }
}
