//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stop ids are dense: the n-th stop added to a catalogue gets `StopId(n)`,
//! so ids double as indices into the stop arena and as graph vertices.  The
//! inner integer is `pub`, but callers should prefer `.index()` for clarity.
//!
//! Ids have no `Default`; an unset slot is spelled `INVALID`:
//!
//! ```compile_fail
//! let _ = tc_core::StopId::default();
//! ```

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel for unset slots in per-vertex tables.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails once the arena has outgrown the id width.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the catalogue arena.  Also the graph vertex id.
    pub struct StopId(u32);
}

typed_id! {
    /// Index of a bus route in the catalogue, in insertion order.
    pub struct BusId(u32);
}

typed_id! {
    /// Index of a directed edge in the route graph.
    pub struct EdgeId(u32);
}
