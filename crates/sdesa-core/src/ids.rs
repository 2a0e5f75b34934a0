//! Strongly typed, zero-cost identifier wrappers.
//!
//! Every entity table in the kernel is an arena (a dense `Vec` indexed by
//! id), so ids double as indices.  All ids are `Copy + Ord + Hash`; the `Ord`
//! impl is the deterministic tie-break used throughout the engine.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a flow entity in the `FlowRegistry` arena.
    ///
    /// Ids are handed out in creation order, so ascending `FlowId` is also
    /// "created earlier": the final tie-break in the scan phase.
    pub struct FlowId(u32);
}

typed_id! {
    /// Index of a resource entity in the `ResourcePool` arena.
    pub struct ResourceId(u32);
}

typed_id! {
    /// Index of an activity in the `ActivityGraph`.
    pub struct ActivityId(u16);
}

typed_id! {
    /// Index of a declared resource type (e.g. "loader", "spotter").
    pub struct ResourceTypeId(u16);
}
