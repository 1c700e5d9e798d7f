//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Ordering is load-bearing here: the
//! daily simulator breaks every tie by ascending id.

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

            /// Convert a raw signed integer (as read from a command line or
            /// scenario file) into an id.  Values that do not fit map to
            /// [`INVALID`](Self::INVALID) so lookups fail instead of wrapping.
            #[inline]
            pub fn from_raw(raw: i64) -> $name {
                <$inner>::try_from(raw).map($name).unwrap_or(Self::INVALID)
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
                write!(f, "{}", self.0)
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
    /// Index of a node (building) in the network arena.  Assigned densely
    /// from 0 in insertion order, so `id.index()` addresses the node `Vec`.
    pub struct NodeId(u32);
}

typed_id! {
    /// Index of an edge (tube) in creation order.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Identity of a transport unit (pod).  Doubles as dispatch priority:
    /// lower ids leave first when an edge is contended.
    pub struct PodId(u32);
}

typed_id! {
    /// Identity of an agent (astronaut): `multiplier × origin node + spawn index`.
    pub struct AgentId(u32);
}

// ── Category ──────────────────────────────────────────────────────────────────

/// Node category tag.  [`Category::ARRIVAL`] marks landing pads; every other
/// value is a work category that agents travel towards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category(pub u16);

impl Category {
    /// The distinguished arrival (landing pad) category.
    pub const ARRIVAL: Category = Category(0);

    #[inline]
    pub fn is_arrival(self) -> bool {
        self == Self::ARRIVAL
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
