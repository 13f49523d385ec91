//! Dense ids for map tables.
//!
//! A `LocationId` is a location's row in the location table and a
//! `ConnectionId` is a connection's row in the connection table, both
//! numbered from 0 in declaration order.  The graph stores per-location and
//! per-connection data in plain `Vec`s indexed by these ids.
//!
//! The top value of each id type is reserved as `UNSET`, the "no
//! predecessor" marker in route reconstruction, so a table holds at most
//! `u16::MAX` rows.

use std::fmt;

macro_rules! dense_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) = $tag:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Reserved marker; never names a table row.
            pub const UNSET: $name = $name(<$inner>::MAX);

            /// The id of table row `row`, or `None` if the row number does
            /// not fit or collides with [`UNSET`](Self::UNSET).
            pub fn from_index(row: usize) -> Option<Self> {
                <$inner>::try_from(row)
                    .ok()
                    .map($name)
                    .filter(|id| id.is_set())
            }

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_set(self) -> bool {
                self != Self::UNSET
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::UNSET
            }
        }

        /// `loc#3`, `conn#12`; `loc#-` when unset.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_set() {
                    write!(f, concat!($tag, "#{}"), self.0)
                } else {
                    f.write_str(concat!($tag, "#-"))
                }
            }
        }
    };
}

dense_id! {
    /// Row of a location (city or port) in the location table.
    pub struct LocationId(u16) = "loc";
}

dense_id! {
    /// Row of an undirected connection in the connection table.
    pub struct ConnectionId(u16) = "conn";
}
