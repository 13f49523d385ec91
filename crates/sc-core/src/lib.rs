//! `sc-core` — foundational types for the supply-chain route finder.
//!
//! Every other `sc-*` crate depends on this one.  It has no `sc-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `ConnectionId`                          |
//! | [`geo`]         | `MapPoint` (rendering coordinates)                    |
//! | [`hardship`]    | `Hardship` cost unit and checked summation            |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod hardship;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::MapPoint;
pub use hardship::{Hardship, total_hardship};
pub use ids::{ConnectionId, LocationId};
