//! `sc-network` — route graph, spatial snapping, and safest-route search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RouteGraph` (CSR + R-tree), `RouteGraphBuilder`            |
//! | [`router`]  | `Router` trait, `Route`, `RouteOutcome`, two routers        |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use network::{Connection, Location, RouteGraph, RouteGraphBuilder};
pub use router::{DijkstraRouter, Route, RouteOutcome, Router, ScanRouter};
