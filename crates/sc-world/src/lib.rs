//! `sc-world` — the map the route finder runs on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`atlas`]    | Built-in 25-city table, connections, and alias table       |
//! | [`resolver`] | `LocationResolver`: free text → `LocationId`               |
//! | [`world`]    | `WorldMap` (graph + resolver), cached built-in instance    |
//! | [`loader`]   | CSV loading of custom location/connection/alias tables     |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                             |

pub mod atlas;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use loader::{load_world_dir, load_world_reader};
pub use resolver::{LocationResolver, MatchSource, Resolution};
pub use world::WorldMap;
