//! CSV world-table loader.
//!
//! Replaces the built-in atlas with custom tables, e.g. a reduced map for a
//! single trade lane or hardships refreshed from a risk feed.
//!
//! # CSV formats
//!
//! `locations.csv` — one row per location, `x`/`y` in map units:
//!
//! ```csv
//! key,name,x,y
//! NYC,New York,184.3,98.0
//! London,London,312.8,76.6
//! ```
//!
//! `connections.csv` — one row per undirected connection.  `hardship` must be
//! a non-negative integer:
//!
//! ```csv
//! from,to,hardship
//! NYC,London,3
//! ```
//!
//! `aliases.csv` (optional) — lookup order is file order:
//!
//! ```csv
//! alias,key
//! usa,NYC
//! uk,London
//! ```
//!
//! Connections and aliases that reference a key missing from
//! `locations.csv` fail the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sc_core::MapPoint;
use sc_network::RouteGraphBuilder;

use crate::world::WorldMap;
use crate::{WorldError, WorldResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    key:  String,
    name: String,
    x:    f32,
    y:    f32,
}

#[derive(Deserialize)]
struct ConnectionRecord {
    from:     String,
    to:       String,
    hardship: u32,
}

#[derive(Deserialize)]
struct AliasRecord {
    alias: String,
    key:   String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`WorldMap`] from `locations.csv`, `connections.csv`, and (if
/// present) `aliases.csv` in `dir`.
pub fn load_world_dir(dir: &Path) -> WorldResult<WorldMap> {
    let locations   = File::open(dir.join("locations.csv"))?;
    let connections = File::open(dir.join("connections.csv"))?;

    let alias_path = dir.join("aliases.csv");
    let aliases = if alias_path.exists() {
        Some(File::open(alias_path)?)
    } else {
        None
    };

    let world = load_world_reader(locations, connections, aliases)?;
    tracing::info!(
        dir         = %dir.display(),
        locations   = world.graph.location_count(),
        connections = world.graph.connection_count(),
        "loaded world tables"
    );
    Ok(world)
}

/// Like [`load_world_dir`] but accepts any `Read` sources.
///
/// Useful for testing (pass `&[u8]` or a `Cursor`) or loading tables fetched
/// from elsewhere.
pub fn load_world_reader<L, C, A>(
    locations:   L,
    connections: C,
    aliases:     Option<A>,
) -> WorldResult<WorldMap>
where
    L: Read,
    C: Read,
    A: Read,
{
    let location_rows:   Vec<LocationRecord>   = read_records(locations)?;
    let connection_rows: Vec<ConnectionRecord> = read_records(connections)?;
    let alias_rows: Vec<AliasRecord> = match aliases {
        Some(r) => read_records(r)?,
        None => Vec::new(),
    };

    let mut b = RouteGraphBuilder::with_capacity(location_rows.len(), connection_rows.len());
    for row in location_rows {
        b.add_location(row.key, row.name, MapPoint::new(row.x, row.y))?;
    }
    for row in &connection_rows {
        b.connect_keys(&row.from, &row.to, row.hardship)?;
    }
    let graph = b.build();

    WorldMap::new(
        graph,
        alias_rows.iter().map(|r| (r.alias.as_str(), r.key.as_str())),
    )
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_records<R, T>(reader: R) -> WorldResult<Vec<T>>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| WorldError::Parse(e.to_string())))
        .collect()
}
