//! Route graph representation and builder.
//!
//! # Data layout
//!
//! Every undirected [`Connection`] is stored once, in declaration order, and
//! expanded into two directed **arcs**.  Arcs use **Compressed Sparse Row
//! (CSR)** format: given a `LocationId n`, its outgoing arcs occupy
//!
//! ```text
//! arc_to[ arc_start[n] .. arc_start[n+1] ]
//! ```
//!
//! with `arc_hardship` and `arc_connection` indexed the same way.  Within a
//! location, arcs keep the order in which their connections were declared,
//! so neighbour iteration (and therefore routing) is deterministic.
//!
//! Parallel connections between the same pair are kept as separate arcs.
//! Routing naturally prefers the cheaper one.
//!
//! The builder keeps the sum of all connection hardships below
//! `Hardship::MAX`.  Any simple path therefore costs less than
//! `Hardship::MAX`, so route totals fit in a `Hardship` and the routers can
//! use `Hardship::MAX` for "unreached".
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a [`MapPoint`] to the nearest location.  The
//! map view uses it to turn a click into a route endpoint.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use sc_core::{ConnectionId, CoreError, CoreResult, Hardship, LocationId, MapPoint, total_hardship};

use crate::{NetworkError, NetworkResult};

// ── Table rows ────────────────────────────────────────────────────────────────

/// A named point on the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique short key, e.g. `"NYC"`.
    pub key: String,
    /// Display name, e.g. `"New York"`.
    pub name: String,
    /// Rendering position.  Never part of route cost.
    pub point: MapPoint,
}

/// An undirected, weighted link between two locations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub a: LocationId,
    pub b: LocationId,
    pub hardship: Hardship,
}

impl Connection {
    /// `true` if this connection joins `x` and `y` in either direction.
    #[inline]
    pub fn joins(&self, x: LocationId, y: LocationId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct LocationEntry {
    point: [f32; 2], // [x, y]
    id: LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected hardship graph in CSR form plus a spatial index.
///
/// Immutable once built, so a single instance can be shared across threads
/// and queried concurrently.  Construct with [`RouteGraphBuilder`].
pub struct RouteGraph {
    /// Location table, indexed by `LocationId`.
    pub locations: Vec<Location>,

    /// Connection table, indexed by `ConnectionId` (declaration order).
    pub connections: Vec<Connection>,

    // ── CSR arc adjacency ─────────────────────────────────────────────────
    /// CSR row pointer.  Length = `location_count + 1`.
    pub arc_start: Vec<u32>,

    /// Destination of each arc.
    pub arc_to: Vec<LocationId>,

    /// Hardship of each arc (copied from its connection).
    pub arc_hardship: Vec<Hardship>,

    /// Connection each arc was expanded from.
    pub arc_connection: Vec<ConnectionId>,

    key_index: FxHashMap<String, LocationId>,
    spatial_idx: RTree<LocationEntry>,
}

impl RouteGraph {
    /// A graph with no locations.  Every routing request against it is
    /// [`RouteOutcome::NotFound`](crate::RouteOutcome::NotFound).
    pub fn empty() -> Self {
        RouteGraphBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of directed arcs (twice the connection count).
    pub fn arc_count(&self) -> usize {
        self.arc_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.locations.len()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// Like [`location`](Self::location) but reports a missing id as an error.
    pub fn try_location(&self, id: LocationId) -> CoreResult<&Location> {
        self.location(id).ok_or(CoreError::LocationNotFound(id))
    }

    /// Find a location by its key (exact, case-sensitive).
    pub fn id_of(&self, key: &str) -> Option<LocationId> {
        self.key_index.get(key).copied()
    }

    /// Iterator over `(id, location)` pairs in table order.
    pub fn iter_locations(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i as u16), loc))
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Index range of the outgoing arcs of `id`.  Empty for an unknown id.
    #[inline]
    pub fn arcs(&self, id: LocationId) -> std::ops::Range<usize> {
        if !self.contains(id) {
            return 0..0;
        }
        let start = self.arc_start[id.index()] as usize;
        let end   = self.arc_start[id.index() + 1] as usize;
        start..end
    }

    /// `(neighbour, hardship)` for every outgoing arc of `id`.
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> impl Iterator<Item = (LocationId, Hardship)> + '_ {
        self.arcs(id).map(|a| (self.arc_to[a], self.arc_hardship[a]))
    }

    #[inline]
    pub fn degree(&self, id: LocationId) -> usize {
        self.arcs(id).len()
    }

    /// The cheapest connection directly joining `a` and `b`, if any.
    pub fn connection_between(&self, a: LocationId, b: LocationId) -> Option<(ConnectionId, &Connection)> {
        self.arcs(a)
            .filter(|&arc| self.arc_to[arc] == b)
            .min_by_key(|&arc| self.arc_hardship[arc])
            .map(|arc| {
                let cid = self.arc_connection[arc];
                (cid, &self.connections[cid.index()])
            })
    }

    /// Hardship of the cheapest direct connection between `a` and `b`.
    pub fn hardship_between(&self, a: LocationId, b: LocationId) -> Option<Hardship> {
        self.connection_between(a, b).map(|(_, c)| c.hardship)
    }

    /// Total hardship of walking `path` hop by hop over the cheapest direct
    /// connections.
    ///
    /// Returns `None` if any consecutive pair is not directly connected (or
    /// the sum overflows).  A single-node path costs 0.
    pub fn path_hardship(&self, path: &[LocationId]) -> Option<Hardship> {
        if path.iter().any(|&id| !self.contains(id)) {
            return None;
        }
        let hops: Option<Vec<Hardship>> = path
            .windows(2)
            .map(|w| self.hardship_between(w[0], w[1]))
            .collect();
        total_hardship(hops?)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The location nearest to `point`.  `None` only for an empty graph.
    pub fn nearest_location(&self, point: MapPoint) -> Option<LocationId> {
        self.spatial_idx
            .nearest_neighbor(&[point.x, point.y])
            .map(|e| e.id)
    }

    /// Up to `k` nearest locations to `point`, closest first.
    pub fn k_nearest_locations(&self, point: MapPoint, k: usize) -> Vec<LocationId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[point.x, point.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`RouteGraph`] incrementally, then call [`build`](Self::build).
///
/// Locations must be added before the connections that reference them; a
/// connection to an unknown location fails immediately instead of producing
/// a corrupt graph.
///
/// # Example
///
/// ```
/// use sc_core::MapPoint;
/// use sc_network::RouteGraphBuilder;
///
/// let mut b = RouteGraphBuilder::new();
/// b.add_location("NYC", "New York", MapPoint::new(184.3, 98.0)).unwrap();
/// b.add_location("London", "London", MapPoint::new(312.8, 76.6)).unwrap();
/// b.connect_keys("NYC", "London", 3).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.location_count(), 2);
/// assert_eq!(graph.arc_count(), 2); // both directions
/// ```
pub struct RouteGraphBuilder {
    locations:      Vec<Location>,
    connections:    Vec<Connection>,
    key_index:      FxHashMap<String, LocationId>,
    total_hardship: u64,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self {
            locations:   Vec::new(),
            connections: Vec::new(),
            key_index:   FxHashMap::default(),
            total_hardship: 0,
        }
    }

    pub fn with_capacity(locations: usize, connections: usize) -> Self {
        Self {
            locations:   Vec::with_capacity(locations),
            connections: Vec::with_capacity(connections),
            key_index:   FxHashMap::with_capacity_and_hasher(locations, Default::default()),
            total_hardship: 0,
        }
    }

    /// Add a location and return its `LocationId` (sequential from 0).
    pub fn add_location(
        &mut self,
        key:   impl Into<String>,
        name:  impl Into<String>,
        point: MapPoint,
    ) -> NetworkResult<LocationId> {
        let key = key.into();
        if self.key_index.contains_key(&key) {
            return Err(NetworkError::DuplicateLocation(key));
        }
        let id = LocationId::from_index(self.locations.len())
            .ok_or(CoreError::IdOverflow { what: "locations", count: self.locations.len() + 1 })?;
        self.key_index.insert(key.clone(), id);
        self.locations.push(Location { key, name: name.into(), point });
        Ok(id)
    }

    /// Add an undirected connection between two previously added locations.
    ///
    /// Fails with [`NetworkError::HardshipOverflow`] if the summed hardship of
    /// all connections would reach `Hardship::MAX`.
    pub fn connect(&mut self, a: LocationId, b: LocationId, hardship: Hardship) -> NetworkResult<ConnectionId> {
        for id in [a, b] {
            if id.index() >= self.locations.len() {
                return Err(CoreError::LocationNotFound(id).into());
            }
        }
        let total = self.total_hardship + u64::from(hardship);
        if total >= u64::from(Hardship::MAX) {
            return Err(NetworkError::HardshipOverflow { total });
        }
        let cid = ConnectionId::from_index(self.connections.len())
            .ok_or(CoreError::IdOverflow { what: "connections", count: self.connections.len() + 1 })?;
        self.total_hardship = total;
        self.connections.push(Connection { a, b, hardship });
        Ok(cid)
    }

    /// Convenience: [`connect`](Self::connect) by location key.
    pub fn connect_keys(&mut self, a: &str, b: &str, hardship: Hardship) -> NetworkResult<ConnectionId> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        self.connect(a, b, hardship)
    }

    pub fn id_of(&self, key: &str) -> Option<LocationId> {
        self.key_index.get(key).copied()
    }

    fn require(&self, key: &str) -> NetworkResult<LocationId> {
        self.id_of(key)
            .ok_or_else(|| NetworkError::UnknownLocation(key.to_owned()))
    }

    pub fn location_count(&self) -> usize { self.locations.len() }
    pub fn connection_count(&self) -> usize { self.connections.len() }

    /// Consume the builder and produce a [`RouteGraph`].
    ///
    /// Each connection becomes two arcs.  Arcs are grouped by source with a
    /// stable sort, so per-location order follows declaration order.
    pub fn build(self) -> RouteGraph {
        let location_count = self.locations.len();

        let mut raw: Vec<(LocationId, LocationId, Hardship, ConnectionId)> =
            Vec::with_capacity(self.connections.len() * 2);
        for (i, c) in self.connections.iter().enumerate() {
            let cid = ConnectionId(i as u16);
            raw.push((c.a, c.b, c.hardship, cid));
            raw.push((c.b, c.a, c.hardship, cid));
        }
        raw.sort_by_key(|&(from, ..)| from);

        let arc_to:         Vec<LocationId>   = raw.iter().map(|r| r.1).collect();
        let arc_hardship:   Vec<Hardship>     = raw.iter().map(|r| r.2).collect();
        let arc_connection: Vec<ConnectionId> = raw.iter().map(|r| r.3).collect();

        let mut arc_start = vec![0u32; location_count + 1];
        for &(from, ..) in &raw {
            arc_start[from.index() + 1] += 1;
        }
        for i in 1..=location_count {
            arc_start[i] += arc_start[i - 1];
        }
        debug_assert_eq!(arc_start[location_count] as usize, raw.len());

        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .enumerate()
            .map(|(i, loc)| LocationEntry {
                point: [loc.point.x, loc.point.y],
                id: LocationId(i as u16),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RouteGraph {
            locations: self.locations,
            connections: self.connections,
            arc_start,
            arc_to,
            arc_hardship,
            arc_connection,
            key_index: self.key_index,
            spatial_idx,
        }
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
