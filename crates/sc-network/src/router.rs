//! Routing trait and safest-route implementations.
//!
//! # Pluggability
//!
//! Callers go through the [`Router`] trait, so the search strategy can be
//! swapped without touching the planner.  Two implementations ship:
//!
//! | Router            | Selection          | Complexity         |
//! |-------------------|--------------------|--------------------|
//! | [`DijkstraRouter`]| binary heap        | O((V + E) log V)   |
//! | [`ScanRouter`]    | scan all unvisited | O(V²)              |
//!
//! Both settle locations in `(distance, LocationId)` order and relax only on
//! a strict improvement, so they agree on distances and tie-breaks.
//!
//! `Hardship::MAX` marks an unreached location.  [`RouteGraphBuilder`]
//! keeps total graph hardship below it, so no real distance collides with
//! the marker and relaxation never overflows.
//!
//! [`RouteGraphBuilder`]: crate::RouteGraphBuilder
//!
//! # Outcome
//!
//! A search never fails.  It yields a [`RouteOutcome`] that keeps "same
//! location" and "unreachable" apart from a genuine route; an empty path is
//! never used as a sentinel.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sc_core::{ConnectionId, Hardship, LocationId};

use crate::network::RouteGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A safest route: locations from start to end inclusive, plus the total
/// hardship accumulated along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub path: Vec<LocationId>,
    pub total_hardship: Hardship,
}

impl Route {
    /// A zero-cost route that starts and ends at `at`.
    pub fn single(at: LocationId) -> Self {
        Self { path: vec![at], total_hardship: 0 }
    }

    pub fn start(&self) -> Option<LocationId> {
        self.path.first().copied()
    }

    pub fn end(&self) -> Option<LocationId> {
        self.path.last().copied()
    }

    /// Number of connections traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if the route never leaves its start location.
    pub fn is_trivial(&self) -> bool {
        self.path.len() <= 1
    }

    /// `true` if `x` and `y` are consecutive on the route, in either order.
    pub fn uses_hop(&self, x: LocationId, y: LocationId) -> bool {
        self.path
            .windows(2)
            .any(|w| (w[0] == x && w[1] == y) || (w[0] == y && w[1] == x))
    }

    /// The connection used for each hop (the cheapest one when parallel
    /// connections exist).  Hops with no direct connection are skipped.
    pub fn connections(&self, graph: &RouteGraph) -> Vec<ConnectionId> {
        self.path
            .windows(2)
            .filter_map(|w| graph.connection_between(w[0], w[1]).map(|(cid, _)| cid))
            .collect()
    }
}

// ── RouteOutcome ──────────────────────────────────────────────────────────────

/// Result of a routing query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome {
    /// A route between two distinct locations.
    Found(Route),
    /// Start and end are the same known location.
    SameNode(LocationId),
    /// End is unreachable from start, or either id is not in the graph.
    NotFound,
}

impl RouteOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(r) => Some(r),
            _ => None,
        }
    }

    /// Collapse into a [`Route`], treating `SameNode` as a single-node route.
    pub fn into_route(self) -> Option<Route> {
        match self {
            RouteOutcome::Found(r) => Some(r),
            RouteOutcome::SameNode(id) => Some(Route::single(id)),
            RouteOutcome::NotFound => None,
        }
    }

    /// Path view: `[id]` for `SameNode`, empty for `NotFound`.
    pub fn path(&self) -> Vec<LocationId> {
        match self {
            RouteOutcome::Found(r) => r.path.clone(),
            RouteOutcome::SameNode(id) => vec![*id],
            RouteOutcome::NotFound => Vec::new(),
        }
    }

    /// Total hardship; `Some(0)` for `SameNode`, `None` when unreachable.
    pub fn total_hardship(&self) -> Option<Hardship> {
        match self {
            RouteOutcome::Found(r) => Some(r.total_hardship),
            RouteOutcome::SameNode(_) => Some(0),
            RouteOutcome::NotFound => None,
        }
    }

    /// `(path, total)` with `NotFound` flattened to `(vec![], 0)`.
    ///
    /// Only for consumers that expect the flat pair; the empty path is the
    /// sole signal of "no route" there, a zero total alone is not.
    pub fn into_legacy(self) -> (Vec<LocationId>, Hardship) {
        match self.into_route() {
            Some(r) => (r.path, r.total_hardship),
            None => (Vec::new(), 0),
        }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable safest-route search.
///
/// Implementations must be `Send + Sync`: the planner may fan queries out
/// across Rayon workers sharing one router and one graph.
pub trait Router: Send + Sync {
    /// Find the minimum-hardship route from `start` to `end`.
    ///
    /// Unknown ids are unreachable, never a panic.
    fn route(&self, graph: &RouteGraph, start: LocationId, end: LocationId) -> RouteOutcome;
}

/// Checks shared by every router.  `Some` short-circuits the search.
fn trivial_outcome(graph: &RouteGraph, start: LocationId, end: LocationId) -> Option<RouteOutcome> {
    if !graph.contains(start) || !graph.contains(end) {
        return Some(RouteOutcome::NotFound);
    }
    if start == end {
        return Some(RouteOutcome::SameNode(start));
    }
    None
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with a binary-heap frontier.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &RouteGraph, start: LocationId, end: LocationId) -> RouteOutcome {
        if let Some(outcome) = trivial_outcome(graph, start, end) {
            return outcome;
        }

        let n = graph.location_count();
        let mut dist    = vec![Hardship::MAX; n];
        let mut prev    = vec![LocationId::UNSET; n];
        let mut settled = vec![false; n];

        dist[start.index()] = 0;

        // Reverse turns the max-heap into a min-heap; LocationId breaks ties.
        let mut heap: BinaryHeap<Reverse<(Hardship, LocationId)>> = BinaryHeap::new();
        heap.push(Reverse((0, start)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if settled[node.index()] || cost > dist[node.index()] {
                continue;
            }
            settled[node.index()] = true;

            if node == end {
                return RouteOutcome::Found(reconstruct(&prev, start, end, cost));
            }

            for (neighbor, w) in graph.neighbors(node) {
                if settled[neighbor.index()] {
                    continue;
                }
                let new_cost = cost + w;
                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev[neighbor.index()] = node;
                    heap.push(Reverse((new_cost, neighbor)));
                }
            }
        }

        RouteOutcome::NotFound
    }
}

// ── ScanRouter ────────────────────────────────────────────────────────────────

/// Dijkstra's algorithm selecting the next location by scanning every
/// unvisited one.
///
/// Quadratic, but allocation-light and perfectly adequate for a world map of
/// a few dozen locations.  Also serves as a cross-check for
/// [`DijkstraRouter`].
pub struct ScanRouter;

impl Router for ScanRouter {
    fn route(&self, graph: &RouteGraph, start: LocationId, end: LocationId) -> RouteOutcome {
        if let Some(outcome) = trivial_outcome(graph, start, end) {
            return outcome;
        }

        let n = graph.location_count();
        let mut dist    = vec![Hardship::MAX; n];
        let mut prev    = vec![LocationId::UNSET; n];
        let mut visited = vec![false; n];

        dist[start.index()] = 0;

        loop {
            // Lowest index wins ties: strict `<` keeps the first minimum.
            let mut current = None;
            let mut best = Hardship::MAX;
            for i in 0..n {
                if !visited[i] && dist[i] < best {
                    best = dist[i];
                    current = Some(i);
                }
            }
            // Everything left is unreachable.
            let Some(cur) = current else { break };
            visited[cur] = true;

            let node = LocationId(cur as u16);
            if node == end {
                return RouteOutcome::Found(reconstruct(&prev, start, end, best));
            }

            for (neighbor, w) in graph.neighbors(node) {
                if visited[neighbor.index()] {
                    continue;
                }
                let new_cost = best + w;
                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev[neighbor.index()] = node;
                }
            }
        }

        RouteOutcome::NotFound
    }
}

// ── Shared internals ──────────────────────────────────────────────────────────

fn reconstruct(prev: &[LocationId], start: LocationId, end: LocationId, total: Hardship) -> Route {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        cur = prev[cur.index()];
        debug_assert!(cur.is_set(), "predecessor chain broken before reaching start");
        path.push(cur);
    }
    path.reverse();
    Route { path, total_hardship: total }
}
