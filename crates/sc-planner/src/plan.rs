//! Plan results handed to the rendering layer.

use serde::Serialize;

use sc_core::{ConnectionId, Hardship, LocationId, MapPoint};
use sc_network::Route;
use sc_world::WorldMap;

/// What the planner concluded for one seller/import pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanStatus {
    /// At least one input did not resolve.  Nothing is drawn.
    Unresolved { seller_missing: bool, import_missing: bool },
    /// Both inputs resolved to the same location; no route was computed.
    SameLocation { location: LocationId },
    /// A safest route exists.
    Routed { route: Route },
    /// Both inputs resolved but no connection chain joins them.
    NoRoute,
}

/// One seller/import query and its outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub seller: String,
    pub import: String,
    pub start:  Option<LocationId>,
    pub end:    Option<LocationId>,
    #[serde(flatten)]
    pub status: PlanStatus,
}

/// A connection on the chosen route, with the data the map needs to draw it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct HighlightedConnection {
    pub connection: ConnectionId,
    pub from:       LocationId,
    pub to:         LocationId,
    pub hardship:   Hardship,
    /// Where the hardship label goes (segment midpoint).
    pub label_at:   MapPoint,
}

impl RoutePlan {
    pub fn route(&self) -> Option<&Route> {
        match &self.status {
            PlanStatus::Routed { route } => Some(route),
            _ => None,
        }
    }

    pub fn is_routed(&self) -> bool {
        self.route().is_some()
    }

    pub fn total_hardship(&self) -> Option<Hardship> {
        self.route().map(|r| r.total_hardship)
    }

    /// `true` if `id` is on the route (drawn as a path node).
    pub fn on_route(&self, id: LocationId) -> bool {
        self.route().is_some_and(|r| r.path.contains(&id))
    }

    /// `true` if `id` is the resolved start or end (drawn as selected).
    pub fn is_endpoint(&self, id: LocationId) -> bool {
        self.start == Some(id) || self.end == Some(id)
    }

    /// Display names along the route.  Empty when there is no route.
    pub fn names<'w>(&self, world: &'w WorldMap) -> Vec<&'w str> {
        self.route()
            .map(|r| r.path.iter().map(|&id| world.name_of(id)).collect())
            .unwrap_or_default()
    }

    /// `"Shanghai → Tokyo → Los Angeles → New York"`, or `None` without a route.
    pub fn describe(&self, world: &WorldMap) -> Option<String> {
        self.is_routed().then(|| self.names(world).join(" → "))
    }

    /// Every declared connection whose endpoints are consecutive on the route.
    ///
    /// Parallel connections between the same pair are all reported, the way
    /// the map highlights every line drawn between two path nodes.
    pub fn highlighted_connections(&self, world: &WorldMap) -> Vec<HighlightedConnection> {
        let Some(route) = self.route() else {
            return Vec::new();
        };
        let graph = &world.graph;
        graph
            .connections
            .iter()
            .enumerate()
            .filter(|(_, c)| route.uses_hop(c.a, c.b))
            .filter_map(|(i, c)| {
                let from = graph.location(c.a)?;
                let to   = graph.location(c.b)?;
                Some(HighlightedConnection {
                    connection: ConnectionId(i as u16),
                    from:       c.a,
                    to:         c.b,
                    hardship:   c.hardship,
                    label_at:   from.point.midpoint(to.point),
                })
            })
            .collect()
    }
}
