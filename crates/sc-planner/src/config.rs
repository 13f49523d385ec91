//! Planner configuration.
//!
//! All fields have defaults, so an empty JSON object is a valid config:
//!
//! ```json
//! { "router": "scan", "allow_same_location": true }
//! ```

use serde::{Deserialize, Serialize};

use sc_core::LocationId;
use sc_network::{DijkstraRouter, RouteGraph, RouteOutcome, Router, ScanRouter};

use crate::{PlannerError, PlannerResult};

/// Which search backs the planner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouterKind {
    /// Binary-heap Dijkstra.
    #[default]
    Dijkstra,
    /// Quadratic scan Dijkstra.
    Scan,
}

impl Router for RouterKind {
    fn route(&self, graph: &RouteGraph, start: LocationId, end: LocationId) -> RouteOutcome {
        match self {
            RouterKind::Dijkstra => DijkstraRouter.route(graph, start, end),
            RouterKind::Scan     => ScanRouter.route(graph, start, end),
        }
    }
}

impl std::str::FromStr for RouterKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RouterKind::Dijkstra),
            "scan"     => Ok(RouterKind::Scan),
            other => Err(PlannerError::Config(format!(
                "unknown router {other:?}: expected \"dijkstra\" or \"scan\""
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Search used when the planner is built with [`RouterKind`].
    pub router: RouterKind,

    /// When `false` (the default), identical seller and import locations
    /// produce [`PlanStatus::SameLocation`](crate::PlanStatus::SameLocation)
    /// and the router is never called.  When `true` they produce a
    /// single-location route of zero hardship.
    pub allow_same_location: bool,
}

impl PlannerConfig {
    pub fn from_json_str(s: &str) -> PlannerResult<Self> {
        serde_json::from_str(s).map_err(|e| PlannerError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> PlannerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PlannerError::Config(e.to_string()))
    }
}
