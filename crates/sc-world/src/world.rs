//! `WorldMap`: a route graph paired with its resolver.

use std::sync::OnceLock;

use sc_core::LocationId;
use sc_network::{Location, RouteGraph};

use crate::atlas;
use crate::resolver::LocationResolver;
use crate::WorldResult;

/// Everything needed to turn two free-text locations into a route.
///
/// Immutable after construction.  The built-in map is built once per process
/// and shared through [`WorldMap::builtin`].
pub struct WorldMap {
    pub graph:    RouteGraph,
    pub resolver: LocationResolver,
}

static BUILTIN: OnceLock<WorldMap> = OnceLock::new();

impl WorldMap {
    /// Pair a graph with a resolver built from `(alias, key)` pairs.
    pub fn new<'a, I>(graph: RouteGraph, aliases: I) -> WorldResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let resolver = LocationResolver::new(&graph, aliases)?;
        Ok(Self { graph, resolver })
    }

    /// Build a fresh map from the built-in atlas tables.
    pub fn from_atlas() -> WorldResult<Self> {
        let graph = atlas::build_graph()?;
        Self::new(graph, atlas::ALIASES.iter().copied())
    }

    /// The process-wide built-in map, built on first use.
    pub fn builtin() -> &'static WorldMap {
        BUILTIN.get_or_init(|| {
            let world = Self::from_atlas()
                .expect("built-in atlas tables reference only declared locations");
            tracing::debug!(
                locations   = world.graph.location_count(),
                connections = world.graph.connection_count(),
                aliases     = world.resolver.alias_count(),
                "built-in world map ready"
            );
            world
        })
    }

    /// Resolve free text to a location id.
    pub fn resolve(&self, input: &str) -> Option<LocationId> {
        self.resolver.resolve(input)
    }

    /// Resolve free text straight to the location record.
    pub fn resolve_location(&self, input: &str) -> Option<&Location> {
        self.resolve(input).and_then(|id| self.graph.location(id))
    }

    /// Resolve free text to the location's key (e.g. `"china"` → `"Shanghai"`).
    pub fn resolve_key(&self, input: &str) -> Option<&str> {
        self.resolve_location(input).map(|loc| loc.key.as_str())
    }

    /// Display name of `id`, falling back to the empty string for unknown ids.
    pub fn name_of(&self, id: LocationId) -> &str {
        self.graph.location(id).map_or("", |loc| loc.name.as_str())
    }
}
