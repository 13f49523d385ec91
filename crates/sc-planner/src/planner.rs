//! The route planner and its builder.

use sc_network::{Route, RouteOutcome, Router};
use sc_world::WorldMap;

use crate::observer::{NoopObserver, PlanObserver};
use crate::plan::{PlanStatus, RoutePlan};
use crate::{PlannerConfig, PlannerError, PlannerResult, RouterKind};

/// Resolves a seller and an import location against a [`WorldMap`] and
/// computes the safest route between them.
///
/// Holds only shared references and an immutable router, so one planner can
/// serve any number of threads.  Create via [`PlannerBuilder`].
pub struct RoutePlanner<'w, R: Router = RouterKind> {
    world:  &'w WorldMap,
    router: R,
    config: PlannerConfig,
}

impl<'w, R: Router> RoutePlanner<'w, R> {
    pub fn world(&self) -> &'w WorldMap {
        self.world
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route from `seller` to `import`.
    pub fn plan(&self, seller: &str, import: &str) -> RoutePlan {
        self.plan_observed(seller, import, &mut NoopObserver)
    }

    /// Like [`plan`](Self::plan), reporting progress to `observer`.
    pub fn plan_observed<O: PlanObserver + ?Sized>(
        &self,
        seller:   &str,
        import:   &str,
        observer: &mut O,
    ) -> RoutePlan {
        let resolver = &self.world.resolver;

        let seller_res = resolver.resolve_with_source(seller);
        observer.on_resolved("seller", seller, seller_res);
        let import_res = resolver.resolve_with_source(import);
        observer.on_resolved("import", import, import_res);

        let start = seller_res.map(|r| r.id);
        let end   = import_res.map(|r| r.id);

        let status = match (start, end) {
            (Some(s), Some(e)) if s == e && !self.config.allow_same_location => {
                tracing::debug!(location = %self.world.name_of(s), "seller and import resolve to the same location");
                PlanStatus::SameLocation { location: s }
            }
            (Some(s), Some(e)) => match self.router.route(&self.world.graph, s, e) {
                RouteOutcome::Found(route) => PlanStatus::Routed { route },
                RouteOutcome::SameNode(id) => PlanStatus::Routed { route: Route::single(id) },
                RouteOutcome::NotFound => {
                    tracing::warn!(
                        from = %self.world.name_of(s),
                        to   = %self.world.name_of(e),
                        "no connection chain between resolved locations"
                    );
                    PlanStatus::NoRoute
                }
            },
            _ => {
                tracing::warn!(
                    seller,
                    import,
                    seller_missing = start.is_none(),
                    import_missing = end.is_none(),
                    "could not resolve location"
                );
                PlanStatus::Unresolved {
                    seller_missing: start.is_none(),
                    import_missing: end.is_none(),
                }
            }
        };

        let plan = RoutePlan {
            seller: seller.to_owned(),
            import: import.to_owned(),
            start,
            end,
            status,
        };
        if let Some(route) = plan.route() {
            tracing::debug!(
                hops     = route.hop_count(),
                hardship = route.total_hardship,
                "safest route found"
            );
        }
        observer.on_plan(&plan);
        plan
    }

    /// Plan every `(seller, import)` pair, preserving input order.
    ///
    /// With the `parallel` feature the pairs are planned on the Rayon pool.
    pub fn plan_many<S: AsRef<str> + Sync>(&self, pairs: &[(S, S)]) -> Vec<RoutePlan> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(s, i)| self.plan(s.as_ref(), i.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(s, i)| self.plan(s.as_ref(), i.as_ref()))
                .collect()
        }
    }
}

impl<'w> RoutePlanner<'w, RouterKind> {
    /// Planner over `world` using the router named in `config`.
    pub fn with_config(world: &'w WorldMap, config: PlannerConfig) -> PlannerResult<Self> {
        let router = config.router;
        PlannerBuilder::new(world, router).config(config).build()
    }
}

impl RoutePlanner<'static, RouterKind> {
    /// Default planner over the built-in world map.
    pub fn builtin() -> Self {
        Self {
            world:  WorldMap::builtin(),
            router: RouterKind::default(),
            config: PlannerConfig::default(),
        }
    }
}

// ── PlannerBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`RoutePlanner`].
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(WorldMap::builtin(), DijkstraRouter)
///     .allow_same_location(true)
///     .build()?;
/// let plan = planner.plan("China", "USA");
/// ```
pub struct PlannerBuilder<'w, R: Router> {
    world:  &'w WorldMap,
    router: R,
    config: PlannerConfig,
}

impl<'w, R: Router> PlannerBuilder<'w, R> {
    pub fn new(world: &'w WorldMap, router: R) -> Self {
        Self { world, router, config: PlannerConfig::default() }
    }

    /// Replace the whole configuration.
    ///
    /// `config.router` only matters for [`RoutePlanner::with_config`]; here
    /// the router passed to [`new`](Self::new) is always used.
    pub fn config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn allow_same_location(mut self, allow: bool) -> Self {
        self.config.allow_same_location = allow;
        self
    }

    /// Validate and produce the planner.  Fails on a world with no locations.
    pub fn build(self) -> PlannerResult<RoutePlanner<'w, R>> {
        if self.world.graph.is_empty() {
            return Err(PlannerError::EmptyWorld);
        }
        Ok(RoutePlanner {
            world:  self.world,
            router: self.router,
            config: self.config,
        })
    }
}
