//! Plan observer trait for logging, metrics, or UI callbacks.

use sc_world::Resolution;

use crate::RoutePlan;

/// Callbacks invoked by [`RoutePlanner::plan_observed`][crate::RoutePlanner::plan_observed].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — remember the last route drawn
///
/// ```rust,ignore
/// struct LastRoute(Option<Vec<LocationId>>);
///
/// impl PlanObserver for LastRoute {
///     fn on_plan(&mut self, plan: &RoutePlan) {
///         self.0 = plan.route().map(|r| r.path.clone());
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once per input string after resolution.  `role` is `"seller"`
    /// or `"import"`.
    fn on_resolved(&mut self, _role: &'static str, _input: &str, _resolution: Option<Resolution>) {}

    /// Called with the finished plan.
    fn on_plan(&mut self, _plan: &RoutePlan) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
