//! `sc-planner` — turns a seller location and an import location into a
//! safest-route plan.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`planner`]   | `RoutePlanner`, `PlannerBuilder`                         |
//! | [`plan`]      | `RoutePlan`, `PlanStatus`, `HighlightedConnection`       |
//! | [`config`]    | `PlannerConfig`, `RouterKind`                            |
//! | [`observer`]  | `PlanObserver` trait, `NoopObserver`                     |
//! | [`analytics`] | `AnalyticsSource` trait, `StaticAnalytics`, wire types   |
//! | [`error`]     | `PlannerError`, `PlannerResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `RoutePlanner::plan_many` fans out over Rayon.          |

pub mod analytics;
pub mod config;
pub mod error;
pub mod observer;
pub mod plan;
pub mod planner;

#[cfg(test)]
mod tests;

pub use analytics::{
    AnalysisReport, AnalysisRequest, AnalyticsOverview, AnalyticsSource, DashboardSnapshot,
    ModelInfo, RecommendedRoute, RiskFactor, RiskLevel, StaticAnalytics, load_dashboard,
};
pub use config::{PlannerConfig, RouterKind};
pub use error::{PlannerError, PlannerResult};
pub use observer::{NoopObserver, PlanObserver};
pub use plan::{HighlightedConnection, PlanStatus, RoutePlan};
pub use planner::{PlannerBuilder, RoutePlanner};
