//! The analytics seam.
//!
//! Risk scores, model metadata, and dashboard counters come from an external
//! analysis service.  The planner never depends on it: callers inject an
//! [`AnalyticsSource`], and [`StaticAnalytics`] supplies the fixed figures
//! the dashboard shows when no service is reachable.
//!
//! Field names match the service's JSON so the types can be fed straight to
//! `serde_json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{PlannerError, PlannerResult};

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub f1_score:   f32,
    /// RFC 3339 timestamp, passed through untouched.
    pub loaded_at:  String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub active_routes:     u32,
    pub active_alerts:     u32,
    /// Percentage, 0–100.
    pub reliability_score: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a 0–100 risk score: 66 and up is high, 33 and up is medium.
    pub fn from_score(score: u8) -> Self {
        match score {
            66.. => RiskLevel::High,
            33.. => RiskLevel::Medium,
            _    => RiskLevel::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low    => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High   => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub component_type:  String,
    pub seller_location: String,
    pub import_location: String,
    #[serde(default)]
    pub additional_factors: BTreeMap<String, String>,
}

impl AnalysisRequest {
    pub fn new(
        component_type:  impl Into<String>,
        seller_location: impl Into<String>,
        import_location: impl Into<String>,
    ) -> Self {
        Self {
            component_type:     component_type.into(),
            seller_location:    seller_location.into(),
            import_location:    import_location.into(),
            additional_factors: BTreeMap::new(),
        }
    }

    /// Reject requests the service would refuse: both locations and a
    /// component type are required.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.seller_location.trim().is_empty() || self.import_location.trim().is_empty() {
            return Err(PlannerError::InvalidRequest("both seller and import locations are required"));
        }
        if self.component_type.trim().is_empty() {
            return Err(PlannerError::InvalidRequest("a component type is required"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name:        String,
    pub level:       RiskLevel,
    /// Percentage, 0–100.
    pub impact:      u8,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedRoute {
    pub name:          String,
    pub risk:          RiskLevel,
    pub duration_days: u32,
    pub cost_usd:      u32,
    /// Percentage, 0–100.
    pub reliability:   u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 0–100, higher is riskier.
    pub risk_score:         u8,
    /// Overall level as reported by the service.  Not derived from
    /// `risk_score`; the dashboard fallback pairs 72 with `Medium`.
    pub risk_level:         RiskLevel,
    pub risk_factors:       Vec<RiskFactor>,
    pub recommended_routes: Vec<RecommendedRoute>,
}

// ── AnalyticsSource trait ─────────────────────────────────────────────────────

/// Supplier of dashboard analytics.
///
/// Implement over an HTTP client for a live service; use
/// [`StaticAnalytics`] in tests and offline demos.
pub trait AnalyticsSource: Send + Sync {
    fn fetch_model_info(&self) -> PlannerResult<ModelInfo>;

    fn fetch_analytics(&self) -> PlannerResult<AnalyticsOverview>;

    fn post_analysis(&self, request: &AnalysisRequest) -> PlannerResult<AnalysisReport>;
}

// ── StaticAnalytics ───────────────────────────────────────────────────────────

/// In-memory source returning the dashboard's fallback figures.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticAnalytics {
    pub model:    ModelInfo,
    pub overview: AnalyticsOverview,
    pub report:   AnalysisReport,
}

impl Default for StaticAnalytics {
    fn default() -> Self {
        let factor = |name: &str, level, impact, description: &str| RiskFactor {
            name: name.to_owned(),
            level,
            impact,
            description: description.to_owned(),
        };
        let route = |name: &str, risk, duration_days, cost_usd, reliability| RecommendedRoute {
            name: name.to_owned(),
            risk,
            duration_days,
            cost_usd,
            reliability,
        };

        Self {
            model: ModelInfo {
                model_name: "offline".to_owned(),
                f1_score:   0.0,
                loaded_at:  "1970-01-01T00:00:00Z".to_owned(),
            },
            overview: AnalyticsOverview {
                active_routes:     24,
                active_alerts:     7,
                reliability_score: 89,
            },
            report: AnalysisReport {
                risk_score: 72,
                risk_level: RiskLevel::Medium,
                risk_factors: vec![
                    factor("Weather Disruption", RiskLevel::High, 85, "Severe storms expected in route corridor"),
                    factor("Labor Strikes", RiskLevel::Medium, 45, "Port workers strike scheduled for next week"),
                    factor("Political Tensions", RiskLevel::Low, 25, "Stable political environment in transit countries"),
                    factor("International Sanctions", RiskLevel::Medium, 60, "New trade restrictions on specific components"),
                ],
                recommended_routes: vec![
                    route("Primary Route", RiskLevel::Low, 12, 2_450, 94),
                    route("Alternative Route A", RiskLevel::Medium, 15, 2_180, 87),
                    route("Alternative Route B", RiskLevel::High, 10, 3_200, 76),
                ],
            },
        }
    }
}

impl AnalyticsSource for StaticAnalytics {
    fn fetch_model_info(&self) -> PlannerResult<ModelInfo> {
        Ok(self.model.clone())
    }

    fn fetch_analytics(&self) -> PlannerResult<AnalyticsOverview> {
        Ok(self.overview.clone())
    }

    fn post_analysis(&self, request: &AnalysisRequest) -> PlannerResult<AnalysisReport> {
        request.validate()?;
        Ok(self.report.clone())
    }
}

// ── Dashboard snapshot ────────────────────────────────────────────────────────

/// Header figures for the dashboard, with a flag for stale fallback data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub model:    Option<ModelInfo>,
    pub overview: AnalyticsOverview,
    /// `true` if `source` failed and fallback figures are shown.
    pub offline:  bool,
}

/// Fetch model info and overview from `source`, substituting the
/// [`StaticAnalytics`] overview if the service is unreachable.
pub fn load_dashboard(source: &dyn AnalyticsSource) -> DashboardSnapshot {
    let model = source
        .fetch_model_info()
        .inspect_err(|e| tracing::warn!(error = %e, "model info unavailable"))
        .ok();
    let overview = source
        .fetch_analytics()
        .inspect_err(|e| tracing::warn!(error = %e, "analytics overview unavailable, showing fallback figures"))
        .ok();

    let offline = model.is_none() || overview.is_none();
    DashboardSnapshot {
        model,
        overview: overview.unwrap_or_else(|| StaticAnalytics::default().overview),
        offline,
    }
}
