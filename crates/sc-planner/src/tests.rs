//! Unit tests for sc-planner.

#[cfg(test)]
mod planning {
    use sc_network::{DijkstraRouter, ScanRouter};
    use sc_world::WorldMap;

    use crate::{PlanStatus, PlannerBuilder, RoutePlanner};

    #[test]
    fn china_to_usa() {
        let planner = RoutePlanner::builtin();
        let world = planner.world();
        let plan = planner.plan("China", "USA");

        assert_eq!(plan.start, world.graph.id_of("Shanghai"));
        assert_eq!(plan.end, world.graph.id_of("NYC"));
        let route = plan.route().expect("route between Shanghai and New York");
        assert_eq!(route.start(), plan.start);
        assert_eq!(route.end(), plan.end);
        assert_eq!(world.graph.path_hardship(&route.path), Some(route.total_hardship));
        assert_eq!(plan.total_hardship(), Some(13));
        assert_eq!(
            plan.describe(world).as_deref(),
            Some("Shanghai → Tokyo → Los Angeles → New York"),
        );
    }

    #[test]
    fn unresolved_inputs() {
        let planner = RoutePlanner::builtin();

        let plan = planner.plan("Atlantis", "USA");
        assert_eq!(plan.status, PlanStatus::Unresolved { seller_missing: true, import_missing: false });
        assert!(plan.start.is_none());
        assert!(plan.end.is_some());

        let plan = planner.plan("China", "");
        assert_eq!(plan.status, PlanStatus::Unresolved { seller_missing: false, import_missing: true });

        let plan = planner.plan("", "");
        assert_eq!(plan.status, PlanStatus::Unresolved { seller_missing: true, import_missing: true });
        assert!(plan.describe(planner.world()).is_none());
        assert!(plan.names(planner.world()).is_empty());
    }

    #[test]
    fn same_location_skips_router() {
        let planner = RoutePlanner::builtin();
        // Both resolve to Shanghai.
        let plan = planner.plan("China", "Shanghai");
        let shanghai = planner.world().graph.id_of("Shanghai").unwrap();
        assert_eq!(plan.status, PlanStatus::SameLocation { location: shanghai });
        assert!(!plan.is_routed());
        assert!(plan.is_endpoint(shanghai));
    }

    #[test]
    fn same_location_allowed() {
        let planner = PlannerBuilder::new(WorldMap::builtin(), DijkstraRouter)
            .allow_same_location(true)
            .build()
            .unwrap();
        let plan = planner.plan("Japan", "Tokyo");
        let tokyo = planner.world().graph.id_of("Tokyo").unwrap();
        let route = plan.route().unwrap();
        assert_eq!(route.path, vec![tokyo]);
        assert_eq!(route.total_hardship, 0);
        assert_eq!(plan.describe(planner.world()).as_deref(), Some("Tokyo"));
    }

    #[test]
    fn routers_agree() {
        let world = WorldMap::builtin();
        let fast = PlannerBuilder::new(world, DijkstraRouter).build().unwrap();
        let scan = PlannerBuilder::new(world, ScanRouter).build().unwrap();
        for (s, i) in [("China", "USA"), ("Texas", "Germany"), ("Brazil", "India"), ("Durban", "Busan")] {
            assert_eq!(fast.plan(s, i).total_hardship(), scan.plan(s, i).total_hardship(), "{s} -> {i}");
        }
    }

    #[test]
    fn idempotent() {
        let planner = RoutePlanner::builtin();
        assert_eq!(planner.plan("Texas", "Japan"), planner.plan("Texas", "Japan"));
    }

    #[test]
    fn plan_many_preserves_order() {
        let planner = RoutePlanner::builtin();
        let pairs = [("China", "USA"), ("Atlantis", "USA"), ("uk", "France")];
        let plans = planner.plan_many(&pairs);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].seller, "China");
        assert!(plans[0].is_routed());
        assert!(matches!(plans[1].status, PlanStatus::Unresolved { .. }));
        // London → Paris is a direct hop of hardship 2.
        assert_eq!(plans[2].total_hardship(), Some(2));
    }
}

#[cfg(test)]
mod disconnected {
    use sc_world::load_world_reader;

    use crate::{PlanStatus, PlannerBuilder, PlannerError, RouterKind};

    #[test]
    fn no_route_is_not_zero_cost() {
        let locations   = "key,name,x,y\nA,Alpha,0,0\nB,Bravo,5,5\n";
        let connections = "from,to,hardship\n";
        let world = load_world_reader(locations.as_bytes(), connections.as_bytes(), None::<&[u8]>).unwrap();
        let planner = PlannerBuilder::new(&world, RouterKind::Scan).build().unwrap();

        let plan = planner.plan("alpha", "bravo");
        assert_eq!(plan.status, PlanStatus::NoRoute);
        assert_eq!(plan.total_hardship(), None);
        assert!(plan.highlighted_connections(&world).is_empty());
    }

    #[test]
    fn empty_world_rejected() {
        let world = load_world_reader(
            "key,name,x,y\n".as_bytes(),
            "from,to,hardship\n".as_bytes(),
            None::<&[u8]>,
        )
        .unwrap();
        let err = PlannerBuilder::new(&world, RouterKind::Dijkstra).build().err().unwrap();
        assert!(matches!(err, PlannerError::EmptyWorld));
    }
}

#[cfg(test)]
mod rendering {
    use crate::RoutePlanner;

    #[test]
    fn highlighted_connections_follow_route() {
        let planner = RoutePlanner::builtin();
        let world = planner.world();
        let plan = planner.plan("China", "USA");
        let route = plan.route().unwrap();

        let lit = plan.highlighted_connections(world);
        // Shanghai–Tokyo is declared twice, so four lines light up for three hops.
        assert_eq!(route.hop_count(), 3);
        assert_eq!(lit.len(), 4);
        for h in &lit {
            assert!(route.uses_hop(h.from, h.to));
            let a = world.graph.location(h.from).unwrap().point;
            let b = world.graph.location(h.to).unwrap().point;
            assert_eq!(h.label_at, a.midpoint(b));
        }
        let total: u32 = lit.iter().map(|h| h.hardship).sum();
        assert_eq!(total, 2 + 2 + 7 + 4);
    }

    #[test]
    fn node_roles() {
        let planner = RoutePlanner::builtin();
        let g = &planner.world().graph;
        let plan = planner.plan("China", "USA");
        let tokyo = g.id_of("Tokyo").unwrap();
        let paris = g.id_of("Paris").unwrap();
        assert!(plan.on_route(tokyo));
        assert!(!plan.is_endpoint(tokyo));
        assert!(!plan.on_route(paris));
        assert!(plan.is_endpoint(g.id_of("NYC").unwrap()));
    }

    #[test]
    fn plan_serializes_with_status_tag() {
        let planner = RoutePlanner::builtin();
        let json = serde_json::to_value(planner.plan("China", "USA")).unwrap();
        assert_eq!(json["status"], "routed");
        assert_eq!(json["route"]["total_hardship"], 13);
        assert_eq!(json["seller"], "China");

        let json = serde_json::to_value(planner.plan("Atlantis", "USA")).unwrap();
        assert_eq!(json["status"], "unresolved");
        assert_eq!(json["seller_missing"], true);
    }
}

#[cfg(test)]
mod config {
    use sc_world::WorldMap;

    use crate::{PlannerConfig, PlannerError, RoutePlanner, RouterKind};

    #[test]
    fn defaults_from_empty_object() {
        let cfg = PlannerConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert_eq!(cfg.router, RouterKind::Dijkstra);
        assert!(!cfg.allow_same_location);
    }

    #[test]
    fn parse_full() {
        let cfg = PlannerConfig::from_json_str(r#"{ "router": "scan", "allow_same_location": true }"#).unwrap();
        assert_eq!(cfg.router, RouterKind::Scan);
        assert!(cfg.allow_same_location);
        assert_eq!(PlannerConfig::from_json_str(&cfg.to_json_string().unwrap()).unwrap(), cfg);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = PlannerConfig::from_json_str(r#"{ "routr": "scan" }"#).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn router_kind_from_str() {
        assert_eq!("Dijkstra".parse::<RouterKind>().unwrap(), RouterKind::Dijkstra);
        assert_eq!(" scan ".parse::<RouterKind>().unwrap(), RouterKind::Scan);
        assert!("astar".parse::<RouterKind>().is_err());
    }

    #[test]
    fn with_config_uses_configured_router() {
        let cfg = PlannerConfig { router: RouterKind::Scan, allow_same_location: true };
        let planner = RoutePlanner::with_config(WorldMap::builtin(), cfg.clone()).unwrap();
        assert_eq!(planner.config(), &cfg);
        assert!(planner.plan("Japan", "Tokyo").is_routed());
    }
}

#[cfg(test)]
mod observer {
    use sc_world::{MatchSource, Resolution};

    use crate::{PlanObserver, RoutePlan, RoutePlanner};

    #[derive(Default)]
    struct Recorder {
        resolved: Vec<(&'static str, String, Option<MatchSource>)>,
        plans:    usize,
    }

    impl PlanObserver for Recorder {
        fn on_resolved(&mut self, role: &'static str, input: &str, resolution: Option<Resolution>) {
            self.resolved.push((role, input.to_owned(), resolution.map(|r| r.source)));
        }

        fn on_plan(&mut self, _plan: &RoutePlan) {
            self.plans += 1;
        }
    }

    #[test]
    fn callbacks_fire_in_order() {
        let planner = RoutePlanner::builtin();
        let mut rec = Recorder::default();
        planner.plan_observed("Shanghai", "Atlantis", &mut rec);
        assert_eq!(
            rec.resolved,
            vec![
                ("seller", "Shanghai".to_owned(), Some(MatchSource::Name)),
                ("import", "Atlantis".to_owned(), None),
            ],
        );
        assert_eq!(rec.plans, 1);
    }
}

#[cfg(test)]
mod analytics {
    use crate::{
        AnalysisReport, AnalysisRequest, AnalyticsOverview, AnalyticsSource, ModelInfo,
        PlannerError, PlannerResult, RiskLevel, StaticAnalytics, load_dashboard,
    };

    struct Offline;

    impl AnalyticsSource for Offline {
        fn fetch_model_info(&self) -> PlannerResult<ModelInfo> {
            Err(PlannerError::Analytics("connection refused".into()))
        }
        fn fetch_analytics(&self) -> PlannerResult<AnalyticsOverview> {
            Err(PlannerError::Analytics("connection refused".into()))
        }
        fn post_analysis(&self, _request: &AnalysisRequest) -> PlannerResult<AnalysisReport> {
            Err(PlannerError::Analytics("connection refused".into()))
        }
    }

    #[test]
    fn static_source_serves_fallback_figures() {
        let source = StaticAnalytics::default();
        let overview = source.fetch_analytics().unwrap();
        assert_eq!(overview.active_routes, 24);
        assert_eq!(overview.active_alerts, 7);
        assert_eq!(overview.reliability_score, 89);

        let report = source
            .post_analysis(&AnalysisRequest::new("Semiconductors", "China", "USA"))
            .unwrap();
        assert_eq!(report.risk_score, 72);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.risk_factors.len(), 4);
        for factor in &report.risk_factors {
            assert_eq!(factor.level, RiskLevel::from_score(factor.impact), "{}", factor.name);
        }
        assert_eq!(report.recommended_routes.len(), 3);
    }

    #[test]
    fn request_validation() {
        let source = StaticAnalytics::default();
        let err = source.post_analysis(&AnalysisRequest::new("Chips", "", "USA")).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidRequest(_)));
        let err = source.post_analysis(&AnalysisRequest::new(" ", "China", "USA")).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidRequest(_)));
    }

    #[test]
    fn risk_buckets() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(32), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(33), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(65), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(66), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
        assert_eq!(RiskLevel::High.to_string(), "High");
    }

    #[test]
    fn request_json_matches_service_fields() {
        let req: AnalysisRequest = serde_json::from_str(
            r#"{ "component_type": "Batteries", "seller_location": "China", "import_location": "Texas" }"#,
        )
        .unwrap();
        assert_eq!(req, AnalysisRequest::new("Batteries", "China", "Texas"));
    }

    #[test]
    fn dashboard_online() {
        let snap = load_dashboard(&StaticAnalytics::default());
        assert!(!snap.offline);
        assert!(snap.model.is_some());
    }

    #[test]
    fn dashboard_falls_back_when_offline() {
        let snap = load_dashboard(&Offline);
        assert!(snap.offline);
        assert!(snap.model.is_none());
        assert_eq!(snap.overview, StaticAnalytics::default().overview);
    }
}
