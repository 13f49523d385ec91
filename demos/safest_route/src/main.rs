//! safest_route — plan the safest supply route between two free-text
//! locations and print it the way the dashboard map would show it.
//!
//! ```text
//! safest_route China USA
//! safest_route "Texas" "South Korea" --json
//! safest_route seller import --world ./tables --router scan
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for resolution details) so `--json`
//! output on stdout stays machine-readable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sc_planner::{
    AnalysisRequest, AnalyticsSource, PlanStatus, PlannerConfig, RoutePlan, RoutePlanner,
    RouterKind, StaticAnalytics, load_dashboard,
};
use sc_world::{WorldMap, load_world_dir};

#[derive(Parser, Debug)]
#[command(about = "Find the minimum-hardship route between two locations")]
struct Args {
    /// Where the goods ship from, e.g. "China" or "Port of Rotterdam".
    seller: String,

    /// Where the goods are imported, e.g. "USA" or "Texas".
    import: String,

    /// Directory with locations.csv, connections.csv and optional aliases.csv.
    /// Defaults to the built-in world map.
    #[arg(long)]
    world: Option<PathBuf>,

    /// Planner configuration as a JSON file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured search: "dijkstra" or "scan".
    #[arg(long)]
    router: Option<RouterKind>,

    /// Component type; when given, a risk analysis is attached.
    #[arg(long)]
    component: Option<String>,

    /// Print the plan as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            PlannerConfig::from_json_str(&text)?
        }
        None => PlannerConfig::default(),
    };
    if let Some(router) = args.router {
        config.router = router;
    }
    tracing::debug!(?config, "planner config");

    let loaded;
    let world: &WorldMap = match &args.world {
        Some(dir) => {
            loaded = load_world_dir(dir)
                .with_context(|| format!("loading world tables from {}", dir.display()))?;
            &loaded
        }
        None => WorldMap::builtin(),
    };

    let planner = RoutePlanner::with_config(world, config)?;
    let plan = planner.plan(&args.seller, &args.import);

    let analytics = StaticAnalytics::default();
    let analysis = match &args.component {
        Some(component) => Some(analytics.post_analysis(&AnalysisRequest::new(
            component.as_str(),
            args.seller.as_str(),
            args.import.as_str(),
        ))?),
        None => None,
    };

    if args.json {
        let out = serde_json::json!({
            "plan":        plan,
            "names":       plan.names(world),
            "highlighted": plan.highlighted_connections(world),
            "analysis":    analysis,
            "dashboard":   load_dashboard(&analytics),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_text(world, &plan);
        if let Some(report) = analysis {
            println!();
            println!("Risk score: {}/100 ({} risk)", report.risk_score, report.risk_level);
            for f in &report.risk_factors {
                println!("  {:<24} {:>3}%  {}", f.name, f.impact, f.level);
            }
        }
    }

    Ok(())
}

fn print_text(world: &WorldMap, plan: &RoutePlan) {
    let name = |id: Option<sc_core::LocationId>| id.map_or("?", |id| world.name_of(id));

    match &plan.status {
        PlanStatus::Routed { route } => {
            println!("Safest Route Found");
            println!("Path: {}", plan.names(world).join(" → "));
            println!("Total Hardship Value: {}", route.total_hardship);
            println!("Lower hardship values indicate safer supply chain routes");
        }
        PlanStatus::SameLocation { location } => {
            println!("Seller and import both resolve to {}; nothing to route.", world.name_of(*location));
        }
        PlanStatus::NoRoute => {
            println!("No safe route found from {} to {}.", name(plan.start), name(plan.end));
        }
        PlanStatus::Unresolved { seller_missing, import_missing } => {
            if *seller_missing {
                println!("Unknown seller location: {:?}", plan.seller);
            }
            if *import_missing {
                println!("Unknown import location: {:?}", plan.import);
            }
        }
    }
}
