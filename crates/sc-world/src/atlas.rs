//! Built-in world atlas.
//!
//! 25 major ports and trade hubs, 47 declared connections, and the alias
//! table used to resolve country and region names.  Coordinates are in the
//! map view's 650 × 258 SVG space.
//!
//! The connection table is kept exactly as declared, duplicates included
//! (Shanghai–Tokyo, Dubai–Mumbai, Singapore–Sydney appear twice).  Routing
//! picks the cheaper of a parallel pair on its own.

use sc_core::{Hardship, MapPoint};
use sc_network::{NetworkResult, RouteGraph, RouteGraphBuilder};

/// One row of the location table.
#[derive(Copy, Clone, Debug)]
pub struct LocationRow {
    pub key:  &'static str,
    pub name: &'static str,
    pub x:    f32,
    pub y:    f32,
}

/// One row of the connection table.
#[derive(Copy, Clone, Debug)]
pub struct ConnectionRow {
    pub from:     &'static str,
    pub to:       &'static str,
    pub hardship: Hardship,
}

const fn loc(key: &'static str, name: &'static str, x: f32, y: f32) -> LocationRow {
    LocationRow { key, name, x, y }
}

const fn conn(from: &'static str, to: &'static str, hardship: Hardship) -> ConnectionRow {
    ConnectionRow { from, to, hardship }
}

pub const LOCATIONS: &[LocationRow] = &[
    loc("NYC",       "New York",    184.3,  98.0),
    loc("LA",        "Los Angeles", 107.4, 111.3),
    loc("London",    "London",      312.8,  76.6),
    loc("Paris",     "Paris",       317.1,  81.8),
    loc("Berlin",    "Berlin",      336.3,  74.5),
    loc("Tokyo",     "Tokyo",       556.0, 108.0),
    loc("Shanghai",  "Shanghai",    524.2, 116.9),
    loc("Dubai",     "Dubai",       409.2, 128.7),
    loc("Mumbai",    "Mumbai",      439.7, 141.1),
    loc("Singapore", "Singapore",   493.5, 176.3),
    loc("Sydney",    "Sydney",      555.9, 246.4),
    loc("Cairo",     "Cairo",       367.3, 117.2),
    loc("Lagos",     "Lagos",       318.9, 150.0),
    loc("SaoPaulo",  "São Paulo",   246.9, 200.8),
    loc("Mexico",    "Mexico City", 140.6, 140.4),
    loc("Rotterdam", "Rotterdam",   325.2,  72.8),
    loc("Hamburg",   "Hamburg",     339.9,  70.5),
    loc("Antwerp",   "Antwerp",     320.0,  75.2),
    loc("Frankfurt", "Frankfurt",   332.5,  79.2),
    loc("HongKong",  "Hong Kong",   515.8, 150.2),
    loc("Busan",     "Busan",       546.7, 102.5),
    loc("Bangkok",   "Bangkok",     479.5, 145.3),
    loc("Jakarta",   "Jakarta",     490.5, 190.2),
    loc("Durban",    "Durban",      364.2, 210.0),
    loc("Houston",   "Houston",     155.5, 130.5),
];

pub const CONNECTIONS: &[ConnectionRow] = &[
    conn("NYC",       "London",    3),
    conn("NYC",       "LA",        4),
    conn("NYC",       "Mexico",    5),
    conn("London",    "Paris",     2),
    conn("London",    "Berlin",    3),
    conn("Paris",     "Berlin",    2),
    conn("Berlin",    "Dubai",     0),
    conn("Dubai",     "Mumbai",    3),
    conn("Dubai",     "Cairo",     2),
    conn("Mumbai",    "Singapore", 4),
    conn("Singapore", "Tokyo",     4),
    conn("Singapore", "Shanghai",  2),
    conn("Tokyo",     "Shanghai",  2),
    conn("Shanghai",  "Tokyo",     2),
    conn("Sydney",    "Singapore", 5),
    conn("Cairo",     "Lagos",     4),
    conn("LA",        "Mexico",    3),
    conn("Mexico",    "SaoPaulo",  6),
    conn("London",    "Cairo",     4),
    conn("Paris",     "Cairo",     3),
    conn("Mumbai",    "Dubai",     5),
    conn("Singapore", "Sydney",    5),
    conn("LA",        "Tokyo",     7),
    conn("NYC",       "SaoPaulo",  8),
    conn("Sydney",    "SaoPaulo",  7),
    conn("Sydney",    "Lagos",     6),
    conn("SaoPaulo",  "Lagos",     5),
    conn("Rotterdam", "London",    2),
    conn("Rotterdam", "Antwerp",   1),
    conn("Rotterdam", "Hamburg",   2),
    conn("Hamburg",   "Berlin",    2),
    conn("Frankfurt", "Berlin",    2),
    conn("Frankfurt", "Paris",     2),
    conn("Antwerp",   "Paris",     2),
    conn("HongKong",  "Shanghai",  2),
    conn("HongKong",  "Singapore", 3),
    conn("HongKong",  "Tokyo",     3),
    conn("Busan",     "Tokyo",     2),
    conn("Busan",     "Shanghai",  2),
    conn("Bangkok",   "Singapore", 2),
    conn("Bangkok",   "Jakarta",   3),
    conn("Jakarta",   "Singapore", 2),
    conn("Durban",    "Lagos",     5),
    conn("Durban",    "Cairo",     7),
    conn("Houston",   "NYC",       3),
    conn("Houston",   "Mexico",    2),
    conn("Houston",   "SaoPaulo",  7),
];

/// Country, region, and colloquial names → location key.
///
/// Order matters: the resolver returns the first alias found in the input,
/// so longer, more specific names must come before any alias they contain
/// ("south korea" before "korea").
pub const ALIASES: &[(&str, &str)] = &[
    ("usa",                  "NYC"),
    ("america",              "NYC"),
    ("united states",        "NYC"),
    ("california",           "LA"),
    ("china",                "Shanghai"),
    ("japan",                "Tokyo"),
    ("india",                "Mumbai"),
    ("uk",                   "London"),
    ("united kingdom",       "London"),
    ("england",              "London"),
    ("france",               "Paris"),
    ("germany",              "Berlin"),
    ("uae",                  "Dubai"),
    ("united arab emirates", "Dubai"),
    ("australia",            "Sydney"),
    ("brazil",               "SaoPaulo"),
    ("egypt",                "Cairo"),
    ("nigeria",              "Lagos"),
    ("mexico",               "Mexico"),
    ("netherlands",          "Rotterdam"),
    ("south korea",          "Busan"),
    ("korea",                "Busan"),
    ("thailand",             "Bangkok"),
    ("indonesia",            "Jakarta"),
    ("south africa",         "Durban"),
    ("texas",                "Houston"),
];

/// Build the route graph from the built-in tables.
pub fn build_graph() -> NetworkResult<RouteGraph> {
    let mut b = RouteGraphBuilder::with_capacity(LOCATIONS.len(), CONNECTIONS.len());
    for row in LOCATIONS {
        b.add_location(row.key, row.name, MapPoint::new(row.x, row.y))?;
    }
    for row in CONNECTIONS {
        b.connect_keys(row.from, row.to, row.hardship)?;
    }
    Ok(b.build())
}
