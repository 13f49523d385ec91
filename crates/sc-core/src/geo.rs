//! Map coordinates.
//!
//! `MapPoint` is a position on the rendered world map (SVG user units), not a
//! geographic coordinate.  It never contributes to route cost; the only
//! non-rendering use is snapping a clicked point to the nearest location.

/// A 2-D point in map space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance in map units.
    #[inline]
    pub fn distance_2(self, other: MapPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Midpoint of the segment `self → other`, where the view places the
    /// hardship label of a highlighted connection.
    #[inline]
    pub fn midpoint(self, other: MapPoint) -> MapPoint {
        MapPoint::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
