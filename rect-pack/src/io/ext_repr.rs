use serde::{Deserialize, Serialize};

/// External representation of a problem instance: boundaries to fill and rectangles to fill them with
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Closed boundaries, packed or analysed independently of each other
    pub boundaries: Vec<ExtSPolygon>,
    /// Template rectangles, each one is packed into every boundary
    #[serde(default)]
    pub rectangles: Vec<ExtRectangle>,
}

/// External representation of a [`SPolygon`](crate::geometry::primitives::SPolygon).
/// A closed ring of points, the closing point may be repeated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSPolygon(pub Vec<(f64, f64)>);

/// External representation of an [`ORect`](crate::geometry::primitives::ORect).
/// A rectangle with one corner at `origin`, spanning `width` along its x-axis and `height` along its y-axis,
/// where the x-axis is turned `rotation` radians counterclockwise from the world x-axis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRectangle {
    pub origin: (f64, f64),
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// External representation of a [`Placement`](crate::packing::Placement)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacement {
    /// Index of the boundary in the instance
    pub boundary: usize,
    /// The placed rectangle
    pub rectangle: ExtRectangle,
    /// Center of the placed rectangle
    pub anchor: (f64, f64),
    /// Translation applied to the template rectangle
    pub translation: (f64, f64),
    /// Offset applied to the grid point
    pub grid_offset: (f64, f64),
    /// Whether the rectangle was turned to fit
    pub rotated: bool,
}

/// A boundary which could not be processed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFailure {
    /// Index of the boundary in the instance
    pub boundary: usize,
    pub reason: String,
}

/// External representation of the result of packing an instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackSolution {
    /// The name of the instance
    pub name: String,
    /// All placements, in boundary order
    pub placements: Vec<ExtPlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<ExtFailure>,
    /// Time taken to pack the instance (in milliseconds)
    pub run_time_ms: u64,
}

/// Major direction of a single boundary
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtDirection {
    /// Index of the boundary in the instance
    pub boundary: usize,
    /// Undirected angle in radians, in `[0, π)`
    pub angle: f64,
    /// The same angle, in degrees
    pub angle_deg: f64,
}

/// External representation of the major directions of all boundaries in an instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtDirectionSolution {
    /// The name of the instance
    pub name: String,
    pub directions: Vec<ExtDirection>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub failures: Vec<ExtFailure>,
}
