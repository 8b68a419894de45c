//! The regular lat/lon node grid produced by IDW interpolation.

use hazard_common::{BoundingBox, GeoPoint};
use serde::{Deserialize, Serialize};

/// A regular rectangular node lattice with a value and a validity flag
/// per node.
///
/// Nodes are laid out row-major from the south-west origin: index
/// `iy * nx + ix`, longitude `origin.lon + ix * dx`, latitude
/// `origin.lat + iy * dy`. The grid is inclusive of both extremes (an
/// `nx`×`ny` node grid, not a cell-count grid). A node's value is only
/// meaningful where its validity flag is set; invalid nodes carry 0 and
/// mean "no data", never a real zero reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarGrid {
    nx: usize,
    ny: usize,
    origin: GeoPoint,
    dx: f64,
    dy: f64,
    values: Vec<f64>,
    valid: Vec<bool>,
    value_range: Option<(f64, f64)>,
}

impl ScalarGrid {
    /// Assemble a grid from its parts. `values` and `valid` must both
    /// have `nx * ny` entries.
    pub(crate) fn from_parts(
        nx: usize,
        ny: usize,
        origin: GeoPoint,
        dx: f64,
        dy: f64,
        values: Vec<f64>,
        valid: Vec<bool>,
        value_range: Option<(f64, f64)>,
    ) -> Self {
        debug_assert_eq!(values.len(), nx * ny);
        debug_assert_eq!(valid.len(), nx * ny);
        Self {
            nx,
            ny,
            origin,
            dx,
            dy,
            values,
            valid,
            value_range,
        }
    }

    /// An empty grid with no nodes, used for degenerate input.
    pub(crate) fn empty() -> Self {
        Self {
            nx: 0,
            ny: 0,
            origin: GeoPoint::new(0.0, 0.0),
            dx: 0.0,
            dy: 0.0,
            values: Vec::new(),
            valid: Vec::new(),
            value_range: None,
        }
    }

    /// Number of nodes in the longitude direction.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of nodes in the latitude direction.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// South-west grid origin.
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// Node spacing in longitude degrees.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Node spacing in latitude degrees.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Flat index of a node.
    pub fn index(&self, ix: usize, iy: usize) -> usize {
        iy * self.nx + ix
    }

    /// Value at a node. Only meaningful where [`is_valid`] is true.
    ///
    /// [`is_valid`]: ScalarGrid::is_valid
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[self.index(ix, iy)]
    }

    /// Whether a node carries real data.
    pub fn is_valid(&self, ix: usize, iy: usize) -> bool {
        self.valid[self.index(ix, iy)]
    }

    /// Geographic position of a node.
    pub fn node_position(&self, ix: usize, iy: usize) -> GeoPoint {
        GeoPoint::new(
            self.origin.lat + iy as f64 * self.dy,
            self.origin.lon + ix as f64 * self.dx,
        )
    }

    /// Convert fractional grid-space coordinates to geographic
    /// coordinates (used for interpolated edge crossings).
    pub fn grid_to_geo(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(self.origin.lat + y * self.dy, self.origin.lon + x * self.dx)
    }

    /// Geographic extent of the node grid.
    pub fn bbox(&self) -> BoundingBox {
        if self.nx == 0 || self.ny == 0 {
            return BoundingBox::new(self.origin.lon, self.origin.lat, self.origin.lon, self.origin.lat);
        }
        BoundingBox::new(
            self.origin.lon,
            self.origin.lat,
            self.origin.lon + (self.nx - 1) as f64 * self.dx,
            self.origin.lat + (self.ny - 1) as f64 * self.dy,
        )
    }

    /// Raw value array, row-major from the south-west origin.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Raw validity array, parallel to [`values`].
    ///
    /// [`values`]: ScalarGrid::values
    pub fn validity(&self) -> &[bool] {
        &self.valid
    }

    /// Observed min/max over valid nodes, for caller-side
    /// normalization. `None` when no node is valid.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.value_range
    }

    /// Number of valid nodes.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|&&v| v).count()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the grid has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
