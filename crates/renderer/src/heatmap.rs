//! Heatmap rasterization of an interpolated wind-speed grid.

use contour_engine::ScalarGrid;
use hazard_common::BoundingBox;
use tracing::debug;

use crate::colormap::{wind_speed_color, Color};

/// Overlay opacity for valid nodes; invalid nodes are fully
/// transparent so the base map shows through unsampled regions.
const HEATMAP_ALPHA: u8 = 180;

/// An RGBA raster of the grid plus the geographic bounds to pin it to.
#[derive(Debug, Clone)]
pub struct Heatmap {
    /// RGBA pixel data, 4 bytes per pixel, row-major with the top row
    /// at the northernmost latitude.
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Geographic extent of the node grid the image covers.
    pub bounds: BoundingBox,
}

impl Heatmap {
    /// Pixel color at image coordinates (top-left origin).
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let idx = (y * self.width + x) * 4;
        Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }
}

/// Rasterize a grid into a color-mapped RGBA image.
///
/// The grid is stored south row first; image rows are flipped so row 0
/// is the northernmost latitude, matching image conventions. Each valid
/// node becomes one pixel through the wind-speed scale at
/// [`HEATMAP_ALPHA`]; invalid nodes stay transparent.
pub fn render_heatmap(grid: &ScalarGrid) -> Heatmap {
    let width = grid.nx();
    let height = grid.ny();
    let mut pixels = vec![0u8; width * height * 4];

    for iy in 0..height {
        for ix in 0..width {
            let dst_row = height - 1 - iy;
            let dst = (dst_row * width + ix) * 4;
            let color = if grid.is_valid(ix, iy) {
                wind_speed_color(grid.value(ix, iy)).with_alpha(HEATMAP_ALPHA)
            } else {
                Color::transparent()
            };
            pixels[dst] = color.r;
            pixels[dst + 1] = color.g;
            pixels[dst + 2] = color.b;
            pixels[dst + 3] = color.a;
        }
    }

    debug!(
        width,
        height,
        valid_nodes = grid.valid_count(),
        "rendered heatmap"
    );

    Heatmap {
        pixels,
        width,
        height,
        bounds: grid.bbox(),
    }
}
