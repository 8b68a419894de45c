//! Output rendering for hazard visualization.
//!
//! Two render paths for the interpolated wind field:
//! - heatmap: the IDW grid color-mapped through the fixed wind-speed
//!   scale into an RGBA image, encoded as PNG
//! - contours: stitched isolines serialized as GeoJSON LineStrings for
//!   an external vector renderer

pub mod colormap;
pub mod error;
pub mod geojson;
pub mod heatmap;
pub mod png;

pub use colormap::{storm_category, wind_speed_color, Color};
pub use error::{RenderError, RenderResult};
pub use geojson::{contour_features, Feature, FeatureCollection, Geometry};
pub use heatmap::{render_heatmap, Heatmap};
pub use png::{create_png, create_png_auto};
