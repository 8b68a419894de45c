//! The fixed wind-speed color scale and storm-category labels.

/// Color value in RGBA format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Wind speed color scale (m/s), RdYlBu-style discrete bins.
///
/// Bin edges match the map legend: 20/30/40/45/50/55/60/70/80. The
/// scale is deliberately stepped rather than continuous so the heatmap
/// reads like the legend and compresses to an indexed PNG.
pub fn wind_speed_color(speed_ms: f64) -> Color {
    match speed_ms {
        s if s >= 80.0 => Color::new(165, 0, 38, 255),
        s if s >= 70.0 => Color::new(215, 48, 39, 255),
        s if s >= 60.0 => Color::new(244, 109, 67, 255),
        s if s >= 55.0 => Color::new(253, 174, 97, 255),
        s if s >= 50.0 => Color::new(254, 224, 144, 255),
        s if s >= 45.0 => Color::new(255, 255, 191, 255),
        s if s >= 40.0 => Color::new(171, 217, 233, 255),
        s if s >= 30.0 => Color::new(116, 173, 209, 255),
        s if s >= 20.0 => Color::new(69, 117, 180, 255),
        _ => Color::new(49, 54, 149, 255),
    }
}

/// Saffir-Simpson style category for a sustained wind speed in m/s.
pub fn storm_category(speed_ms: f64) -> &'static str {
    let knots = speed_ms * 1.944;
    if knots >= 137.0 {
        "Category 5"
    } else if knots >= 113.0 {
        "Category 4"
    } else if knots >= 96.0 {
        "Category 3"
    } else if knots >= 83.0 {
        "Category 2"
    } else if knots >= 64.0 {
        "Category 1"
    } else if knots >= 34.0 {
        "Tropical Storm"
    } else {
        "Tropical Depression"
    }
}
