//! Common data types for anutils

use serde::{Deserialize, Serialize};

/// Index into the framework color table (1 = black, 2 = red, ...).
pub type ColorIndex = i16;

/// Marker and line attributes of a drawable object.
///
/// Integer codes follow the usual HEP plotting conventions: marker style
/// 20 is a full circle, line style 1 is solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawAttributes {
    /// Marker style code
    pub marker_style: i16,
    /// Marker size (framework units)
    pub marker_size: f64,
    /// Marker color
    pub marker_color: ColorIndex,
    /// Line style code
    pub line_style: i16,
    /// Line color
    pub line_color: ColorIndex,
    /// Line width in pixels
    pub line_width: i16,
}

impl Default for DrawAttributes {
    fn default() -> Self {
        Self {
            marker_style: 1,
            marker_size: 1.0,
            marker_color: 1,
            line_style: 1,
            line_color: 1,
            line_width: 1,
        }
    }
}

/// One of the three axes of a plottable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
    /// Depth / color axis
    Z,
}

impl AxisKind {
    /// All axes in x, y, z order.
    pub const ALL: [AxisKind; 3] = [AxisKind::X, AxisKind::Y, AxisKind::Z];
}

/// Titles of the x, y and z axes. Empty means "no title".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisTitles {
    /// x-axis title
    pub x: String,
    /// y-axis title
    pub y: String,
    /// z-axis title
    pub z: String,
}

impl AxisTitles {
    /// Title of one axis.
    pub fn get(&self, axis: AxisKind) -> &str {
        match axis {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
            AxisKind::Z => &self.z,
        }
    }

    /// Replace the title of one axis.
    pub fn set(&mut self, axis: AxisKind, title: impl Into<String>) {
        let slot = match axis {
            AxisKind::X => &mut self.x,
            AxisKind::Y => &mut self.y,
            AxisKind::Z => &mut self.z,
        };
        *slot = title.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_attributes_are_black_solid() {
        let a = DrawAttributes::default();
        assert_eq!(a.line_color, 1);
        assert_eq!(a.marker_color, 1);
        assert_eq!(a.line_style, 1);
    }

    #[test]
    fn test_axis_titles_set_get() {
        let mut t = AxisTitles::default();
        t.set(AxisKind::Y, "Events");
        assert_eq!(t.get(AxisKind::Y), "Events");
        assert_eq!(t.get(AxisKind::X), "");
    }

    #[test]
    fn test_attributes_json_roundtrip_keeps_fields() {
        let a = DrawAttributes { marker_style: 20, marker_size: 0.7, ..Default::default() };
        let s = serde_json::to_string(&a).unwrap();
        let b: DrawAttributes = serde_json::from_str(&s).unwrap();
        assert_eq!(a, b);
    }
}
