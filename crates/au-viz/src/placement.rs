//! Placement of rectangular boxes (legends, text panes) in normalized
//! device coordinates (NDC), where the pad spans `[0, 1]` on both axes.

use std::fmt;
use std::str::FromStr;

use au_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Left edge of a box placed on the left, matching the usual left pad margin.
const LEFT_X1: f64 = 0.22;
/// Left edge of a box placed on the right.
const RIGHT_X1: f64 = 0.56;
/// Top edge used when the caller gives no starting height.
const DEFAULT_Y2: f64 = 1.02;
/// Gap left below a caller-given starting height.
const TOP_GAP: f64 = 0.005;

/// Horizontal placement keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Placement {
    /// Aligned with the left margin
    Left,
    /// Right half of the pad
    Right,
    /// Centered between the margins
    Center,
}

impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LEFT" => Ok(Placement::Left),
            "RIGHT" => Ok(Placement::Right),
            "CENTER" => Ok(Placement::Center),
            other => Err(Error::InvalidInput(format!("no coordinates defined at '{other}'"))),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Placement::Left => "LEFT",
            Placement::Right => "RIGHT",
            Placement::Center => "CENTER",
        };
        f.write_str(s)
    }
}

/// Corners of a box in NDC: `(x1, y1)` bottom-left, `(x2, y2)` top-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NdcBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NdcBox {
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// Corners of an `x_width` × `y_width` box at `placement`.
///
/// The top edge sits at 1.02 (just above the pad frame) unless `y_start`
/// is given, in which case it sits slightly below `y_start`.
pub fn get_coord(
    placement: Placement,
    x_width: f64,
    y_width: f64,
    y_start: Option<f64>,
) -> NdcBox {
    let x1 = match placement {
        Placement::Left => LEFT_X1,
        Placement::Right => RIGHT_X1,
        Placement::Center => (1.0 - x_width - 2.0 * LEFT_X1) / 2.0 + LEFT_X1,
    };
    let y2 = match y_start {
        Some(y) => y - TOP_GAP,
        None => DEFAULT_Y2,
    };
    NdcBox { x1, y1: y2 - y_width, x2: x1 + x_width, y2 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("LEFT".parse::<Placement>().unwrap(), Placement::Left);
        assert_eq!("RIGHT".parse::<Placement>().unwrap(), Placement::Right);
        assert_eq!("CENTER".parse::<Placement>().unwrap(), Placement::Center);
        let err = "left".parse::<Placement>().unwrap_err();
        assert!(err.to_string().contains("no coordinates defined at 'left'"));
        assert_eq!(Placement::Center.to_string(), "CENTER");
    }

    #[test]
    fn test_left_default_top() {
        let b = get_coord(Placement::Left, 0.2, 0.1, None);
        assert_relative_eq!(b.x1, 0.22);
        assert_relative_eq!(b.x2, 0.42, epsilon = 1e-12);
        assert_relative_eq!(b.y2, 1.02);
        assert_relative_eq!(b.y1, 0.92, epsilon = 1e-12);
    }

    #[test]
    fn test_right_with_start() {
        let b = get_coord(Placement::Right, 0.12, 0.15, Some(0.9));
        assert_relative_eq!(b.x1, 0.56);
        assert_relative_eq!(b.y2, 0.895, epsilon = 1e-12);
        assert_relative_eq!(b.y1, 0.745, epsilon = 1e-12);
        assert_relative_eq!(b.width(), 0.12, epsilon = 1e-12);
        assert_relative_eq!(b.height(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_center_is_between_margins() {
        let b = get_coord(Placement::Center, 0.2, 0.1, None);
        // equal space to the 0.22 margin on the left and to 1 - 0.22 on the right
        assert_relative_eq!(b.x1 - 0.22, 0.78 - b.x2, epsilon = 1e-12);
        assert_relative_eq!(b.x1, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_placement_serde_uppercase() {
        let p: Placement = serde_json::from_str("\"RIGHT\"").unwrap();
        assert_eq!(p, Placement::Right);
        assert!(serde_json::from_str::<Placement>("\"UP\"").is_err());
    }
}
