//! Point graphs: `(x, y)` curves and `(x, y, z)` surfaces.

use au_core::{AxisTitles, DrawAttributes, Error, Result};
use serde::{Deserialize, Serialize};

/// Relative padding added on each side of the x range of a graph frame.
const FRAME_PADDING: f64 = 0.1;

/// An ordered set of `(x, y)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Graph name.
    pub name: String,
    /// Graph title.
    #[serde(default)]
    pub title: String,
    /// Points in insertion order.
    pub points: Vec<(f64, f64)>,
    /// Axis titles.
    #[serde(default)]
    pub axis_titles: AxisTitles,
    /// Marker and line attributes.
    #[serde(default)]
    pub attributes: DrawAttributes,
}

impl Graph {
    /// Create a graph from points.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            points,
            axis_titles: AxisTitles::default(),
            attributes: DrawAttributes::default(),
        }
    }

    /// Create a graph from separate x and y columns.
    pub fn from_xy(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(Error::InvalidInput(format!(
                "x and y columns differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        Ok(Self::new(name, xs.iter().copied().zip(ys.iter().copied()).collect()))
    }

    /// Number of points.
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// The x range of the frame a graph is drawn in.
    ///
    /// The point range is padded by 10% on each side. Padding never crosses
    /// 0: the low edge is clamped to 0 when every x is non-negative and the
    /// high edge when every x is non-positive. A single-valued range is
    /// first widened to `[x, x + 1]`.
    pub fn frame_range(&self) -> Result<(f64, f64)> {
        let (mut lo, mut hi) = min_max(self.points.iter().map(|p| p.0))
            .ok_or_else(|| Error::InvalidInput(format!("graph '{}' has no points", self.name)))?;
        if lo == hi {
            hi += 1.0;
        }
        let dx = FRAME_PADDING * (hi - lo);
        let (x_min, x_max) = (lo, hi);
        lo -= dx;
        hi += dx;
        if lo < 0.0 && x_min >= 0.0 {
            lo = 0.0;
        }
        if hi > 0.0 && x_max <= 0.0 {
            hi = 0.0;
        }
        Ok((lo, hi))
    }
}

/// Extrema of the `(x, y)` coordinates of a 2D graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent2D {
    /// Smallest x
    pub x_min: f64,
    /// Largest x
    pub x_max: f64,
    /// Smallest y
    pub y_min: f64,
    /// Largest y
    pub y_max: f64,
}

/// An ordered set of `(x, y, z)` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph2D {
    /// Graph name.
    pub name: String,
    /// Graph title.
    #[serde(default)]
    pub title: String,
    /// Points in insertion order.
    pub points: Vec<(f64, f64, f64)>,
    /// Axis titles.
    #[serde(default)]
    pub axis_titles: AxisTitles,
    /// Marker and line attributes.
    #[serde(default)]
    pub attributes: DrawAttributes,
}

impl Graph2D {
    /// Create a 2D graph from points.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64, f64)>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            points,
            axis_titles: AxisTitles::default(),
            attributes: DrawAttributes::default(),
        }
    }

    /// Number of points.
    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    /// Exact x/y extrema of the points.
    pub fn extent(&self) -> Result<Extent2D> {
        let empty = || Error::InvalidInput(format!("2D graph '{}' has no points", self.name));
        let (x_min, x_max) = min_max(self.points.iter().map(|p| p.0)).ok_or_else(empty)?;
        let (y_min, y_max) = min_max(self.points.iter().map(|p| p.1)).ok_or_else(empty)?;
        Ok(Extent2D { x_min, x_max, y_min, y_max })
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_range_pads_ten_percent() {
        let g = Graph::new("g", vec![(-1.0, 0.0), (3.0, 1.0)]);
        let (lo, hi) = g.frame_range().unwrap();
        assert_relative_eq!(lo, -1.4, epsilon = 1e-12);
        assert_relative_eq!(hi, 3.4, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_range_clamps_at_zero() {
        let g = Graph::new("g", vec![(0.0, 1.0), (10.0, 2.0)]);
        let (lo, hi) = g.frame_range().unwrap();
        assert_eq!(lo, 0.0);
        assert_relative_eq!(hi, 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_range_clamps_high_edge_at_zero() {
        let g = Graph::new("g", vec![(-10.0, 1.0), (0.0, 2.0)]);
        let (lo, hi) = g.frame_range().unwrap();
        assert_relative_eq!(lo, -11.0, epsilon = 1e-12);
        assert_eq!(hi, 0.0);

        let g = Graph::new("g", vec![(-4.0, 1.0), (-2.0, 2.0)]);
        let (lo, hi) = g.frame_range().unwrap();
        assert_relative_eq!(lo, -4.2, epsilon = 1e-12);
        assert_relative_eq!(hi, -1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_frame_range_single_point() {
        let g = Graph::new("g", vec![(2.0, 5.0)]);
        let (lo, hi) = g.frame_range().unwrap();
        assert_relative_eq!(lo, 1.9, epsilon = 1e-12);
        assert_relative_eq!(hi, 3.1, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_graph_errors() {
        assert!(Graph::new("g", vec![]).frame_range().is_err());
        assert!(Graph2D::new("g", vec![]).extent().is_err());
    }

    #[test]
    fn test_from_xy_length_check() {
        assert!(Graph::from_xy("g", &[1.0, 2.0], &[1.0]).is_err());
        let g = Graph::from_xy("g", &[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(g.points, vec![(1.0, 3.0), (2.0, 4.0)]);
    }

    #[test]
    fn test_extent() {
        let g = Graph2D::new("g", vec![(0.0, 5.0, 1.0), (2.0, -1.0, 1.0), (1.0, 0.0, 0.0)]);
        let e = g.extent().unwrap();
        assert_eq!(e, Extent2D { x_min: 0.0, x_max: 2.0, y_min: -1.0, y_max: 5.0 });
    }
}
