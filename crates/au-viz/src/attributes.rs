//! Marker, line and title styling of histograms and graphs.

use au_core::{AxisKind, ColorIndex, DrawAttributes, Result};
use au_hist::{Graph, Graph2D, Histogram, Histogram2D, StoredObject};
use rand::Rng;
use serde::Deserialize;

use crate::color::{WHITE, random_color};

/// Styling options applied by [`apply_attributes`].
///
/// When `color` is unset (or 0, the background color) a random color is
/// drawn so that several unstyled objects stay distinguishable. Axis
/// titles are only touched when given and non-empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotAttributes {
    pub color: Option<ColorIndex>,
    pub line_style: i16,
    pub marker_style: i16,
    pub line_width: i16,
    pub marker_size: f64,
    pub title: String,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub z_title: Option<String>,
}

impl Default for PlotAttributes {
    fn default() -> Self {
        Self {
            color: None,
            line_style: 1,
            marker_style: 20,
            line_width: 2,
            marker_size: 0.7,
            title: String::new(),
            x_title: None,
            y_title: None,
            z_title: None,
        }
    }
}

impl PlotAttributes {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Requested title of `axis`, if any.
    pub fn axis_title(&self, axis: AxisKind) -> Option<&str> {
        let t = match axis {
            AxisKind::X => &self.x_title,
            AxisKind::Y => &self.y_title,
            AxisKind::Z => &self.z_title,
        };
        t.as_deref().filter(|s| !s.is_empty())
    }
}

/// A histogram or graph whose style can be set.
pub trait PlotObject {
    fn attributes_mut(&mut self) -> &mut DrawAttributes;

    fn set_title(&mut self, title: &str);

    fn set_axis_title(&mut self, axis: AxisKind, title: &str);
}

macro_rules! impl_plot_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PlotObject for $ty {
                fn attributes_mut(&mut self) -> &mut DrawAttributes {
                    &mut self.attributes
                }

                fn set_title(&mut self, title: &str) {
                    self.title = title.to_string();
                }

                fn set_axis_title(&mut self, axis: AxisKind, title: &str) {
                    self.axis_titles.set(axis, title);
                }
            }
        )*
    };
}

impl_plot_object!(Histogram, Histogram2D, Graph, Graph2D);

impl PlotObject for StoredObject {
    fn attributes_mut(&mut self) -> &mut DrawAttributes {
        match self {
            StoredObject::Histogram(h) => h.attributes_mut(),
            StoredObject::Histogram2D(h) => h.attributes_mut(),
            StoredObject::Graph(g) => g.attributes_mut(),
            StoredObject::Graph2D(g) => g.attributes_mut(),
        }
    }

    fn set_title(&mut self, title: &str) {
        match self {
            StoredObject::Histogram(h) => h.set_title(title),
            StoredObject::Histogram2D(h) => h.set_title(title),
            StoredObject::Graph(g) => g.set_title(title),
            StoredObject::Graph2D(g) => g.set_title(title),
        }
    }

    fn set_axis_title(&mut self, axis: AxisKind, title: &str) {
        match self {
            StoredObject::Histogram(h) => h.set_axis_title(axis, title),
            StoredObject::Histogram2D(h) => h.set_axis_title(axis, title),
            StoredObject::Graph(g) => g.set_axis_title(axis, title),
            StoredObject::Graph2D(g) => g.set_axis_title(axis, title),
        }
    }
}

/// Style `obj` with `attrs`, drawing a random color from the thread RNG if
/// needed. Returns the color applied to markers and lines.
pub fn apply_attributes<P>(obj: &mut P, attrs: &PlotAttributes) -> ColorIndex
where
    P: PlotObject + ?Sized,
{
    apply_attributes_with_rng(obj, attrs, &mut rand::rng())
}

/// Same as [`apply_attributes`] with an explicit random source.
pub fn apply_attributes_with_rng<P, R>(
    obj: &mut P,
    attrs: &PlotAttributes,
    rng: &mut R,
) -> ColorIndex
where
    P: PlotObject + ?Sized,
    R: Rng + ?Sized,
{
    let color = match attrs.color {
        Some(c) if c != WHITE => c,
        _ => random_color(rng),
    };

    let a = obj.attributes_mut();
    a.marker_style = attrs.marker_style;
    a.marker_size = attrs.marker_size;
    a.marker_color = color;
    a.line_style = attrs.line_style;
    a.line_color = color;
    a.line_width = attrs.line_width;

    obj.set_title(&attrs.title);
    for axis in AxisKind::ALL {
        if let Some(title) = attrs.axis_title(axis) {
            obj.set_axis_title(axis, title);
        }
    }
    color
}
