//! Graph to histogram conversion.
//!
//! Each point is filled with its y (or z) value as weight, then every bin
//! that received several points is divided by their number, so a bin holds
//! the average value of the points falling in it.

use std::collections::BTreeMap;

use au_core::Result;

use crate::graph::{Graph, Graph2D};
use crate::histogram::{Histogram, Histogram2D};

/// Number of bins used by [`graph_to_hist`] when the caller has no preference.
pub const DEFAULT_GRAPH_BINS: usize = 1000;

/// Convert a graph into a histogram named `"<graph>_histo"`.
///
/// The histogram spans the graph's frame range (see [`Graph::frame_range`]).
pub fn graph_to_hist(graph: &Graph, n_bins: usize) -> Result<Histogram> {
    let (x_min, x_max) = graph.frame_range()?;
    let mut h = Histogram::new(format!("{}_histo", graph.name), "", n_bins, x_min, x_max)?;

    let mut hits: BTreeMap<usize, u32> = BTreeMap::new();
    for &(x, y) in &graph.points {
        let bin = h.fill(x, y);
        *hits.entry(bin).or_insert(0) += 1;
    }
    for (&bin, &n) in &hits {
        if n > 1
            && let Some(v) = h.bin_content(bin)
        {
            h.set_bin_content(bin, v / f64::from(n))?;
        }
    }

    log::debug!(
        "graph '{}' -> {} bins over [{x_min}, {x_max}], {} points in {} bins",
        graph.name,
        n_bins,
        graph.n_points(),
        hits.len()
    );
    Ok(h)
}

/// Convert a 2D graph into a 2D histogram named `"<graph>_histo"`.
///
/// The histogram spans the exact x/y extrema of the points, so points on
/// the upper edges are kept in the overflow bins.
pub fn graph2d_to_hist2d(graph: &Graph2D, nx: usize, ny: usize) -> Result<Histogram2D> {
    let e = graph.extent()?;
    let mut h = Histogram2D::new(
        format!("{}_histo", graph.name),
        "",
        nx,
        e.x_min,
        e.x_max,
        ny,
        e.y_min,
        e.y_max,
    )?;

    let mut hits: BTreeMap<usize, u32> = BTreeMap::new();
    let mut in_flow = 0usize;
    for &(x, y, z) in &graph.points {
        if x >= e.x_max || y >= e.y_max {
            in_flow += 1;
        }
        let bin = h.fill(x, y, z);
        *hits.entry(bin).or_insert(0) += 1;
    }
    if in_flow > 0 {
        log::warn!(
            "graph '{}': {in_flow} point(s) on the upper edge went to overflow bins",
            graph.name
        );
    }
    for (&bin, &n) in &hits {
        if n > 1
            && let Some(v) = h.bin_content(bin)
        {
            h.set_bin_content(bin, v / f64::from(n))?;
        }
    }

    log::debug!("2D graph '{}' -> {nx}x{ny} bins, {} points", graph.name, graph.n_points());
    Ok(h)
}
