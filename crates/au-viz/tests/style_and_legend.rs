//! Integration tests: style converted histograms and lay out their legend.

use approx::assert_relative_eq;
use au_core::AxisKind;
use au_hist::{Bunch, Graph, MemoryDirectory, StoredObject, graph_to_hist};
use au_viz::{
    Legend, LegendOptions, Placement, PlotAttributes, PlotObject, apply_attributes, place_legend,
};

#[test]
fn style_every_object_of_a_bunch() {
    let mut dir = MemoryDirectory::new();
    dir.insert("g_a", Graph::new("g_a", vec![(0.0, 1.0), (1.0, 2.0)]));
    dir.insert("g_b", Graph::new("g_b", vec![(0.0, 2.0), (1.0, 1.0)]));
    let bunch = Bunch::load(&dir).unwrap();

    let mut legend = Legend::new();
    let mut styled: Vec<StoredObject> = Vec::new();
    for (i, name) in bunch.names().enumerate() {
        let mut obj = bunch.object(name).unwrap().clone();
        let attrs = PlotAttributes {
            color: Some(2 + i as i16),
            marker_style: 21,
            x_title: Some("x".into()),
            ..Default::default()
        };
        apply_attributes(&mut obj, &attrs);
        obj.set_axis_title(AxisKind::Y, "y");
        legend.add_entry(name, "lp");
        styled.push(obj);
    }

    let colors: Vec<i16> = styled
        .iter_mut()
        .map(|o| o.attributes_mut().line_color)
        .collect();
    assert_eq!(colors, [2, 3]);

    let ndc = place_legend(&mut legend, Placement::Center, Some(0.92), &LegendOptions::default());
    assert_relative_eq!(ndc.height(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(ndc.y2, 0.915, epsilon = 1e-12);
    assert_relative_eq!(ndc.x1 + ndc.x2, 1.0, epsilon = 1e-12);
}

#[test]
fn converted_histogram_keeps_style() {
    let g = Graph::new("eff", vec![(10.0, 0.2), (20.0, 0.6), (30.0, 0.9)]);
    let mut h = graph_to_hist(&g, 30).unwrap();
    let attrs = PlotAttributes::from_json_str(
        r#"{"color": 4, "line_width": 3, "title": "efficiency", "x_title": "E [GeV]"}"#,
    )
    .unwrap();
    assert_eq!(apply_attributes(&mut h, &attrs), 4);
    assert_eq!(h.attributes.line_width, 3);
    assert_eq!(h.title, "efficiency");
    assert_eq!(h.axis_titles.x, "E [GeV]");
}

#[test]
fn unknown_placement_keyword_is_rejected() {
    let err = "TOP".parse::<Placement>().unwrap_err();
    assert!(matches!(err, au_core::Error::InvalidInput(_)));
}
