//! Rendering of a [`ChartSpec`] with egui_plot.
//!
//! egui_plot has no twin-Y-axis support, so secondary-axis traces are drawn
//! in a second plot stacked under the primary one, with the X bounds copied
//! from the primary plot every frame. A coercion gap splits a trace into
//! separate line segments that share one legend entry.

use egui_plot::{Legend, Line, Plot, PlotUi};

use crate::compose::{ChartSpec, TraceSpec, YAxis};

/// Contiguous runs of points where both X and Y parsed.
fn segments(trace: &TraceSpec) -> Vec<Vec<[f64; 2]>> {
    let mut segs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (x, y) in trace.xs.iter().zip(trace.ys.iter()) {
        match (x, y) {
            (Some(x), Some(y)) => current.push([*x, *y]),
            _ => {
                if !current.is_empty() {
                    segs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segs.push(current);
    }
    segs
}

fn draw_traces(plot_ui: &mut PlotUi, spec: &ChartSpec, axis: YAxis) {
    for trace in spec.traces.iter().filter(|t| t.axis == axis) {
        for seg in segments(trace) {
            // Segments share the trace label, so the legend shows one entry.
            plot_ui.line(Line::new(trace.label.clone(), seg));
        }
    }
}

/// Draw the chart. `fresh` is consumed: on the first frame after composing,
/// the view is reset and the computed primary Y range applied.
pub(crate) fn show(ui: &mut egui::Ui, spec: &ChartSpec, fresh: &mut bool) {
    let has_secondary = spec.has_secondary();
    let avail = ui.available_height();
    let primary_height = if has_secondary { avail * 0.55 } else { avail };

    let mut primary = Plot::new("overlay_primary")
        .legend(Legend::default())
        .height(primary_height)
        .x_axis_label(spec.layout.x_title.clone())
        .y_axis_label(spec.layout.y_title.clone())
        .allow_scroll(false);
    if *fresh {
        primary = primary.reset();
        if let Some([lo, hi]) = spec.layout.y_range {
            primary = primary.include_y(lo).include_y(hi);
        }
    }
    let response = primary.show(ui, |plot_ui| {
        draw_traces(plot_ui, spec, YAxis::Primary);
    });
    let bounds = *response.transform.bounds();

    if has_secondary {
        let mut secondary = Plot::new("overlay_secondary")
            .legend(Legend::default())
            .x_axis_label(spec.layout.x_title.clone())
            .y_axis_label(spec.layout.y2_title.clone())
            .allow_scroll(false);
        if *fresh {
            secondary = secondary.reset();
        }
        secondary.show(ui, |plot_ui| {
            // Follow the primary plot's X window so the two stay aligned.
            plot_ui.set_plot_bounds_x(bounds.min()[0]..=bounds.max()[0]);
            draw_traces(plot_ui, spec, YAxis::Secondary);
        });
    }

    *fresh = false;
}
