use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::chart_line_color;
use crate::view::chart::TrendChart;

// ---------------------------------------------------------------------------
// Usage trend chart (detail panel)
// ---------------------------------------------------------------------------

/// Render the monthly usage line for the selected issue.
///
/// The plot id includes the chart generation, so a replaced chart starts
/// from fresh bounds instead of inheriting the previous one's view.
pub fn trend_chart(ui: &mut Ui, chart: &TrendChart) {
    let labels = chart.series.labels();
    let xy = chart.series.xy();
    let color = chart_line_color();

    Plot::new(("trend_chart", chart.generation))
        .legend(Legend::default())
        .height(220.0)
        .include_y(0.0)
        .y_axis_label("Usage (kWh)")
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let x = mark.value;
            if x.fract() != 0.0 || x < 0.0 {
                return String::new();
            }
            labels.get(x as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(xy.clone()))
                    .name("Energy Usage (kWh)")
                    .color(color)
                    .width(2.0)
                    .fill(0.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(xy))
                    .color(color)
                    .radius(3.0),
            );
        });
}
