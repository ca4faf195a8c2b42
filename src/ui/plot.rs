use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};

use crate::data::filter::MARK_INTERVAL;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GDP line chart (central panel)
// ---------------------------------------------------------------------------

/// Render the multi-series GDP chart for the current selection.
pub fn gdp_plot(ui: &mut Ui, state: &AppState) {
    let chart = &state.chart;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    if chart.series.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No countries selected.");
        });
        return;
    }

    // Label only the quarter-century years; with none in range the axis stays unlabelled.
    let marks: Vec<GridMark> = chart
        .marks
        .iter()
        .map(|&year| GridMark {
            value: f64::from(year),
            step_size: f64::from(MARK_INTERVAL),
        })
        .collect();
    let (low, high) = chart.year_range;

    Plot::new("gdp_plot")
        .legend(Legend::default())
        .x_axis_label(chart.x_label)
        .y_axis_label(chart.y_label)
        .x_grid_spacer(move |_input| marks.clone())
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .include_x(f64::from(low))
        .include_x(f64::from(high))
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|&(year, gdp)| [f64::from(year), gdp as f64])
                    .collect();

                let line = Line::new(points)
                    .name(&series.country)
                    .color(state.color_map.color_for(&series.country))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
