use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::marks;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the left panel: heading, description, country picker, year range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let dataset = state.dataset().clone();
    let years = dataset.year_range();

    ui.heading(format!(
        "GDP Per Capita of {} Countries Over Time",
        dataset.countries().len()
    ));
    ui.label(
        RichText::new(format!("{} ({years})", state.config.description))
            .small()
            .weak(),
    );
    ui.separator();

    // ---- Year range ----
    ui.strong("Years");
    let (mut low, mut high) = (state.current().low, state.current().high);
    let step = f64::from(state.config.year_step);
    // Each handle's range ends at the other handle, so they cannot cross.
    let low_changed = ui
        .add(egui::Slider::new(&mut low, years.min..=high).step_by(step).text("from"))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut high, low..=years.max).step_by(step).text("to"))
        .changed();
    if low_changed || high_changed {
        state.set_year_range(low, high);
    }

    let marked: Vec<String> = marks(years.min, years.max)
        .iter()
        .map(|y| y.to_string())
        .collect();
    if !marked.is_empty() {
        ui.label(RichText::new(marked.join("  ")).small().weak());
    }
    ui.separator();

    // ---- Country picker ----
    let n_selected = state.current().countries.len();
    let n_total = dataset.countries().len();
    ui.strong(format!("Countries  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        if ui.small_button("Defaults").clicked() {
            state.select_defaults();
        }
    });
    ui.add(
        egui::TextEdit::singleline(&mut state.country_query)
            .hint_text("Search countries…"),
    );

    let query = state.country_query.to_lowercase();
    let mut toggled: Option<String> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in dataset.countries() {
                if !query.is_empty() && !country.to_lowercase().contains(&query) {
                    continue;
                }
                let mut checked = state.current().countries.contains(country);
                let text = RichText::new(country).color(state.color_map.color_for(country));
                if ui.checkbox(&mut checked, text).changed() {
                    toggled = Some(country.clone());
                }
            }
        });

    if let Some(country) = toggled {
        state.toggle_country(&country);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} countries, {} points visible",
            state.chart.series.len(),
            state.chart.point_count()
        ));

        ui.separator();

        if ui.button("Copy chart JSON").clicked() {
            match serde_json::to_string_pretty(&state.chart) {
                Ok(json) => ui.ctx().copy_text(json),
                Err(e) => {
                    log::error!("Failed to serialize chart: {e}");
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open GDP per capita table")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_dataset(&path) {
            Ok(dataset) => state.set_dataset(Arc::new(dataset)),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
