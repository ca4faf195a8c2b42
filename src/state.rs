use std::collections::BTreeSet;
use std::sync::Arc;

use crate::chart::{ChartSpec, chart_spec};
use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::data::error::DataError;
use crate::data::model::Dataset;
use crate::data::selection::{Selection, SelectionState};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: AppConfig,

    /// Loaded dataset and the selection made against it.
    pub selection: SelectionState,

    /// Chart for the current selection (recomputed on every accepted change).
    pub chart: ChartSpec,

    /// Colour per country, fixed for the lifetime of the dataset.
    pub color_map: ColorMap,

    /// Text typed into the country search box.
    pub country_query: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: AppConfig) -> Result<Self, DataError> {
        let selection = SelectionState::new(dataset.clone(), &config.default_countries);
        let chart = chart_spec(&dataset, selection.current())?;
        Ok(Self {
            color_map: ColorMap::new(dataset.countries()),
            config,
            selection,
            chart,
            country_query: String::new(),
            status_message: None,
        })
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        self.selection.dataset()
    }

    pub fn current(&self) -> &Selection {
        self.selection.current()
    }

    /// Swap in a newly loaded dataset and reset the selection to its defaults.
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        let selection = SelectionState::new(dataset.clone(), &self.config.default_countries);
        match chart_spec(&dataset, selection.current()) {
            Ok(chart) => {
                self.color_map = ColorMap::new(dataset.countries());
                self.selection = selection;
                self.chart = chart;
                self.country_query.clear();
                self.status_message = None;
            }
            Err(e) => self.reject(e),
        }
    }

    /// Replace the selected countries; on rejection the previous selection stays.
    pub fn set_countries(&mut self, countries: BTreeSet<String>) {
        match self.selection.set_countries(countries) {
            Ok(_) => self.recompute(),
            Err(e) => self.reject(e),
        }
    }

    /// Replace the year span; on rejection the previous selection stays.
    pub fn set_year_range(&mut self, low: i32, high: i32) {
        match self.selection.set_year_range(low, high) {
            Ok(_) => self.recompute(),
            Err(e) => self.reject(e),
        }
    }

    /// Toggle a single country in the selection.
    pub fn toggle_country(&mut self, country: &str) {
        let mut countries = self.current().countries.clone();
        if !countries.remove(country) {
            countries.insert(country.to_string());
        }
        self.set_countries(countries);
    }

    pub fn select_all(&mut self) {
        let all = self.dataset().countries().clone();
        self.set_countries(all);
    }

    pub fn select_none(&mut self) {
        self.set_countries(BTreeSet::new());
    }

    pub fn select_defaults(&mut self) {
        let defaults = Selection::initial(self.dataset(), &self.config.default_countries);
        self.set_countries(defaults.countries);
    }

    /// Rebuild the chart from the current selection.
    fn recompute(&mut self) {
        match chart_spec(self.dataset(), self.current()) {
            Ok(chart) => {
                self.chart = chart;
                self.status_message = None;
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, err: DataError) {
        log::warn!("Rejected selection update: {err}");
        self.status_message = Some(format!("Error: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{WideRecord, WideTable};
    use crate::data::reshape::reshape;

    fn dataset(countries: &[&str]) -> Arc<Dataset> {
        let wide = WideTable {
            years: vec![1800, 1825, 1850],
            rows: countries
                .iter()
                .map(|c| WideRecord {
                    country: c.to_string(),
                    cells: vec!["1k".into(), "2k".into(), "3k".into()],
                })
                .collect(),
        };
        Arc::new(reshape(&wide).unwrap())
    }

    fn state() -> AppState {
        AppState::new(dataset(&["USA", "France", "Peru"]), AppConfig::default()).unwrap()
    }

    #[test]
    fn starts_with_defaults_present_in_dataset() {
        let s = state();
        let names: Vec<_> = s.current().countries.iter().cloned().collect();
        assert_eq!(names, vec!["France".to_string(), "USA".to_string()]);
        assert_eq!(s.chart.series.len(), 2);
        assert_eq!(s.chart.year_range, (1800, 1850));
    }

    #[test]
    fn toggling_a_country_updates_the_chart() {
        let mut s = state();
        s.toggle_country("Peru");
        assert!(s.current().countries.contains("Peru"));
        assert_eq!(s.chart.series.len(), 3);

        s.toggle_country("USA");
        assert!(!s.current().countries.contains("USA"));
        assert_eq!(s.chart.series.len(), 2);
    }

    #[test]
    fn rejected_range_keeps_chart_and_reports() {
        let mut s = state();
        s.set_year_range(1800, 1825);
        let before = s.chart.clone();

        s.set_year_range(1850, 1800);
        assert_eq!(s.chart, before);
        assert_eq!((s.current().low, s.current().high), (1800, 1825));
        assert!(s.status_message.is_some());

        s.set_year_range(1825, 1850);
        assert!(s.status_message.is_none());
    }

    #[test]
    fn unknown_country_is_rejected() {
        let mut s = state();
        let before = s.current().clone();
        s.set_countries(["Atlantis".to_string()].into_iter().collect());
        assert_eq!(s.current(), &before);
        assert!(s.status_message.as_deref().unwrap_or("").contains("Atlantis"));
    }

    #[test]
    fn all_none_and_defaults() {
        let mut s = state();
        s.select_all();
        assert_eq!(s.current().countries.len(), 3);
        s.select_none();
        assert!(s.chart.series.is_empty());
        s.select_defaults();
        assert_eq!(s.current().countries.len(), 2);
    }

    #[test]
    fn new_dataset_resets_selection() {
        let mut s = state();
        s.set_year_range(1825, 1825);
        s.set_dataset(dataset(&["China", "Egypt", "Chad"]));
        let names: Vec<_> = s.current().countries.iter().cloned().collect();
        assert_eq!(names, vec!["China".to_string(), "Egypt".to_string()]);
        assert_eq!((s.current().low, s.current().high), (1800, 1850));
    }
}
