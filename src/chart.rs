use serde::Serialize;

use crate::data::error::Result;
use crate::data::filter::{filter, marks};
use crate::data::model::{Dataset, LongRecord};
use crate::data::selection::Selection;

pub const X_LABEL: &str = "Year";
pub const Y_LABEL: &str = "GDP per Capita (USD)";
pub const SERIES_KEY: &str = "country";

// ---------------------------------------------------------------------------
// Chart specification handed to the renderer
// ---------------------------------------------------------------------------

/// One line on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub country: String,
    /// `(year, gdp)` in ascending year order.
    pub points: Vec<(i32, u64)>,
}

/// Everything the plot needs to draw the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series_key: &'static str,
    pub year_range: (i32, i32),
    pub marks: Vec<i32>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Total number of plotted points.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Filter the dataset by `sel` and group the result into per-country series.
pub fn chart_spec(dataset: &Dataset, sel: &Selection) -> Result<ChartSpec> {
    let visible = filter(dataset.records(), sel)?;
    Ok(ChartSpec {
        title: format!("GDP per Capita of Countries from {}-{}", sel.low, sel.high),
        x_label: X_LABEL,
        y_label: Y_LABEL,
        series_key: SERIES_KEY,
        year_range: (sel.low, sel.high),
        marks: marks(sel.low, sel.high),
        series: group_series(&visible),
    })
}

/// Expects records already sorted by (country, year).
fn group_series(records: &[LongRecord]) -> Vec<Series> {
    records
        .chunk_by(|a, b| a.country == b.country)
        .map(|group| Series {
            country: group[0].country.clone(),
            points: group.iter().map(|r| (r.year, r.gdp)).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{WideRecord, WideTable};
    use crate::data::reshape::reshape;

    fn dataset() -> Dataset {
        reshape(&WideTable {
            years: vec![1850, 1800, 1825],
            rows: vec![
                WideRecord {
                    country: "USA".into(),
                    cells: vec!["3k".into(), "2k".into(), "2.5k".into()],
                },
                WideRecord {
                    country: "France".into(),
                    cells: vec!["2.1k".into(), "1.8k".into(), "1.9k".into()],
                },
            ],
        })
        .unwrap()
    }

    fn sel(countries: &[&str], low: i32, high: i32) -> Selection {
        Selection {
            countries: countries.iter().map(|s| s.to_string()).collect(),
            low,
            high,
        }
    }

    #[test]
    fn groups_by_country_in_year_order() {
        let spec = chart_spec(&dataset(), &sel(&["USA", "France"], 1800, 1850)).unwrap();
        assert_eq!(
            spec.series,
            vec![
                Series {
                    country: "France".into(),
                    points: vec![(1800, 1800), (1825, 1900), (1850, 2100)],
                },
                Series {
                    country: "USA".into(),
                    points: vec![(1800, 2000), (1825, 2500), (1850, 3000)],
                },
            ]
        );
        assert_eq!(spec.point_count(), 6);
    }

    #[test]
    fn carries_labels_marks_and_title() {
        let spec = chart_spec(&dataset(), &sel(&["USA"], 1800, 1825)).unwrap();
        assert_eq!(spec.x_label, "Year");
        assert_eq!(spec.y_label, "GDP per Capita (USD)");
        assert_eq!(spec.series_key, "country");
        assert_eq!(spec.marks, vec![1800, 1825]);
        assert_eq!(spec.title, "GDP per Capita of Countries from 1800-1825");
    }

    #[test]
    fn empty_selection_gives_empty_chart() {
        let spec = chart_spec(&dataset(), &sel(&[], 1800, 1850)).unwrap();
        assert!(spec.series.is_empty());
        assert_eq!(spec.point_count(), 0);
    }

    #[test]
    fn serializes_for_export() {
        let spec = chart_spec(&dataset(), &sel(&["USA"], 1825, 1825)).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["series"][0]["country"], "USA");
        assert_eq!(json["series"][0]["points"][0], serde_json::json!([1825, 2500]));
        assert_eq!(json["year_range"], serde_json::json!([1825, 1825]));
    }
}
