use super::error::{DataError, Result};
use super::model::LongRecord;
use super::selection::Selection;

/// Years that get a labelled tick on the x axis.
pub const MARK_INTERVAL: i32 = 25;

// ---------------------------------------------------------------------------
// Record filter
// ---------------------------------------------------------------------------

/// Records with `low <= year <= high` whose country is selected, sorted by (country, year).
///
/// The selection is re-checked for `low <= high` even though the range control cannot
/// produce crossed handles.
pub fn filter(table: &[LongRecord], sel: &Selection) -> Result<Vec<LongRecord>> {
    if sel.low > sel.high {
        return Err(DataError::InvalidRange {
            low: sel.low,
            high: sel.high,
        });
    }

    let mut visible: Vec<LongRecord> = table
        .iter()
        .filter(|r| sel.low <= r.year && r.year <= sel.high)
        .filter(|r| sel.countries.contains(&r.country))
        .cloned()
        .collect();

    visible.sort_by(|a, b| a.series_key().cmp(&b.series_key()));
    Ok(visible)
}

// ---------------------------------------------------------------------------
// Tick marks
// ---------------------------------------------------------------------------

/// Every year in `[low, high]` divisible by [`MARK_INTERVAL`]. Empty when none qualify.
pub fn marks(low: i32, high: i32) -> Vec<i32> {
    if low > high {
        return Vec::new();
    }
    let first = low + (MARK_INTERVAL - low.rem_euclid(MARK_INTERVAL)) % MARK_INTERVAL;
    (first..=high).step_by(MARK_INTERVAL as usize).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::model::{WideRecord, WideTable};
    use crate::data::reshape::reshape;

    fn table() -> Vec<LongRecord> {
        let wide = WideTable {
            years: vec![1800, 1825, 1850],
            rows: vec![
                WideRecord {
                    country: "USA".into(),
                    cells: vec!["2k".into(), "2.5k".into(), "3k".into()],
                },
                WideRecord {
                    country: "France".into(),
                    cells: vec!["1.8k".into(), "1.9k".into(), "2.1k".into()],
                },
                WideRecord {
                    country: "Egypt".into(),
                    cells: vec!["900".into(), "950".into(), "1k".into()],
                },
            ],
        };
        reshape(&wide).unwrap().records().to_vec()
    }

    fn sel(countries: &[&str], low: i32, high: i32) -> Selection {
        Selection {
            countries: countries.iter().map(|s| s.to_string()).collect(),
            low,
            high,
        }
    }

    fn rec(year: i32, country: &str, gdp: u64) -> LongRecord {
        LongRecord {
            year,
            country: country.into(),
            gdp,
        }
    }

    #[test]
    fn keeps_selected_country_inside_range() {
        let out = filter(&table(), &sel(&["USA"], 1800, 1825)).unwrap();
        assert_eq!(out, vec![rec(1800, "USA", 2000), rec(1825, "USA", 2500)]);
    }

    #[test]
    fn output_is_grouped_by_country_then_year() {
        let mut shuffled = table();
        shuffled.reverse();
        let out = filter(&shuffled, &sel(&["USA", "Egypt"], 1800, 1850)).unwrap();
        let keys: Vec<_> = out.iter().map(|r| (r.country.as_str(), r.year)).collect();
        assert_eq!(
            keys,
            vec![
                ("Egypt", 1800),
                ("Egypt", 1825),
                ("Egypt", 1850),
                ("USA", 1800),
                ("USA", 1825),
                ("USA", 1850),
            ]
        );
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let s = sel(&["USA", "France"], 1825, 1850);
        let once = filter(&table(), &s).unwrap();
        let twice = filter(&once, &s).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn widening_never_drops_records() {
        let t = table();
        let narrow = filter(&t, &sel(&["France"], 1825, 1825)).unwrap();
        let wider_years = filter(&t, &sel(&["France"], 1800, 1850)).unwrap();
        let more_countries = filter(&t, &sel(&["France", "Egypt"], 1825, 1825)).unwrap();
        for r in &narrow {
            assert!(wider_years.contains(r));
            assert!(more_countries.contains(r));
        }
    }

    #[test]
    fn full_selection_returns_every_record() {
        let t = table();
        let out = filter(&t, &sel(&["USA", "France", "Egypt"], 1800, 1850)).unwrap();
        assert_eq!(out.len(), t.len());
        for r in &t {
            assert!(out.contains(r));
        }
    }

    #[test]
    fn empty_country_set_gives_empty_result() {
        assert!(filter(&table(), &sel(&[], 1800, 1850)).unwrap().is_empty());
    }

    #[test]
    fn inclusion_matches_exclusion_of_unselected() {
        let t = table();
        let all: BTreeSet<String> = t.iter().map(|r| r.country.clone()).collect();
        let s = sel(&["France", "Egypt"], 1800, 1825);
        let excluded: BTreeSet<&String> = all.difference(&s.countries).collect();

        let mut by_exclusion: Vec<LongRecord> = t
            .iter()
            .filter(|r| s.low <= r.year && r.year <= s.high)
            .filter(|r| !excluded.contains(&r.country))
            .cloned()
            .collect();
        by_exclusion.sort_by(|a, b| a.series_key().cmp(&b.series_key()));

        assert_eq!(filter(&t, &s).unwrap(), by_exclusion);
    }

    #[test]
    fn crossed_range_is_rejected() {
        assert!(matches!(
            filter(&table(), &sel(&["USA"], 1850, 1800)),
            Err(DataError::InvalidRange { low: 1850, high: 1800 })
        ));
    }

    #[test]
    fn marks_every_quarter_century() {
        assert_eq!(marks(1800, 1900), vec![1800, 1825, 1850, 1875, 1900]);
        assert_eq!(marks(1801, 1824), Vec::<i32>::new());
        assert_eq!(marks(1810, 1860), vec![1825, 1850]);
        assert_eq!(marks(1850, 1850), vec![1850]);
        assert_eq!(marks(1900, 1800), Vec::<i32>::new());
    }
}
