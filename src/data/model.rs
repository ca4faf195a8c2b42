use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Wide format – exactly what the file holds
// ---------------------------------------------------------------------------

/// One row of the source table: a country and its raw per-year cells.
///
/// `cells[i]` belongs to `WideTable::years[i]`. A short row simply has fewer cells;
/// the reshaper reports the gap as a malformed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WideRecord {
    pub country: String,
    pub cells: Vec<String>,
}

/// The parsed but not yet interpreted table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideTable {
    /// Year columns in header order.
    pub years: Vec<i32>,
    pub rows: Vec<WideRecord>,
}

// ---------------------------------------------------------------------------
// Long format – one row per (year, country, gdp)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRecord {
    pub year: i32,
    pub country: String,
    pub gdp: u64,
}

impl LongRecord {
    /// Sort key used everywhere a chart needs grouped, chronological series.
    pub fn series_key(&self) -> (&str, i32) {
        (&self.country, self.year)
    }
}

// ---------------------------------------------------------------------------
// YearRange – inclusive year domain of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete, immutable long-format table
// ---------------------------------------------------------------------------

/// The reshaped dataset with its derived country set and year domain.
///
/// Only [`crate::data::reshape::reshape`] builds one; afterwards it is shared behind an
/// `Arc` and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LongRecord>,
    countries: BTreeSet<String>,
    years: YearRange,
}

impl Dataset {
    pub(crate) fn new(records: Vec<LongRecord>, countries: BTreeSet<String>, years: YearRange) -> Self {
        Dataset {
            records,
            countries,
            years,
        }
    }

    pub fn records(&self) -> &[LongRecord] {
        &self.records
    }

    /// Every country name in the dataset, sorted.
    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    pub fn year_range(&self) -> YearRange {
        self.years
    }

    /// Number of long-format records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
