use std::collections::BTreeSet;
use std::sync::Arc;

use super::error::{DataError, Result};
use super::model::{Dataset, YearRange};

// ---------------------------------------------------------------------------
// Selection – the user's current filter parameters
// ---------------------------------------------------------------------------

/// Selected countries plus an inclusive `(low, high)` year span.
///
/// Values are replaced wholesale; the `with_*` constructors validate against the dataset
/// and return a new selection, leaving `self` untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub countries: BTreeSet<String>,
    pub low: i32,
    pub high: i32,
}

impl Selection {
    /// The given `defaults` that exist in the dataset, over the full year domain.
    pub fn initial<S: AsRef<str>>(dataset: &Dataset, defaults: &[S]) -> Self {
        let mut countries = BTreeSet::new();
        for name in defaults {
            let name = name.as_ref();
            if dataset.countries().contains(name) {
                countries.insert(name.to_string());
            } else {
                log::warn!("Default country {name:?} is not in the dataset; skipping");
            }
        }
        let years = dataset.year_range();
        Selection {
            countries,
            low: years.min,
            high: years.max,
        }
    }

    pub fn with_countries(&self, countries: BTreeSet<String>, dataset: &Dataset) -> Result<Self> {
        if let Some(unknown) = countries.iter().find(|c| !dataset.countries().contains(*c)) {
            return Err(DataError::UnknownCountry(unknown.clone()));
        }
        Ok(Selection {
            countries,
            ..self.clone()
        })
    }

    pub fn with_year_range(&self, low: i32, high: i32, dataset: &Dataset) -> Result<Self> {
        check_range(low, high, dataset.year_range())?;
        Ok(Selection {
            low,
            high,
            ..self.clone()
        })
    }
}

/// `low <= high` and both inside the dataset's year domain.
pub fn check_range(low: i32, high: i32, domain: YearRange) -> Result<()> {
    if low > high || !domain.contains(low) || !domain.contains(high) {
        return Err(DataError::InvalidRange { low, high });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// SelectionState – current selection bound to its dataset
// ---------------------------------------------------------------------------

/// Holds the live [`Selection`] for a shared, read-only [`Dataset`].
#[derive(Debug, Clone)]
pub struct SelectionState {
    dataset: Arc<Dataset>,
    current: Selection,
}

impl SelectionState {
    pub fn new<S: AsRef<str>>(dataset: Arc<Dataset>, defaults: &[S]) -> Self {
        let current = Selection::initial(&dataset, defaults);
        SelectionState { dataset, current }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    /// Replace the selected countries. An empty set is allowed.
    pub fn set_countries(&mut self, countries: BTreeSet<String>) -> Result<Selection> {
        let next = self.current.with_countries(countries, &self.dataset)?;
        self.current = next.clone();
        Ok(next)
    }

    /// Replace the year span. Rejects `low > high` and out-of-domain bounds.
    pub fn set_year_range(&mut self, low: i32, high: i32) -> Result<Selection> {
        let next = self.current.with_year_range(low, high, &self.dataset)?;
        self.current = next.clone();
        Ok(next)
    }
}
