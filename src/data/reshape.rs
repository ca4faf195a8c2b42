use std::collections::BTreeSet;

use super::error::{DataError, Result};
use super::model::{Dataset, LongRecord, WideTable, YearRange};

// ---------------------------------------------------------------------------
// Cell values
// ---------------------------------------------------------------------------

/// Parse a GDP cell: `"300"`, `"12.5"`, `"5k"`, `"12.5k"`.
///
/// A trailing `k` multiplies by 1000. Any fractional remainder is truncated toward zero.
/// The arithmetic is done on the decimal digits, so `"1.15k"` is exactly 1150.
pub fn parse_value(raw: &str) -> Result<u64> {
    let malformed = || DataError::MalformedValue {
        value: raw.to_string(),
        cell: None,
    };

    let text = raw.trim();
    let (number, scale) = match text.strip_suffix('k') {
        Some(rest) => (rest, 1000u64),
        None => (text, 1u64),
    };

    let (int_part, frac_part) = match number.split_once('.') {
        Some((i, f)) => (i, f),
        None => (number, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(malformed());
    }
    // "5." is not a number we accept either.
    if number.ends_with('.') {
        return Err(malformed());
    }

    let whole: u64 = int_part.parse().map_err(|_| malformed())?;

    // Keep as many fractional digits as the scale can absorb; the rest are truncated.
    let kept = scale.ilog10() as usize;
    let mut frac_value = 0u64;
    for i in 0..kept {
        let digit = frac_part.as_bytes().get(i).map_or(0, |b| u64::from(b - b'0'));
        frac_value = frac_value * 10 + digit;
    }

    whole
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value))
        .ok_or_else(malformed)
}

/// Parse a column header as a four-digit year.
pub fn parse_year(header: &str) -> Result<i32> {
    let h = header.trim();
    if h.len() != 4 || !h.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DataError::MalformedYear(header.to_string()));
    }
    h.parse()
        .map_err(|_| DataError::MalformedYear(header.to_string()))
}

// ---------------------------------------------------------------------------
// Wide → long
// ---------------------------------------------------------------------------

/// Transpose a wide table into the long-format [`Dataset`].
///
/// Produces exactly `countries × years` records, ordered by country (source order) then year
/// (header order). Fails on the first malformed or missing cell, a duplicate country, or a
/// table whose year columns are missing or repeated.
pub fn reshape(wide: &WideTable) -> Result<Dataset> {
    let (Some(&first), Some(&last)) = (wide.years.iter().min(), wide.years.iter().max()) else {
        return Err(DataError::NoYears);
    };
    let years = YearRange {
        min: first,
        max: last,
    };

    let mut seen_years = BTreeSet::new();
    if let Some(&dup) = wide.years.iter().find(|&&y| !seen_years.insert(y)) {
        return Err(DataError::DuplicateYear(dup));
    }

    let mut countries = BTreeSet::new();
    let mut records = Vec::with_capacity(wide.rows.len() * wide.years.len());

    for row in &wide.rows {
        if !countries.insert(row.country.clone()) {
            return Err(DataError::DuplicateCountry(row.country.clone()));
        }

        for (i, &year) in wide.years.iter().enumerate() {
            let raw = row.cells.get(i).map(String::as_str).unwrap_or("");
            let gdp = parse_value(raw).map_err(|_| DataError::MalformedValue {
                value: raw.to_string(),
                cell: Some((row.country.clone(), year)),
            })?;
            records.push(LongRecord {
                year,
                country: row.country.clone(),
                gdp,
            });
        }
    }

    Ok(Dataset::new(records, countries, years))
}
