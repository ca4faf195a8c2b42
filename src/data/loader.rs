use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{Dataset, WideRecord, WideTable};
use super::reshape::{parse_year, reshape};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a wide-format GDP table and reshape it into the long-format [`Dataset`].
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let wide = load_wide_csv(path)?;
    let dataset = reshape(&wide)
        .with_context(|| format!("reshaping {}", path.display()))?;
    log::info!(
        "Loaded {} countries over {} ({} records) from {}",
        dataset.countries().len(),
        dataset.year_range(),
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row `country,1800,1801,...,2100`.
/// The first column names the country; every other header must be a four-digit year.
/// Cells stay as raw text here (`"5.2k"`, `"300"`); interpretation happens in the reshaper.
/// Short rows are kept so the reshaper can report the missing cell precisely.
pub fn load_wide_csv(path: &Path) -> Result<WideTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        bail!("CSV has no header row");
    }

    let years = headers[1..]
        .iter()
        .map(|h| parse_year(h))
        .collect::<std::result::Result<Vec<i32>, _>>()
        .context("parsing year columns")?;

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        if record.len() > headers.len() {
            bail!(
                "CSV row {row_no}: {} cells but the header has {} columns",
                record.len(),
                headers.len()
            );
        }

        let country = record.get(0).unwrap_or("").trim().to_string();
        if country.is_empty() {
            bail!("CSV row {row_no}: missing country name");
        }

        let cells = record.iter().skip(1).map(|c| c.to_string()).collect();
        rows.push(WideRecord { country, cells });
    }

    Ok(WideTable { years, rows })
}
