/// Data layer: core types, loading, reshaping, selection and filtering.
///
/// Architecture:
/// ```text
///  gdp_pcap.csv (wide: one row per country, one column per year)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → WideTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ reshape   │  wide → long, expand "k" suffixes → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐      ┌──────────┐
///   │ selection  │ ───▶ │  filter   │  countries × year range → visible records
///   └───────────┘      └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod reshape;
pub mod selection;
