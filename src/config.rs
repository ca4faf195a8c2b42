use std::path::PathBuf;

/// Countries shown when the viewer opens.
pub const DEFAULT_COUNTRIES: [&str; 6] = ["USA", "France", "China", "Egypt", "Vietnam", "Brazil"];

/// Application settings. Everything is fixed at compile time; only `RUST_LOG` is read
/// from the environment (by `env_logger`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Wide-format table read at startup.
    pub dataset_path: PathBuf,
    pub default_countries: Vec<String>,
    /// Increment of the year range handles.
    pub year_step: i32,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub description: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("gdp_pcap.csv"),
            default_countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            year_step: 5,
            window_title: "GDP Explorer".to_string(),
            window_size: [1280.0, 820.0],
            min_window_size: [640.0, 420.0],
            description: "Estimates of GDP per capita by country. Values in the far past are \
                based on analysis of historical data, while future values are extrapolated from \
                currently available data. Recent values are primarily from the World Bank; the \
                data is compiled from the Gapminder GDP per capita dataset."
                .to_string(),
        }
    }
}
