//! Write a synthetic `gdp_pcap.csv` in the Gapminder wide layout.
//!
//! Each country follows a noisy logistic growth curve from 1800 to 2100. Values of
//! 10 000 and above are written with the `k` suffix, the way the real file does.

use anyhow::{Context, Result};

const FIRST_YEAR: i32 = 1800;
const LAST_YEAR: i32 = 2100;

/// (name, GDP in 1800, plateau GDP, year of fastest growth)
const COUNTRIES: &[(&str, f64, f64, f64)] = &[
    ("Afghanistan", 480.0, 4_500.0, 2040.0),
    ("Argentina", 1_400.0, 38_000.0, 1960.0),
    ("Australia", 1_900.0, 95_000.0, 1965.0),
    ("Brazil", 900.0, 31_000.0, 1985.0),
    ("Canada", 1_300.0, 90_000.0, 1960.0),
    ("Chad", 450.0, 3_800.0, 2050.0),
    ("China", 1_000.0, 58_000.0, 2010.0),
    ("Egypt", 780.0, 22_000.0, 2005.0),
    ("France", 1_800.0, 82_000.0, 1960.0),
    ("Germany", 1_600.0, 88_000.0, 1958.0),
    ("India", 900.0, 24_000.0, 2030.0),
    ("Japan", 1_000.0, 78_000.0, 1965.0),
    ("Mexico", 1_100.0, 35_000.0, 1990.0),
    ("Nigeria", 650.0, 12_000.0, 2045.0),
    ("Peru", 850.0, 26_000.0, 2000.0),
    ("UK", 3_400.0, 80_000.0, 1955.0),
    ("USA", 2_100.0, 120_000.0, 1955.0),
    ("Vietnam", 700.0, 36_000.0, 2020.0),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn logistic(year: f64, start: f64, plateau: f64, midpoint: f64) -> f64 {
    start + (plateau - start) / (1.0 + (-(year - midpoint) / 22.0).exp())
}

/// Render like the Gapminder file: `"850"`, `"4.7k"`, `"12.3k"`.
fn format_gdp(value: f64) -> String {
    let v = value.max(0.0).round();
    if v >= 10_000.0 {
        format!("{:.1}k", v / 1000.0)
    } else if v >= 1_000.0 {
        format!("{:.2}k", v / 1000.0)
    } else {
        format!("{v:.0}")
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "gdp_pcap.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header = vec!["country".to_string()];
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    writer.write_record(&header).context("writing header")?;

    for &(name, start, plateau, midpoint) in COUNTRIES {
        let mut row = vec![name.to_string()];
        for year in FIRST_YEAR..=LAST_YEAR {
            let trend = logistic(f64::from(year), start, plateau, midpoint);
            let noise = rng.gauss(0.0, 0.02 * trend);
            row.push(format_gdp(trend + noise));
        }
        writer
            .write_record(&row)
            .with_context(|| format!("writing row for {name}"))?;
    }
    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} countries × {} years to {output_path}",
        COUNTRIES.len(),
        LAST_YEAR - FIRST_YEAR + 1
    );
    Ok(())
}
