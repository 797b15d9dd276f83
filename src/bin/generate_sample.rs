use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "spacex_launch_dash.csv";
const LAUNCHES: usize = 56;

/// Same column names and order as the published launch dataset.
#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'a str,
}

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

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order, with a rough success rate each.
const GENERATIONS: [(&str, &str, f64); 5] = [
    ("v1.0", "F9 v1.0", 0.2),
    ("v1.1", "F9 v1.1", 0.35),
    ("FT", "F9 FT", 0.7),
    ("B4", "F9 B4", 0.6),
    ("B5", "F9 B5", 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    for i in 0..LAUNCHES {
        let (category, version, success_rate) = GENERATIONS[i * GENERATIONS.len() / LAUNCHES];
        // Early flights flew only from the first site.
        let launch_site = if i < 6 { SITES[0] } else { rng.pick(&SITES) };
        // Whole kilograms, up to the heaviest payload in the real data.
        let payload_mass_kg = if i < 2 {
            0.0
        } else {
            (rng.next_f64() * 9600.0).round()
        };
        let class = u8::from(rng.next_f64() < success_rate);

        writer
            .serialize(Row {
                flight_number: i + 1,
                launch_site,
                class,
                payload_mass_kg,
                booster_version: format!("{version} B{:04}", 1000 + i),
                booster_version_category: category,
            })
            .with_context(|| format!("writing launch {}", i + 1))?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {LAUNCHES} launches to {OUTPUT_PATH}");
    Ok(())
}
