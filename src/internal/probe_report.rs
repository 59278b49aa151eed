#![allow(clippy::cast_precision_loss, clippy::arithmetic_side_effects)]

use plotters::prelude::*;
use probing_table::{LOAD_FACTOR_PERCENT, ProbingTable, TableError};
use rand::{Rng, distr::Alphanumeric};

/// Largest number of keys inserted into a single table
const MAX_KEYS: usize = 20_000;
/// Number of table sizes sampled between 0 and `MAX_KEYS`
const STEPS: usize = 20;
/// Length of each generated key
const KEY_LEN: usize = 12;
/// Where the chart is written
const OUTPUT: &str = "probe_lengths.png";

/// Probe statistics of one filled table
#[derive(Debug, Clone, Copy)]
struct Sample {
    /// Number of keys inserted
    keys: usize,
    /// Slot count after the inserts
    capacity: usize,
    /// Entries per slot
    load_factor: f64,
    /// Mean slots visited to find an inserted key
    average_probes: f64,
    /// Most slots visited to find an inserted key
    worst_probes: usize,
}

fn random_key(rng: &mut impl Rng) -> String {
    (0..KEY_LEN).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Fills a fresh table with `keys` and measures how far each one sits from home
fn measure(keys: &[String]) -> Result<Sample, TableError> {
    let mut table = ProbingTable::new();
    for key in keys {
        table.set(key.as_str(), "value")?;
    }

    let probes: Vec<usize> = keys.iter().filter_map(|key| table.probe_length(key)).collect();
    let average_probes = probes.iter().sum::<usize>() as f64 / probes.len().max(1) as f64;
    let worst_probes = probes.iter().copied().max().unwrap_or(0);

    Ok(Sample {
        keys: keys.len(),
        capacity: table.capacity(),
        load_factor: table.load_factor(),
        average_probes,
        worst_probes,
    })
}

fn draw(samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let average_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(2);
    let worst_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(2);

    let root = BitMapBackend::new(OUTPUT, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_keys = samples.iter().map(|sample| sample.keys).max().unwrap_or(1);
    let max_probes =
        samples.iter().map(|sample| sample.worst_probes as f64).fold(1.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Linear Probing: Slots Visited per Lookup", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..max_keys, 0.0..max_probes)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Probe Length (slots)")
        .axis_desc_style((font_family, 16))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|sample| (sample.keys, sample.average_probes)),
            average_style,
        ))?
        .label("Average probe length")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], average_style));
    chart.draw_series(
        samples
            .iter()
            .map(|sample| Circle::new((sample.keys, sample.average_probes), 4, average_style.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|sample| (sample.keys, sample.worst_probes as f64)),
            worst_style,
        ))?
        .label("Worst probe length")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], worst_style));
    chart.draw_series(
        samples
            .iter()
            .map(|sample| Circle::new((sample.keys, sample.worst_probes as f64), 4, worst_style.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..MAX_KEYS).map(|_| random_key(&mut rng)).collect();

    println!("Resize threshold: {LOAD_FACTOR_PERCENT}% occupancy");

    let mut samples = Vec::with_capacity(STEPS);
    for step in 1..=STEPS {
        let count = MAX_KEYS * step / STEPS;
        let sample = measure(keys.get(..count).unwrap_or(&keys))?;
        println!(
            "  {} keys: capacity = {}, load = {:.2}, avg probes = {:.2}, worst = {}",
            sample.keys, sample.capacity, sample.load_factor, sample.average_probes, sample.worst_probes
        );
        samples.push(sample);
    }

    draw(&samples)?;
    println!("Generated plot image: {OUTPUT}");

    Ok(())
}
