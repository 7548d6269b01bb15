#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::indexing_slicing)]

use chainhash::{
    ChainedHashTable, ComparisonTable, Distribution, Djb2, HashStrategy, Horner, Simple,
    TableSize, compute_distribution, logger,
};
use log::info;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

// Demonstration parameters
const TABLE_SIZE: usize = 10;
const KEY_PREFIX: &str = "klucz";
const KEY_COUNT: usize = 25;
const RANDOM_KEY_COUNT: usize = 1_000;
const RANDOM_KEY_LENGTH: std::ops::RangeInclusive<usize> = 4..=12;
const OUTPUT_PATH: &str = "bucket_distribution.png";

const STRATEGIES: [&dyn HashStrategy; 3] = [&Simple, &Horner, &Djb2];

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            let len = rng.random_range(RANDOM_KEY_LENGTH);
            (&mut rng).sample_iter(Alphanumeric).take(len).map(char::from).collect()
        })
        .collect()
}

fn print_summary(distribution: &Distribution) {
    println!(
        "{:12} | longest chain {:4} | empty buckets {:3} | collisions {:5}",
        distribution.strategy(),
        distribution.longest_chain(),
        distribution.empty_buckets(),
        distribution.collisions()
    );
}

// One occupancy histogram per strategy, stacked vertically
fn plot_distributions(
    path: &str,
    distributions: &[Distribution],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
        RGBColor(50, 180, 50), // Bright green
    ];
    let text_size = 16;
    let title_size = 28;

    let rows = distributions.len().max(1);
    let root = BitMapBackend::new(path, (1200, 360 * rows as u32)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((rows, 1));

    let max_count = distributions.iter().map(Distribution::longest_chain).max().unwrap_or(0);

    for (index, (area, distribution)) in areas.iter().zip(distributions).enumerate() {
        let color = colors[index % colors.len()];

        let mut chart = ChartBuilder::on(area)
            .caption(
                format!("Bucket occupancy for {}", distribution.strategy()),
                (font_family, title_size),
            )
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (0..distribution.table_size()).into_segmented(),
                0..max_count + 1,
            )?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Bucket")
            .y_desc("Keys")
            .axis_desc_style((font_family, text_size))
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(color.filled())
                .margin(8)
                .data(distribution.iter().map(|(bucket, keys)| (bucket, keys.len()))),
        )?;
    }

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::initialize_logger();

    let table_size = TableSize::new(TABLE_SIZE)?;
    let keys: Vec<String> = (1..=KEY_COUNT).map(|i| format!("{KEY_PREFIX}{i}")).collect();

    // 1. Per-key indices under every strategy
    println!("Hash comparison table:");
    println!("{}", ComparisonTable::new(&keys, table_size, &STRATEGIES));

    // 2. Bucket distribution per strategy
    let distributions = STRATEGIES
        .iter()
        .map(|strategy| compute_distribution(strategy, &keys, TABLE_SIZE))
        .collect::<Result<Vec<_>, _>>()?;
    for distribution in &distributions {
        println!("{distribution}");
    }

    // 3. Same comparison on random keys
    let random = random_keys(RANDOM_KEY_COUNT);
    println!("Summary for {RANDOM_KEY_COUNT} random keys:");
    for strategy in STRATEGIES {
        print_summary(&compute_distribution(strategy, &random, TABLE_SIZE)?);
    }
    println!();

    // 4. A table bound to the simple strategy, valued by key length
    let mut table = ChainedHashTable::with_table_size(Simple, table_size);
    for key in &keys {
        table.put(key.as_str(), key.len());
    }
    println!("Example HashMap (using simple_hash):");
    println!("{table}");

    plot_distributions(OUTPUT_PATH, &distributions)?;
    info!("wrote bucket occupancy histograms to {OUTPUT_PATH}");

    Ok(())
}
