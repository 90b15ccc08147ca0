//! Runs both cores on synthetic input.
//!
//! ```text
//! cargo run -p segmentation --example synthetic [config.yml] [image.rgb WIDTH]
//! ```
//!
//! `image.rgb` is raw interleaved 8-bit RGB; when given it replaces the
//! synthetic quadrants as region input.

use anyhow::Context;
use common::log_setup::setup_logging;
use segmentation::{detect_edges, segment_rgb, Classification, Config, Field};

const SIZE: usize = 64;

/// Gradient of a bright disc on a dark background.
fn disc_gradient() -> (Field<f32>, Field<f32>) {
    let center = SIZE as f32 / 2.0;
    let radius = SIZE as f32 / 4.0;
    let magnitude = Field::from_fn(SIZE, SIZE, |row, col| {
        let r = (row as f32 - center).hypot(col as f32 - center);
        (-(r - radius).powi(2) / 4.0).exp() * 100.0
    });
    let direction = Field::from_fn(SIZE, SIZE, |row, col| {
        (row as f32 - center)
            .atan2(col as f32 - center)
            .to_degrees()
            .rem_euclid(360.0)
    });
    (magnitude, direction)
}

/// Four colored quadrants.
fn quadrants() -> Field<[u8; 3]> {
    Field::from_fn(SIZE, SIZE, |row, col| {
        match (row < SIZE / 2, col < SIZE / 2) {
            (true, true) => [20, 20, 20],
            (true, false) => [220, 40, 40],
            (false, true) => [40, 220, 40],
            (false, false) => [250, 250, 250],
        }
    })
}

/// Reads raw interleaved RGB8 bytes as a `width`-wide field.
fn load_rgb(path: &str, width: usize) -> anyhow::Result<Field<[u8; 3]>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;
    anyhow::ensure!(bytes.len() % 3 == 0, "{path} is not a whole number of RGB pixels");
    anyhow::ensure!(width > 0, "Image width must be positive");

    let pixels: Vec<[u8; 3]> = bytes.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect();
    let height = pixels.len() / width;
    let field = Field::try_new(width, height, pixels)
        .with_context(|| format!("{path} does not hold a whole number of {width}-pixel rows"))?;
    Ok(field)
}

fn main() -> anyhow::Result<()> {
    setup_logging("info", "logs").context("Failed to initialize logging")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match args.first() {
        Some(path) => {
            let yaml = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {path}"))?;
            Config::from_yaml_str(&yaml)?
        }
        None => Config::default(),
    };
    config.validate();

    let (magnitude, direction) = disc_gradient();
    let edges = detect_edges(&magnitude, &direction, &config.canny)?;
    tracing::info!(
        low = edges.thresholds.low,
        high = edges.thresholds.high,
        edges = edges.edge_count(),
        demoted = edges.demoted,
        "disc edges detected"
    );

    let center_row = SIZE / 2;
    let row: String = (0..SIZE)
        .map(|col| match edges.edges[(center_row, col)] {
            Classification::Strong => '#',
            _ => '.',
        })
        .collect();
    tracing::info!("center row: {row}");

    let pixels = match (args.get(1), args.get(2)) {
        (Some(path), Some(width)) => {
            let width: usize = width.parse().context("Invalid image width")?;
            load_rgb(path, width)?
        }
        _ => quadrants(),
    };
    let regions = segment_rgb(&pixels, &config.regions)?;
    tracing::info!(regions = regions.region_count, "regions segmented");

    Ok(())
}
