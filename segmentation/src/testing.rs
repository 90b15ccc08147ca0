//! Synthetic fields for unit tests.

use common::Field;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::suppression::Classification;

/// Random magnitude/direction pair with values in `[0, max_magnitude)` and
/// directions in `[0, 360)`.
pub fn random_gradient(
    width: usize,
    height: usize,
    max_magnitude: f32,
    seed: u64,
) -> (Field<f32>, Field<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let magnitude = Field::from_fn(width, height, |_, _| rng.random_range(0.0..max_magnitude));
    let direction = Field::from_fn(width, height, |_, _| rng.random_range(0.0..360.0f32));
    (magnitude, direction)
}

/// Random category field with `categories` distinct values.
pub fn random_categories(width: usize, height: usize, categories: u32, seed: u64) -> Field<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    Field::from_fn(width, height, |_, _| rng.random_range(0..categories))
}

/// Parses rows of equal length into a `char` field.
pub fn char_field(rows: &[&str]) -> Field<char> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let data: Vec<char> = rows.iter().flat_map(|r| r.chars()).collect();
    Field::new(width, height, data)
}

/// `.` background, `w` weak, `S` strong.
pub fn classification_field(rows: &[&str]) -> Field<Classification> {
    char_field(rows).map(|c| match c {
        'w' => Classification::Weak,
        'S' => Classification::Strong,
        _ => Classification::Background,
    })
}

/// Renders a classification field back into the `classification_field` notation.
pub fn render_classification(field: &Field<Classification>) -> Vec<String> {
    (0..field.height())
        .map(|row| {
            (0..field.width())
                .map(|col| match field[(row, col)] {
                    Classification::Background => '.',
                    Classification::Weak => 'w',
                    Classification::Strong => 'S',
                })
                .collect()
        })
        .collect()
}
