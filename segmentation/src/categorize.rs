//! Per-pixel bucketing that turns color input into a category field.

use common::Field;

/// Rec. 601 luma of an 8-bit RGB pixel, scaled into `[0, 1)`.
#[inline]
pub fn luma([r, g, b]: [u8; 3]) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 256.0
}

/// Maps a pixel to its category value.
pub trait Categorize<P> {
    fn category(&self, pixel: &P) -> f32;
}

impl<P, F> Categorize<P> for F
where
    F: Fn(&P) -> f32,
{
    #[inline]
    fn category(&self, pixel: &P) -> f32 {
        self(pixel)
    }
}

/// Quantizes luma into `max_categories` equal-width buckets, each named by
/// its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayBuckets {
    pub max_categories: u32,
}

impl GrayBuckets {
    pub fn new(max_categories: u32) -> Self {
        assert!(max_categories > 0, "max_categories must be positive");
        Self { max_categories }
    }
}

impl Categorize<[u8; 3]> for GrayBuckets {
    #[inline]
    fn category(&self, pixel: &[u8; 3]) -> f32 {
        let n = self.max_categories as f32;
        (luma(*pixel) * n).floor() / n
    }
}

/// Applies `categorizer` to every pixel.
pub fn categorize<P>(pixels: &Field<P>, categorizer: &impl Categorize<P>) -> Field<f32> {
    pixels.map(|p| categorizer.category(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_range() {
        assert_eq!(luma([0, 0, 0]), 0.0);
        let white = luma([255, 255, 255]);
        assert!(white < 1.0);
        assert!((white - 255.0 / 256.0).abs() < 1e-5);
    }

    #[test]
    fn test_luma_weights_green_most() {
        assert!(luma([0, 200, 0]) > luma([200, 0, 0]));
        assert!(luma([200, 0, 0]) > luma([0, 0, 200]));
    }

    #[test]
    fn test_gray_buckets_lower_bounds() {
        let buckets = GrayBuckets::new(4);
        assert_eq!(buckets.category(&[0, 0, 0]), 0.0);
        assert_eq!(buckets.category(&[255, 255, 255]), 0.75);
        assert_eq!(buckets.category(&[100, 100, 100]), 0.25);
        assert_eq!(buckets.category(&[160, 160, 160]), 0.5);
    }

    #[test]
    fn test_single_bucket_merges_everything() {
        let buckets = GrayBuckets::new(1);
        for v in [0u8, 64, 200, 255] {
            assert_eq!(buckets.category(&[v, v, v]), 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "max_categories must be positive")]
    fn test_zero_buckets_panics() {
        GrayBuckets::new(0);
    }

    #[test]
    fn test_categorize_field() {
        let pixels = Field::new(3, 1, vec![[0, 0, 0], [255, 255, 255], [10, 10, 10]]);
        let categories = categorize(&pixels, &GrayBuckets::new(2));
        assert_eq!(categories.data(), &[0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_closure_categorizer() {
        let pixels = Field::new(2, 2, vec![1u8, 2, 3, 4]);
        let categories = categorize(&pixels, &|p: &u8| f32::from(*p % 2));
        assert_eq!(categories.data(), &[1.0, 0.0, 1.0, 0.0]);
    }
}
