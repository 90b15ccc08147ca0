//! Configuration for edge detection and region segmentation.
//!
//! Both configs deserialize with `#[serde(default)]`, so a YAML document only
//! needs to name the fields it changes.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::labeling::ScanBias;
use crate::suppression::NeighborMode;

// ============================================================================
// Enums
// ============================================================================

/// How `low`/`high` in [`CannyConfig`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Fractions of the field's maximum magnitude.
    #[default]
    Fractional,
    /// Raw magnitudes, clamped into `[0, max]` before use.
    Absolute,
}

// ============================================================================
// Edge detection
// ============================================================================

/// Parameters for hysteresis edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyConfig {
    /// Low threshold. A fraction of the maximum magnitude in
    /// [`ThresholdMode::Fractional`], an absolute magnitude otherwise.
    pub low: f32,
    /// High threshold, same interpretation as `low`.
    pub high: f32,
    pub threshold_mode: ThresholdMode,
    /// Direction discretization for non-maximum suppression.
    pub neighbor_mode: NeighborMode,
}

impl Default for CannyConfig {
    fn default() -> Self {
        Self {
            low: 0.25,
            high: 0.5,
            threshold_mode: ThresholdMode::Fractional,
            neighbor_mode: NeighborMode::Four,
        }
    }
}

impl CannyConfig {
    /// Absolute thresholds, leaving the neighbor mode at its default.
    pub fn absolute(low: f32, high: f32) -> Self {
        Self {
            low,
            high,
            threshold_mode: ThresholdMode::Absolute,
            ..Self::default()
        }
    }

    /// Strict check for callers that want NaN thresholds rejected.
    /// Detection itself normalizes NaN to 0 and never calls this.
    pub fn validate(&self) {
        assert!(!self.low.is_nan(), "low threshold must not be NaN");
        assert!(!self.high.is_nan(), "high threshold must not be NaN");
    }
}

// ============================================================================
// Region segmentation
// ============================================================================

/// Parameters for raster region labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Neighbour whose label wins when north and west both match.
    pub bias: ScanBias,
    /// Number of gray buckets used when categorizing RGB input.
    pub max_categories: u32,
    /// Renumber canonical labels to `0..region_count`.
    pub compact_labels: bool,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            bias: ScanBias::North,
            max_categories: 10,
            compact_labels: false,
        }
    }
}

impl RegionConfig {
    pub fn validate(&self) {
        assert!(
            self.max_categories > 0,
            "max_categories must be positive, got {}",
            self.max_categories
        );
    }
}

// ============================================================================
// Combined
// ============================================================================

/// Top-level configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canny: CannyConfig,
    pub regions: RegionConfig,
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Config = serde_yml::from_str(yaml)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yml::to_string(self)?)
    }

    pub fn validate(&self) {
        self.canny.validate();
        self.regions.validate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.canny.low, 0.25);
        assert_eq!(config.canny.high, 0.5);
        assert_eq!(config.canny.threshold_mode, ThresholdMode::Fractional);
        assert_eq!(config.canny.neighbor_mode, NeighborMode::Four);
        assert_eq!(config.regions.bias, ScanBias::North);
        assert_eq!(config.regions.max_categories, 10);
        assert!(!config.regions.compact_labels);
        config.validate();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "canny:\n  neighbor_mode: eight\nregions:\n  bias: west\n";
        let config = Config::from_yaml_str(yaml).unwrap();

        assert_eq!(config.canny.neighbor_mode, NeighborMode::Eight);
        assert_eq!(config.canny.low, 0.25);
        assert_eq!(config.regions.bias, ScanBias::West);
        assert_eq!(config.regions.max_categories, 10);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            canny: CannyConfig::absolute(2.0, 6.5),
            regions: RegionConfig {
                bias: ScanBias::West,
                max_categories: 4,
                compact_labels: true,
            },
        };
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("absolute"));
        assert_eq!(Config::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = Config::from_yaml_str("canny:\n  neighbor_mode: sixteen\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    #[should_panic(expected = "max_categories must be positive")]
    fn test_zero_categories_panics() {
        RegionConfig {
            max_categories: 0,
            ..RegionConfig::default()
        }
        .validate();
    }

    #[test]
    #[should_panic(expected = "must not be NaN")]
    fn test_nan_threshold_panics() {
        CannyConfig {
            high: f32::NAN,
            ..CannyConfig::default()
        }
        .validate();
    }

    #[test]
    fn test_reversed_thresholds_are_valid() {
        CannyConfig::absolute(9.0, 1.0).validate();
    }
}
