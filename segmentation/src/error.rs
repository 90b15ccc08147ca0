//! Error types for segmentation operations.

use thiserror::Error;

use crate::labeling::Label;

/// Errors reported before any pixel is processed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Dimension mismatch for {what}: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        what: &'static str,
        /// `(width, height)`
        expected: (usize, usize),
        /// `(width, height)`
        actual: (usize, usize),
    },

    #[error("Pixel ({row}, {col}) lies outside the {width}x{height} field")]
    CoordinateOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("Label {label} is not covered by a mapping of {label_count} labels")]
    UnknownLabel {
        label: Label,
        label_count: usize,
    },

    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Failed to parse configuration")]
    Config(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::DimensionMismatch`] unless both fields share dimensions.
pub(crate) fn ensure_same_dims<A, B>(
    what: &'static str,
    expected: &common::Field<A>,
    actual: &common::Field<B>,
) -> Result<()> {
    if expected.same_dims(actual) {
        Ok(())
    } else {
        Err(Error::DimensionMismatch {
            what,
            expected: expected.dims(),
            actual: actual.dims(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Field;

    #[test]
    fn test_dimension_mismatch_error_message() {
        let err = Error::DimensionMismatch {
            what: "direction field",
            expected: (640, 480),
            actual: (320, 480),
        };
        let msg = err.to_string();
        assert!(msg.contains("direction field"));
        assert!(msg.contains("640"));
        assert!(msg.contains("320"));
    }

    #[test]
    fn test_coordinate_out_of_bounds_error_message() {
        let err = Error::CoordinateOutOfBounds {
            row: 7,
            col: 2,
            width: 5,
            height: 5,
        };
        assert_eq!(err.to_string(), "Pixel (7, 2) lies outside the 5x5 field");
    }

    #[test]
    fn test_unknown_label_error_message() {
        let err = Error::UnknownLabel {
            label: 12,
            label_count: 4,
        };
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("4 labels"));
    }

    #[test]
    fn test_invalid_config_error_message() {
        let err = Error::InvalidConfig {
            field: "max_categories",
            reason: "must be positive",
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_categories must be positive"
        );
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as StdError;

        let yaml_err = serde_yml::from_str::<u32>("[1, 2").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_ensure_same_dims() {
        let a: Field<f32> = Field::new_default(3, 4);
        let b: Field<u8> = Field::new_default(3, 4);
        let c: Field<u8> = Field::new_default(4, 3);
        assert!(ensure_same_dims("b", &a, &b).is_ok());
        match ensure_same_dims("c", &a, &c) {
            Err(Error::DimensionMismatch {
                what,
                expected,
                actual,
            }) => {
                assert_eq!(what, "c");
                assert_eq!(expected, (3, 4));
                assert_eq!(actual, (4, 3));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
