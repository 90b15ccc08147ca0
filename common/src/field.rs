//! Owned 2D pixel field addressed by `(row, col)`.
//!
//! Storage is row-major. Every core algorithm takes fields by reference or
//! exclusive reference and never keeps them past the call.

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

/// Row/column offsets of the 8-neighbourhood, row-major order.
static NEIGHBOR_OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field data length {actual} does not match {width}x{height}")]
    LengthMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },
}

/// Integer pixel coordinate. Valid range is `[0, height) x [0, width)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    pub row: usize,
    pub col: usize,
}

impl PixelCoord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed offset, returning `None` on underflow.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for PixelCoord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Field<T> {
    pub fn new(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "data length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn try_new(width: usize, height: usize, data: Vec<T>) -> Result<Self, FieldError> {
        if data.len() != width * height {
            return Err(FieldError::LengthMismatch {
                width,
                height,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a field by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn same_dims<U>(&self, other: &Field<U>) -> bool {
        self.dims() == other.dims()
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn contains(&self, coord: PixelCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// True for pixels on the outermost ring.
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.height && col < self.width);
        &self.data[row * self.width + col]
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.height && col < self.width);
        &mut self.data[row * self.width + col]
    }

    #[inline]
    pub fn checked_get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            Some(&self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// In-bounds 8-neighbours of `coord`. Neighbours on the border are
    /// yielded; positions outside the field are skipped.
    ///
    /// The iterator does not borrow the field, so callers may mutate
    /// neighbours while walking them.
    pub fn neighbors8(&self, coord: PixelCoord) -> impl Iterator<Item = PixelCoord> {
        let (width, height) = (self.width, self.height);
        NEIGHBOR_OFFSETS_8
            .iter()
            .filter_map(move |&(d_row, d_col)| coord.offset(d_row, d_col))
            .filter(move |n| n.row < height && n.col < width)
    }

    /// Coordinates of every pixel not on the outermost ring, row-major.
    pub fn interior(&self) -> impl Iterator<Item = PixelCoord> {
        let cols = 1..self.width.saturating_sub(1);
        (1..self.height.saturating_sub(1))
            .flat_map(move |row| cols.clone().map(move |col| PixelCoord { row, col }))
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Field<U> {
        Field {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T: Clone> Field<T> {
    pub fn new_filled(width: usize, height: usize, value: T) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T: Default + Clone> Field<T> {
    pub fn new_default(width: usize, height: usize) -> Self {
        Self::new_filled(width, height, T::default())
    }
}

impl Field<f32> {
    /// Largest value in the field, ignoring NaN. Empty fields yield 0.
    pub fn max_value(&self) -> f32 {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<f32>, v| Some(acc.map_or(v, |a| a.max(v))))
            .unwrap_or(0.0)
    }
}

impl<T> Index<(usize, usize)> for Field<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Field<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.width + col]
    }
}

impl<T> Index<PixelCoord> for Field<T> {
    type Output = T;

    #[inline]
    fn index(&self, coord: PixelCoord) -> &Self::Output {
        &self.data[coord.row * self.width + coord.col]
    }
}

impl<T> IndexMut<PixelCoord> for Field<T> {
    #[inline]
    fn index_mut(&mut self, coord: PixelCoord) -> &mut Self::Output {
        &mut self.data[coord.row * self.width + coord.col]
    }
}

impl<T> Deref for Field<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for Field<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<'a, T> IntoIterator for &'a Field<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> From<Field<T>> for Vec<T> {
    #[inline]
    fn from(field: Field<T>) -> Self {
        field.data
    }
}
