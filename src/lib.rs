//! This crate provides [`Grid`], a fixed-size two-dimensional container backed by a single
//! row-major `Vec` of optional slots.
//!
//! Every slot holds an `Option<T>`, so an empty slot is never confused with a value of `T`.
//! Elements are addressed by `(x, y)` where `x` is the column and `y` the row.
//!
//! # Example
//! ```
//! use gmatrix::{Grid, GridError};
//!
//! let mut grid = Grid::filled(Some(0), 5, 10);
//! grid.set(0, 1, Some(42)).unwrap();
//!
//! assert_eq!(grid.get(0, 1), Ok(Some(&42)));
//! assert_eq!(grid.get(0, 0), Ok(Some(&0)));
//! assert_eq!(grid.get(10, 0), Err(GridError::XOutOfBounds { x: 10, columns: 10 }));
//! ```

/// The [`Grid`] container and its iterators.
pub mod grid;
/// Row-major mapping between `(x, y)` coordinates and linear slot indices.
///
/// # Example
/// ```
/// use gmatrix::index::{coordinates, linear_index};
///
/// assert_eq!(linear_index(2, 1, 3), 5);
/// assert_eq!(coordinates(5, 3), (2, 1));
/// ```
pub mod index;

pub use grid::{Grid, IntoIter, Iter, IterMut};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// `rows` is set when the row count was given rather than derived from `len`.
    #[error("Invalid shape: {len} cells cannot back {}", describe_shape(.rows, .columns))]
    InvalidShape {
        len: usize,
        rows: Option<usize>,
        columns: usize,
    },

    #[error("x={x} is out of bounds for {columns} columns")]
    XOutOfBounds { x: usize, columns: usize },

    #[error("y={y} is out of bounds for {rows} rows")]
    YOutOfBounds { y: usize, rows: usize },
}

fn describe_shape(rows: &Option<usize>, columns: &usize) -> String {
    match rows {
        Some(rows) => format!("a {rows}x{columns} grid"),
        None => format!("a grid with {columns} columns"),
    }
}
