use crate::{index::linear_index, GridError};
use tracing::*;

mod display;
mod iter;
#[cfg(feature = "serde")]
mod raw;

pub use iter::{IntoIter, Iter, IterMut};

/// A fixed-size grid of optional slots stored in row-major order.
///
/// The backing store always holds exactly `rows * columns` slots. There is no way to resize a
/// grid after construction.
///
/// # Example
/// ```
/// use gmatrix::Grid;
///
/// let grid = Grid::from_values(vec![1, 2, 3, 4, 5, 6], 3).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.columns(), 3);
/// assert_eq!(grid.try_get(2, 1), Some(&6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawGrid<T>"))]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

/// Slot count of a `rows` x `columns` grid.
///
/// # Panics
/// If `rows * columns` overflows `usize`, like `Vec` on capacity overflow.
fn slot_count(rows: usize, columns: usize) -> usize {
    rows.checked_mul(columns).expect("grid capacity overflow")
}

impl<T> Grid<T> {
    /// Creates a `rows` x `columns` grid with every slot empty.
    ///
    /// # Example
    /// ```
    /// use gmatrix::Grid;
    ///
    /// let grid: Grid<String> = Grid::new(10, 10);
    /// assert!(grid.cells().iter().all(Option::is_none));
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        trace!("Creating empty grid rows={} columns={}", rows, columns);
        Self {
            rows,
            columns,
            cells: std::iter::repeat_with(|| None)
                .take(slot_count(rows, columns))
                .collect(),
        }
    }

    /// Creates a `rows` x `columns` grid with every slot set to a clone of `initial`.
    ///
    /// Zero dimensions are allowed and produce an empty backing store.
    ///
    /// # Example
    /// ```
    /// use gmatrix::Grid;
    ///
    /// let grid = Grid::filled(Some("Hello, World!"), 5, 10);
    /// assert_eq!(grid.len(), 50);
    /// assert!(grid.cells().iter().all(|cell| *cell == Some("Hello, World!")));
    /// ```
    pub fn filled(initial: Option<T>, rows: usize, columns: usize) -> Self
    where
        T: Clone,
    {
        trace!("Creating filled grid rows={} columns={}", rows, columns);
        Self {
            rows,
            columns,
            cells: vec![initial; slot_count(rows, columns)],
        }
    }

    /// Creates a grid from a flat row-major store, deriving the row count from its length.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidShape`] if `cells.len()` is not a multiple of `columns`, or if
    /// `columns` is zero and `cells` is not empty.
    ///
    /// # Example
    /// ```
    /// use gmatrix::{Grid, GridError};
    ///
    /// let grid = Grid::from_data(vec![Some(1), None, Some(3), Some(4)], 2).unwrap();
    /// assert_eq!(grid.rows(), 2);
    ///
    /// let err = Grid::from_data(vec![Some(1), Some(2), Some(3)], 2).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     GridError::InvalidShape { len: 3, rows: None, columns: 2 }
    /// );
    /// ```
    pub fn from_data(cells: Vec<Option<T>>, columns: usize) -> Result<Self, GridError> {
        let len = cells.len();
        let rows = match columns {
            0 if len == 0 => 0,
            c if c > 0 && len % c == 0 => len / c,
            _ => {
                error!(
                    "Invalid shape: len={} is not a multiple of columns={}",
                    len, columns
                );
                return Err(GridError::InvalidShape {
                    len,
                    rows: None,
                    columns,
                });
            }
        };
        trace!("Creating grid from data rows={} columns={}", rows, columns);
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Same as [`Grid::from_data`] with every slot present.
    ///
    /// # Example
    /// ```
    /// use gmatrix::Grid;
    ///
    /// let grid = Grid::from_values(vec!['a', 'b', 'c', 'd'], 2).unwrap();
    /// assert_eq!(grid.get(1, 1), Ok(Some(&'d')));
    /// assert!(Grid::from_values(vec!['a', 'b', 'c'], 2).is_err());
    /// ```
    pub fn from_values(values: Vec<T>, columns: usize) -> Result<Self, GridError> {
        Self::from_data(values.into_iter().map(Some).collect(), columns)
    }

    /// Number of rows, fixed at construction.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, fixed at construction.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of slots, always `rows * columns`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no slots, i.e. either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The backing store in row-major order.
    pub fn cells(&self) -> &[Option<T>] {
        &self.cells
    }

    /// Consumes the grid and returns its backing store.
    pub fn into_cells(self) -> Vec<Option<T>> {
        self.cells
    }

    /// Returns `true` if `x` addresses a column of this grid.
    pub fn is_valid_x(&self, x: usize) -> bool {
        x < self.columns
    }

    /// Returns `true` if `y` addresses a row of this grid.
    pub fn is_valid_y(&self, y: usize) -> bool {
        y < self.rows
    }

    /// Validates `(x, y)` and maps it to a slot index. The x axis is checked first.
    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if !self.is_valid_x(x) {
            trace!("x={} out of bounds for columns={}", x, self.columns);
            return Err(GridError::XOutOfBounds {
                x,
                columns: self.columns,
            });
        }
        if !self.is_valid_y(y) {
            trace!("y={} out of bounds for rows={}", y, self.rows);
            return Err(GridError::YOutOfBounds { y, rows: self.rows });
        }
        Ok(linear_index(x, y, self.columns))
    }

    /// Reads the slot at `(x, y)`.
    ///
    /// # Errors
    /// [`GridError::XOutOfBounds`] if `x` is invalid, otherwise [`GridError::YOutOfBounds`] if `y`
    /// is invalid.
    ///
    /// # Example
    /// ```
    /// use gmatrix::{Grid, GridError};
    ///
    /// let grid = Grid::filled(Some(42), 10, 5);
    /// assert_eq!(grid.get(3, 8), Ok(Some(&42)));
    /// assert_eq!(grid.get(5, 10), Err(GridError::XOutOfBounds { x: 5, columns: 5 }));
    /// assert_eq!(grid.get(4, 10), Err(GridError::YOutOfBounds { y: 10, rows: 10 }));
    /// ```
    pub fn get(&self, x: usize, y: usize) -> Result<Option<&T>, GridError> {
        let index = self.checked_index(x, y)?;
        Ok(self.cells[index].as_ref())
    }

    /// Mutable access to the slot at `(x, y)`, with the same checks as [`Grid::get`].
    ///
    /// # Example
    /// ```
    /// use gmatrix::Grid;
    ///
    /// let mut grid = Grid::filled(Some(0), 5, 10);
    /// if let Some(value) = grid.get_mut(0, 0).unwrap() {
    ///     *value += 22;
    /// }
    /// assert_eq!(grid.try_get(0, 0), Some(&22));
    /// ```
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Option<T>, GridError> {
        let index = self.checked_index(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Replaces the slot at `(x, y)`, with the same checks as [`Grid::get`].
    pub fn set(&mut self, x: usize, y: usize, value: Option<T>) -> Result<(), GridError> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Returns row `y` as a slice of `columns` slots.
    ///
    /// # Errors
    /// [`GridError::YOutOfBounds`] if `y` is invalid.
    pub fn row(&self, y: usize) -> Result<&[Option<T>], GridError> {
        if !self.is_valid_y(y) {
            trace!("y={} out of bounds for rows={}", y, self.rows);
            return Err(GridError::YOutOfBounds { y, rows: self.rows });
        }
        let start = linear_index(0, y, self.columns);
        Ok(&self.cells[start..start + self.columns])
    }

    /// Reads the value at `(x, y)`, returning `None` for an empty slot or invalid coordinates.
    ///
    /// Use [`Grid::get`] to tell the two apart.
    pub fn try_get(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x, y).ok().flatten()
    }

    /// Mutable counterpart of [`Grid::try_get`].
    pub fn try_get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.get_mut(x, y).ok().and_then(Option::as_mut)
    }

    /// Writes `value` at `(x, y)`. Invalid coordinates leave the grid untouched.
    ///
    /// Use [`Grid::set`] to detect out-of-bounds writes.
    pub fn try_set(&mut self, x: usize, y: usize, value: Option<T>) {
        if let Ok(slot) = self.get_mut(x, y) {
            *slot = value;
        }
    }

    /// Returns an iterator over `(x, y, value)` in row-major order.
    ///
    /// # Example
    /// ```
    /// use gmatrix::Grid;
    ///
    /// let grid = Grid::from_data(vec![Some('a'), None, Some('c'), Some('d')], 2).unwrap();
    /// let triples: Vec<_> = grid.iter().collect();
    /// assert_eq!(
    ///     triples,
    ///     vec![(0, 0, Some(&'a')), (1, 0, None), (0, 1, Some(&'c')), (1, 1, Some(&'d'))]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns an iterator over `(x, y, slot)` with mutable slots, in row-major order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.columns, &mut self.cells)
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
