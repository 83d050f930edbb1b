use super::Grid;
use crate::index::coordinates;
use std::fmt;

const EMPTY_SLOT: &str = "_";

/// Renders one line per row with cells right-aligned to the widest cell. Empty slots show as `_`.
///
/// # Example
/// ```
/// use gmatrix::Grid;
///
/// let grid = Grid::from_data(vec![Some(1), None, Some(30), Some(4)], 2).unwrap();
/// assert_eq!(grid.to_string(), " 1  _\n30  4");
/// ```
impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .cells
            .iter()
            .map(|cell| match cell {
                Some(value) => value.to_string(),
                None => EMPTY_SLOT.to_string(),
            })
            .collect();
        let width = rendered
            .iter()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0);

        for (index, cell) in rendered.iter().enumerate() {
            match coordinates(index, self.columns) {
                (0, 0) => {}
                (0, _) => writeln!(f)?,
                _ => write!(f, " ")?,
            }
            write!(f, "{cell:>width$}")?;
        }
        Ok(())
    }
}
