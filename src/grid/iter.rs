use super::Grid;
use crate::index::coordinates;
use std::iter::{Enumerate, FusedIterator};

/// Borrowing iterator over `(x, y, value)`, created by [`Grid::iter`].
///
/// Holds only a position into the grid and reads each slot when it is produced.
pub struct Iter<'a, T> {
    grid: &'a Grid<T>,
    position: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(grid: &'a Grid<T>) -> Self {
        Self { grid, position: 0 }
    }

    fn remaining(&self) -> usize {
        self.grid.cells.len().saturating_sub(self.position)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            position: self.position,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (usize, usize, Option<&'a T>);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.grid.cells.get(self.position)?;
        let (x, y) = coordinates(self.position, self.grid.columns);
        self.position += 1;
        Some((x, y, slot.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `(x, y, &mut slot)`, created by [`Grid::iter_mut`].
pub struct IterMut<'a, T> {
    columns: usize,
    slots: Enumerate<std::slice::IterMut<'a, Option<T>>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(columns: usize, cells: &'a mut [Option<T>]) -> Self {
        Self {
            columns,
            slots: cells.iter_mut().enumerate(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (usize, usize, &'a mut Option<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, slot) = self.slots.next()?;
        let (x, y) = coordinates(index, self.columns);
        Some((x, y, slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over `(x, y, value)`, created by `Grid::into_iter`.
pub struct IntoIter<T> {
    columns: usize,
    slots: Enumerate<std::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = (usize, usize, Option<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, slot) = self.slots.next()?;
        let (x, y) = coordinates(index, self.columns);
        Some((x, y, slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Grid<T> {
    type Item = (usize, usize, Option<T>);
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            columns: self.columns,
            slots: self.cells.into_iter().enumerate(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = (usize, usize, Option<&'a T>);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = (usize, usize, &'a mut Option<T>);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
