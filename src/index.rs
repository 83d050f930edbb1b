/// Returns the slot index of `(x, y)` in a row-major store with `columns` columns.
pub fn linear_index(x: usize, y: usize, columns: usize) -> usize {
    y * columns + x
}

/// Returns the `(x, y)` coordinates of slot `index` in a row-major store.
///
/// `columns` must be non-zero. A store with zero columns has no slots, so no index exists to
/// convert.
pub fn coordinates(index: usize, columns: usize) -> (usize, usize) {
    (index % columns, index / columns)
}
