/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates the 3x3 window around `center` clipped to `bounds`, excluding
/// `center` itself. `center` must lie within `bounds`.
pub(crate) fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = bounds;
    debug_assert!(row < rows && col < cols);

    let row_window = row.saturating_sub(1)..=row.saturating_add(1).min(rows - 1);
    let col_window = col.saturating_sub(1)..=col.saturating_add(1).min(cols - 1);
    row_window
        .flat_map(move |r| col_window.clone().map(move |c| (r, c)))
        .filter(move |&pos| pos != center)
}
