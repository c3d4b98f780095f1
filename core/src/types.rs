use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts, cell counts, and the move counter.
pub type CellCount = u16;

/// Zero-indexed board coordinates `(row, col)`.
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

/// Shape of an `Array2` as board coordinates. Boards never exceed `Coord::MAX` on either axis.
pub(crate) fn dim_to_size<T>(array: &Array2<T>) -> Coord2 {
    let (rows, cols) = array.dim();
    (
        Coord::try_from(rows).unwrap_or(Coord::MAX),
        Coord::try_from(cols).unwrap_or(Coord::MAX),
    )
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, dim_to_size(self))
    }
}

/// Iterates every coordinate of a `size` board in row-major order.
pub fn iter_coords((rows, cols): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// The up-to-eight orthogonal and diagonal neighbors of a cell that lie inside the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
