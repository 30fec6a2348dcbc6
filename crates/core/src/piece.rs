//! Pieces module - tetromino shapes and the rotation transform
//!
//! A [`Shape`] is a small rectangular grid of cell values (at most 4x4)
//! where a nonzero value marks an occupied cell and doubles as its color id.
//! Shapes are plain `Copy` values: the catalog templates are constants and
//! every piece handed out is an independent copy.

use crate::rng::SimpleRng;
use crate::types::{CellValue, PieceKind, EMPTY};

/// Largest side length of a shape grid
pub const MAX_SHAPE_SIDE: usize = 4;

const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// Rectangular piece grid, row-major with row 0 at the top.
///
/// Only the first `width * height` entries of `cells` are meaningful; the
/// rest stay zero so derived equality compares shapes by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [CellValue; MAX_SHAPE_CELLS],
}

impl Shape {
    /// Build a shape from packed row-major cells.
    ///
    /// Used for the catalog constants; sizes are fixed at compile time.
    const fn packed(width: u8, height: u8, src: &[CellValue]) -> Self {
        let mut cells = [EMPTY; MAX_SHAPE_CELLS];
        let mut i = 0;
        while i < src.len() {
            cells[i] = src[i];
            i += 1;
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a shape from rows.
    ///
    /// Returns None for an empty grid, ragged rows, or anything larger than
    /// 4x4.
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap();
    /// assert_eq!((t.width(), t.height()), (3, 2));
    /// assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
    /// ```
    pub fn from_rows(rows: &[&[CellValue]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0
            || width > MAX_SHAPE_SIDE
            || height > MAX_SHAPE_SIDE
            || rows.iter().any(|r| r.len() != width)
        {
            return None;
        }

        let mut cells = [EMPTY; MAX_SHAPE_CELLS];
        for (row, values) in rows.iter().enumerate() {
            cells[row * width..(row + 1) * width].copy_from_slice(values);
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Cell at (col, row), or None outside the grid
    pub fn get(&self, col: usize, row: usize) -> Option<CellValue> {
        if col >= self.width() || row >= self.height() {
            return None;
        }
        Some(self.cells[row * self.width() + col])
    }

    /// Iterate occupied cells as `(col, row, value)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        let width = self.width();
        self.cells[..width * self.height()]
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != EMPTY)
            .map(move |(i, &v)| (i % width, i / width, v))
    }

    /// Rotate by 90°: transpose, then reverse the row order.
    ///
    /// A `w x h` shape becomes `h x w`. Four rotations give back the
    /// original shape.
    pub fn rotate(&self) -> Shape {
        let (w, h) = (self.width(), self.height());
        let mut cells = [EMPTY; MAX_SHAPE_CELLS];
        // transposed[i][j] = self[j][i]; output row i is transposed row w-1-i.
        for i in 0..w {
            for j in 0..h {
                cells[i * h + j] = self.cells[j * w + (w - 1 - i)];
            }
        }
        Shape {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

const T_SHAPE: Shape = Shape::packed(3, 2, &[1, 1, 1, 0, 1, 0]);
const I_SHAPE: Shape = Shape::packed(4, 1, &[2, 2, 2, 2]);
const O_SHAPE: Shape = Shape::packed(2, 2, &[3, 3, 3, 3]);
const S_SHAPE: Shape = Shape::packed(3, 2, &[0, 4, 4, 4, 4, 0]);
const Z_SHAPE: Shape = Shape::packed(3, 2, &[5, 5, 0, 0, 5, 5]);
const J_SHAPE: Shape = Shape::packed(3, 2, &[6, 0, 0, 6, 6, 6]);
const L_SHAPE: Shape = Shape::packed(3, 2, &[0, 0, 7, 7, 7, 7]);

/// Spawn template for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => T_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Pick one of the seven catalog shapes uniformly at random
pub fn random_piece(rng: &mut SimpleRng) -> Shape {
    let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
    get_shape(PieceKind::ALL[idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_use_their_color_id() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            assert_eq!(shape.occupied().count(), 4, "{:?}", kind);
            assert!(shape.occupied().all(|(_, _, v)| v == kind.color_id()));
        }
    }

    #[test]
    fn test_padding_stays_zero_after_rotation() {
        let mut shape = get_shape(PieceKind::I);
        for _ in 0..3 {
            shape = shape.rotate();
            let used = shape.width() * shape.height();
            assert!(shape.cells[used..].iter().all(|&v| v == EMPTY));
        }
    }

    #[test]
    fn test_rotate_i_is_vertical() {
        let rotated = get_shape(PieceKind::I).rotate();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
    }

    #[test]
    fn test_rotate_j_matches_transpose_then_reverse() {
        // [[6,0,0],[6,6,6]] -> transpose [[6,6],[0,6],[0,6]] -> reverse rows
        let expected = Shape::from_rows(&[&[0, 6], &[0, 6], &[6, 6]]).unwrap();
        assert_eq!(get_shape(PieceKind::J).rotate(), expected);
    }

    #[test]
    fn test_from_rows_rejects_oversize() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        let tall: [&[u8]; 5] = [&[1], &[1], &[1], &[1], &[1]];
        assert!(Shape::from_rows(&tall).is_none());
    }

    #[test]
    fn test_random_piece_is_catalog_member() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..50 {
            let shape = random_piece(&mut rng);
            assert!(PieceKind::ALL.iter().any(|&k| get_shape(k) == shape));
        }
    }
}
