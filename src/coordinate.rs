use crate::{MoveError, BOARD_LEN};
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// A `(row, column)` pair on the board. Signed so that placements reaching past the top or
/// left edge can still be described and rejected.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Move](crate::Move)
/// * [CENTER](crate::CENTER)
pub type Coordinate = (isize, isize);

/// Describes the direction a word is read in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Orientation {
    /// `0`. Left to right along a row.
    Horizontal = 0,
    /// `1`. Top to bottom along a column.
    Vertical = 1,
}

impl Orientation {
    /// The number of [`Orientation`] variants. 2 orientations.
    pub const ORIENTATIONS_LEN: usize = 2;

    /// # Returns
    ///
    /// The [coordinate](Coordinate) `offset` cells after `start` in this orientation.
    #[inline]
    pub fn step(self, (row, col): Coordinate, offset: isize) -> Coordinate {
        match self {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        }
    }

    /// # Returns
    ///
    /// The `len` [coordinates](Coordinate) starting at `start` in this orientation.
    pub fn path(self, start: Coordinate, len: usize) -> impl Iterator<Item = Coordinate> {
        (0..len as isize).map(move |offset| self.step(start, offset))
    }
}

impl TryFrom<char> for Orientation {
    type Error = MoveError;

    /// `H` or `O` is horizontal and `V` is vertical, in either case.
    ///
    /// # Errors
    ///
    /// * [MoveError::BadOrientation] for any other code.
    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_uppercase() {
            'H' | 'O' => Ok(Orientation::Horizontal),
            'V' => Ok(Orientation::Vertical),
            _ => Err(MoveError::BadOrientation { code }),
        }
    }
}

impl From<Orientation> for char {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl Distribution<Orientation> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        let index = rng.gen_range(0..Orientation::ORIENTATIONS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since orientations cover all indexes \
                in range 0..Orientation::ORIENTATIONS_LEN (0..{:?}).",
                index,
                Orientation::ORIENTATIONS_LEN
            );
        })
    }
}

/// Whether both components of `coordinate` lie in `0..`[BOARD_LEN].
#[inline]
pub fn in_bounds((row, col): Coordinate) -> bool {
    let len = BOARD_LEN as isize;
    (0..len).contains(&row) && (0..len).contains(&col)
}
