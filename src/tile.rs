use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// The number of distinct kinds of [`Tile`] in the tile set. 21 letters and the blank.
pub const TILE_KINDS_LEN: usize = 22;

/// The number of [`Tile`]s in the game. 130 tiles.
pub const TILES_LEN: usize = {
    let mut len = 0;
    let mut index = 0;
    while index < TILE_KINDS_LEN {
        len += TILE_COUNTS[index].1;
        index += 1;
    }
    len
};
const _: () = assert!(TILES_LEN == 130);

/// Every kind of [`Tile`] paired with the number of copies in the tile set, ordered by
/// point value.
pub const TILE_COUNTS: [(Tile, usize); TILE_KINDS_LEN] = [
    (Tile::letter('A', 1), 12),
    (Tile::letter('E', 1), 12),
    (Tile::letter('I', 1), 12),
    (Tile::letter('O', 1), 12),
    (Tile::letter('C', 1), 7),
    (Tile::letter('R', 1), 7),
    (Tile::letter('S', 1), 7),
    (Tile::letter('T', 1), 7),
    (Tile::letter('L', 2), 6),
    (Tile::letter('M', 2), 6),
    (Tile::letter('N', 2), 6),
    (Tile::letter('P', 3), 4),
    (Tile::letter('U', 4), 4),
    (Tile::letter('B', 4), 4),
    (Tile::letter('D', 4), 4),
    (Tile::letter('F', 4), 4),
    (Tile::letter('G', 4), 4),
    (Tile::letter('V', 4), 4),
    (Tile::letter('H', 8), 2),
    (Tile::letter('Z', 8), 2),
    (Tile::letter('Q', 10), 2),
    (Tile::Blank, 2),
];

/// Describes a tile in a game.
///
/// A [blank](Tile::Blank) has no letter until it is [bound](Tile::Bound) while committing a
/// move. Binding cannot be undone, and a bound blank is worth `0` points wherever it goes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tile {
    /// A tile printed with a letter.
    Letter {
        /// The uppercase letter on the tile.
        letter: char,
        /// The points earned by the tile before multipliers.
        points: usize,
    },
    /// A wildcard which has not been played yet.
    Blank,
    /// A wildcard which has been played as `letter`.
    Bound {
        /// The uppercase letter the wildcard stands for.
        letter: char,
    },
}

impl Tile {
    /// # Returns
    ///
    /// A [`Tile::Letter`] with `letter` and `points`.
    #[inline]
    pub const fn letter(letter: char, points: usize) -> Tile {
        Tile::Letter { letter, points }
    }

    /// # Returns
    ///
    /// The letter shown on the tile, or [None] for an unbound [blank](Tile::Blank).
    #[inline]
    pub fn face(&self) -> Option<char> {
        match *self {
            Tile::Letter { letter, .. } | Tile::Bound { letter } => Some(letter),
            Tile::Blank => None,
        }
    }

    /// # Returns
    ///
    /// The points earned by the tile before multipliers. Always `0` for wildcards.
    #[inline]
    pub fn points(&self) -> usize {
        match *self {
            Tile::Letter { points, .. } => points,
            Tile::Blank | Tile::Bound { .. } => 0,
        }
    }

    /// Whether the tile is an unbound [blank](Tile::Blank).
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }

    /// Binds a [blank](Tile::Blank) to `letter`. Any other tile is returned unchanged.
    pub(crate) fn bind(self, letter: char) -> Tile {
        match self {
            Tile::Blank => Tile::Bound { letter },
            tile => tile,
        }
    }
}

impl fmt::Display for Tile {
    /// Letters are uppercase, bound blanks are lowercase, and unbound blanks are `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Tile::Letter { letter, .. } => write!(f, "{letter}"),
            Tile::Bound { letter } => write!(f, "{}", letter.to_ascii_lowercase()),
            Tile::Blank => write!(f, "*"),
        }
    }
}

impl Distribution<Tile> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        TILE_COUNTS[rng.gen_range(0..TILE_KINDS_LEN)].0
    }
}

/// # Returns
///
/// Every [tile](Tile) in the game, [`TILES_LEN`] in total, in [`TILE_COUNTS`] order.
pub fn tile_set() -> Vec<Tile> {
    TILE_COUNTS
        .iter()
        .flat_map(|&(tile, count)| std::iter::repeat(tile).take(count))
        .collect()
}
