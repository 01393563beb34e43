use crate::{tile_set, Hand, Tile};
use rand::Rng;

/// This is a bag of all the [tiles](Tile) that haven't been drawn yet.
///
/// The bag only shrinks. [Tiles](Tile) leave it through [Bag::draw] and never come back.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Bag {
    tiles: Vec<Tile>,
}

impl Bag {
    /// # Returns
    ///
    /// A bag holding the complete [tile set](tile_set).
    pub fn full() -> Bag {
        Bag { tiles: tile_set() }
    }

    /// # Returns
    ///
    /// A bag holding exactly `tiles`.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Bag {
        Bag {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// The number of [tiles](Tile) left in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the bag has run out of [tiles](Tile).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The [tiles](Tile) left in the bag, in no particular order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Draws up to `len` [tiles](Tile) uniformly at random without replacement. Fewer tiles are
    /// drawn when the bag runs out.
    ///
    /// Each draw picks an index and swaps the last tile into the hole, so the order of
    /// the remaining tiles changes but no tile is shifted.
    ///
    /// # Returns
    ///
    /// The drawn [tiles](Tile).
    pub fn draw<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> Hand {
        let len = len.min(self.tiles.len());
        (0..len)
            .map(|_| {
                let index = rng.gen_range(0..self.tiles.len());
                self.tiles.swap_remove(index)
            })
            .collect()
    }
}
