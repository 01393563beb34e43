use crate::{Board, Placement, Premium, Selection};

/// Scores a validated [placement](Placement).
///
/// # Points Calculation
///
/// Each letter earns the points of its [tile](crate::Tile) times the letter multiplier of its
/// cell. Letters crossing the board reuse the tile already placed there, so a bound blank keeps
/// earning `0`. The sum is multiplied by the word multiplier of every
/// [double word](Premium::DoubleWord) and [triple word](Premium::TripleWord) cell the word
/// covers.
///
/// Only the placed word is scored. Words formed incidentally across it earn nothing.
///
/// # Arguments
///
/// * `board`: The board before the word is committed.
/// * `placement`: The validated placement.
/// * `selection`: The hand [tiles](crate::Tile) covering the empty cells of `placement`,
/// in reading order.
///
/// # Returns
///
/// The points earned by the word.
pub fn score_word(board: &Board, placement: &Placement, selection: &Selection) -> usize {
    let mut new_tiles = selection.iter().map(|&(_, tile)| tile);
    let mut letters_total = 0;
    let mut word_multiplier = 1;

    for square in &placement.squares {
        let points = square
            .placed
            .or_else(|| new_tiles.next())
            .map_or(0, |tile| tile.points());
        let premium = board
            .cell(square.coordinate)
            .map_or(Premium::None, |cell| cell.premium());

        letters_total += points * premium.letter_multiplier();
        word_multiplier *= premium.word_multiplier();
    }

    letters_total * word_multiplier
}
