use crate::{
    Bag, Board, Coordinate, Hand, Hands, Move, Orientation, Scores, Tile, BOARD_LEN, CENTER,
    HAND_LEN, PLAYER_CAPACITY,
};
use itertools::{iproduct, Itertools};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// Letters a [blank](Tile::Blank) stands for in random words.
const BLANK_LETTERS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// # Returns
///
/// A bag of a random, small, non-zero number of random [tiles](Tile).
pub fn random_bag<R: Rng + ?Sized>(rng: &mut R) -> Bag {
    let bag_len = rng.gen_range(10..20);
    Bag::from_tiles((0..bag_len).map(|_| rng.gen::<Tile>()))
}

/// Pushes the same random, non-zero number of random [tiles](Tile) into each hand without
/// going over [HAND_LEN].
///
/// # Returns
///
/// The number of additional [tiles](Tile) in each hand.
pub fn random_hands<R: Rng + ?Sized>(rng: &mut R, hands: &mut Hands) -> usize {
    let room = hands
        .iter()
        .map(|hand| HAND_LEN - hand.len())
        .min()
        .unwrap_or(HAND_LEN);
    if room == 0 {
        return 0;
    }

    let hand_len = rng.gen_range(1..=room);
    for hand in hands.iter_mut() {
        hand.extend((0..hand_len).map(|_| rng.gen::<Tile>()));
    }

    hand_len
}

/// # Returns
///
/// Scores for a random number of players between `2` and [PLAYER_CAPACITY]. Scores are
/// drawn from a narrow range so ties are common.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R) -> Scores {
    let players_len = rng.gen_range(2..=PLAYER_CAPACITY.max(2));
    (0..players_len).map(|_| rng.gen_range(0..10)).collect()
}

/// Sets the current player to a random number between `0` inclusive and `players_len`
/// exclusive.
///
/// # Panics
///
/// If `players_len` is `0`
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players_len: usize,
) -> usize {
    *current_player = rng.gen_range(0..players_len);
    *current_player
}

/// Builds a [move](Move) from a random selection of `hand` which covers the center on an empty
/// board, or crosses a random letter already on the board. Blanks stand for a random vowel.
///
/// The move is plausible, not legal: it may leave the board, overwrite a different letter, or
/// need more blanks than the hand holds.
pub fn random_crossing_move<R: Rng + ?Sized>(rng: &mut R, board: &Board, hand: &Hand) -> Move {
    let orientation: Orientation = rng.gen();
    let mut letters = hand
        .iter()
        .filter_map(|tile| match *tile {
            Tile::Letter { letter, .. } | Tile::Bound { letter } => Some(letter),
            Tile::Blank => BLANK_LETTERS.choose(rng).copied(),
        })
        .collect_vec()
        .tap_mut(|letters| letters.shuffle(rng));
    letters.truncate(rng.gen_range(0..=letters.len()));

    let occupied: Vec<Coordinate> = iproduct!(0..BOARD_LEN as isize, 0..BOARD_LEN as isize)
        .filter(|&coordinate| board.letter(coordinate).is_some())
        .collect();
    let (anchor, anchor_letter) = match occupied.choose(rng) {
        Some(&coordinate) => (coordinate, board.letter(coordinate)),
        None => (CENTER, None),
    };

    let offset = match anchor_letter {
        Some(letter) => {
            let offset = rng.gen_range(0..=letters.len());
            letters.insert(offset, letter);
            offset
        }
        None => rng.gen_range(0..letters.len().max(1)),
    };

    let word: String = letters.into_iter().collect();
    let start = orientation.step(anchor, -(offset as isize));
    Move::new(&word, start, orientation.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_move;
    use smallvec::smallvec;

    #[test]
    fn random_bag_not_empty() {
        let bag = random_bag(&mut rand::thread_rng());

        assert!(!bag.is_empty());
    }

    #[test]
    fn random_hands_same_len() {
        let mut rng = rand::thread_rng();
        let mut hands: Hands = smallvec![Hand::new(), Hand::new(), Hand::new()];

        let hand_len = random_hands(&mut rng, &mut hands);

        assert!(hand_len > 0);
        assert!(hands.iter().all(|hand| hand.len() == hand_len));
    }

    #[test]
    fn random_crossing_move_on_empty_board_covers_center() {
        let mut rng = rand::thread_rng();
        let board = Board::new();
        let hand: Hand = smallvec![Tile::letter('C', 1), Tile::letter('A', 1), Tile::Blank];

        for _ in 0..20 {
            let word_move = random_crossing_move(&mut rng, &board, &hand);

            if !word_move.word().is_empty() {
                assert_eq!(Ok(()), validate_move(&board, &word_move).map(|_| ()));
            }
        }
    }
}
