use crate::{in_bounds, Board, Coordinate, MoveError, Orientation, Tile, CENTER};

/// A word a player proposes to put on the board, as received from the player.
///
/// Letters are stored uppercase. The orientation is kept as the raw code the player sent and
/// is only interpreted by [validate_move].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    word: Vec<char>,
    start: Coordinate,
    orientation: char,
}

impl Move {
    /// # Arguments
    ///
    /// * `word`: The word to place. Case is ignored.
    /// * `start`: The [coordinate](Coordinate) of the first letter.
    /// * `orientation`: `H` (or `O`) for horizontal, `V` for vertical.
    pub fn new(word: &str, start: Coordinate, orientation: char) -> Move {
        Move {
            word: word.chars().map(|letter| letter.to_ascii_uppercase()).collect(),
            start,
            orientation,
        }
    }

    /// # Returns
    ///
    /// A [Move] reading left to right from `start`.
    pub fn horizontal(word: &str, start: Coordinate) -> Move {
        Move::new(word, start, Orientation::Horizontal.into())
    }

    /// # Returns
    ///
    /// A [Move] reading top to bottom from `start`.
    pub fn vertical(word: &str, start: Coordinate) -> Move {
        Move::new(word, start, Orientation::Vertical.into())
    }

    /// The uppercase letters of the word.
    #[inline]
    pub fn word(&self) -> &[char] {
        &self.word
    }

    /// The [coordinate](Coordinate) of the first letter.
    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// The raw orientation code.
    #[inline]
    pub fn orientation(&self) -> char {
        self.orientation
    }
}

/// One letter of a validated [Placement].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Square {
    /// Where the letter goes.
    pub coordinate: Coordinate,
    /// The uppercase letter.
    pub letter: char,
    /// The [tile](Tile) already on the board with the same letter, if the word crosses it.
    pub placed: Option<Tile>,
}

/// A [Move] which passed [validate_move], resolved to board [coordinates](Coordinate).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    /// The direction the word is read in.
    pub orientation: Orientation,
    /// Every letter of the word in reading order.
    pub squares: Vec<Square>,
}

impl Placement {
    /// # Returns
    ///
    /// The letters which land on empty cells, in reading order. These are the letters the
    /// player has to supply from their hand.
    pub fn required_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.squares
            .iter()
            .filter(|square| square.placed.is_none())
            .map(|square| square.letter)
    }
}

/// Checks `word_move` against `board` without changing anything.
///
/// The checks run in order and the first failure is returned:
///
/// 1. The start [coordinate](Coordinate) is on the board.
/// 2. The orientation code names an [orientation](Orientation).
/// 3. The last letter is on the board.
/// 4. Some letter covers the [center](CENTER) or a cell which already holds a letter.
/// 5. Every occupied cell along the word already holds the letter placed there.
///
/// # Errors
///
/// * [MoveError::OutOfBounds] The start or the end of the word is outside the board.
/// * [MoveError::BadOrientation] The orientation code is neither horizontal nor vertical.
/// * [MoveError::NoIntersection] The word neither covers the center nor crosses a letter.
/// * [MoveError::LetterConflict] The word would overwrite a different letter.
///
/// # Returns
///
/// The [placement](Placement) of every letter.
pub fn validate_move(board: &Board, word_move: &Move) -> Result<Placement, MoveError> {
    let start = word_move.start();
    if !in_bounds(start) {
        return Err(MoveError::OutOfBounds { coordinate: start });
    }

    let orientation = Orientation::try_from(word_move.orientation())?;

    let word = word_move.word();
    if let Some(last) = word.len().checked_sub(1) {
        let end = orientation.step(start, last as isize);
        if !in_bounds(end) {
            return Err(MoveError::OutOfBounds { coordinate: end });
        }
    }

    let squares: Vec<Square> = orientation
        .path(start, word.len())
        .zip(word)
        .map(|(coordinate, &letter)| Square {
            coordinate,
            letter,
            placed: board.cell(coordinate).and_then(|cell| cell.tile()),
        })
        .collect();

    let intersects = squares
        .iter()
        .any(|square| square.coordinate == CENTER || square.placed.is_some());
    if !intersects {
        return Err(MoveError::NoIntersection);
    }

    for square in &squares {
        let Some(placed) = square.placed.and_then(|tile| tile.face()) else {
            continue;
        };
        if placed != square.letter {
            return Err(MoveError::LetterConflict {
                coordinate: square.coordinate,
                placed,
                letter: square.letter,
            });
        }
    }

    Ok(Placement {
        orientation,
        squares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_LEN;
    use itertools::Itertools;
    use rand::Rng;

    fn board_with(word: &str, start: Coordinate, orientation: Orientation) -> Board {
        let mut board = Board::new();
        for (coordinate, letter) in orientation.path(start, word.len()).zip(word.chars()) {
            board.place(coordinate, Tile::letter(letter, 1)).unwrap();
        }
        board
    }

    #[test]
    fn first_word_on_center() {
        let board = Board::new();

        let placement = validate_move(&board, &Move::horizontal("casa", (8, 6))).unwrap();

        assert_eq!(Orientation::Horizontal, placement.orientation);
        assert_eq!(
            vec![(8, 6), (8, 7), (8, 8), (8, 9)],
            placement.squares.iter().map(|square| square.coordinate).collect_vec()
        );
        assert_eq!(
            vec!['C', 'A', 'S', 'A'],
            placement.required_letters().collect_vec()
        );
    }

    #[test]
    fn start_out_of_bounds() {
        let board = Board::new();

        for start in [(-1, 4), (4, -1), (17, 0), (0, 17)] {
            assert_eq!(
                Err(MoveError::OutOfBounds { coordinate: start }),
                validate_move(&board, &Move::horizontal("ZA", start))
            );
        }
    }

    #[test]
    fn end_out_of_bounds_horizontal() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::OutOfBounds { coordinate: (8, 17) }),
            validate_move(&board, &Move::horizontal("CASA", (8, 14)))
        );
    }

    #[test]
    fn end_out_of_bounds_vertical() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::OutOfBounds { coordinate: (18, 8) }),
            validate_move(&board, &Move::vertical("CASA", (15, 8)))
        );
    }

    #[test]
    fn word_reaches_last_cell() {
        let board = board_with("ORO", (16, 14), Orientation::Horizontal);

        assert!(validate_move(&board, &Move::vertical("ERO", (14, 16))).is_ok());
    }

    #[test]
    fn bad_orientation() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::BadOrientation { code: 'D' }),
            validate_move(&board, &Move::new("CASA", (8, 6), 'D'))
        );
    }

    #[test]
    fn start_checked_before_orientation() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::OutOfBounds { coordinate: (20, 3) }),
            validate_move(&board, &Move::new("CASA", (20, 3), 'D'))
        );
    }

    #[test]
    fn no_intersection_on_empty_board() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::NoIntersection),
            validate_move(&board, &Move::horizontal("ZA", (2, 2)))
        );
    }

    #[test]
    fn no_intersection_beside_word() {
        let board = board_with("CASA", (8, 6), Orientation::Horizontal);

        assert_eq!(
            Err(MoveError::NoIntersection),
            validate_move(&board, &Move::horizontal("ZA", (9, 6)))
        );
    }

    #[test]
    fn empty_word() {
        let board = Board::new();

        assert_eq!(
            Err(MoveError::NoIntersection),
            validate_move(&board, &Move::horizontal("", (8, 8)))
        );
    }

    #[test]
    fn crossing_word() {
        let board = board_with("CASA", (8, 6), Orientation::Horizontal);

        let placement = validate_move(&board, &Move::vertical("ORSO", (6, 8))).unwrap();

        assert_eq!(Some(Tile::letter('S', 1)), placement.squares[2].placed);
        assert_eq!(
            vec!['O', 'R', 'O'],
            placement.required_letters().collect_vec()
        );
    }

    #[test]
    fn letter_conflict() {
        let board = board_with("CASA", (8, 6), Orientation::Horizontal);

        assert_eq!(
            Err(MoveError::LetterConflict {
                coordinate: (8, 8),
                placed: 'S',
                letter: 'T',
            }),
            validate_move(&board, &Move::vertical("ATE", (7, 8)))
        );
    }

    #[test]
    fn crossing_bound_blank() {
        let mut board = Board::new();
        board.place((8, 8), Tile::Blank.bind('E')).unwrap();

        let placement = validate_move(&board, &Move::horizontal("RE", (8, 7))).unwrap();

        assert_eq!(Some(Tile::Bound { letter: 'E' }), placement.squares[1].placed);
    }

    #[test]
    fn validate_is_pure() {
        let mut rng = rand::thread_rng();
        let board = board_with("CASA", (8, 6), Orientation::Horizontal);
        let before = board.clone();
        let start = (
            rng.gen_range(-2..BOARD_LEN as isize + 2),
            rng.gen_range(-2..BOARD_LEN as isize + 2),
        );
        let orientation: Orientation = rng.gen();

        let _ = validate_move(&board, &Move::new("TESTO", start, orientation.into()));

        assert_eq!(before, board);
    }
}
