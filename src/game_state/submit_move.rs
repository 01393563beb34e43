use crate::{
    resolve_wildcards, score_word, validate_move, Coordinate, GameState, Move, Placement,
    Selection, HAND_LEN,
};
use itertools::Itertools;
use thiserror::Error;
use tracing::{debug, info};

/// Describes the reason why a [move](Move) or a pass was rejected. The game is left unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum MoveError {
    /// The start or the end of the word is outside the board.
    #[error("{coordinate:?} is outside the board")]
    OutOfBounds {
        /// The first [coordinate](Coordinate) found outside the board.
        coordinate: Coordinate,
    },
    /// The orientation code is neither horizontal nor vertical.
    #[error("{code:?} is not an orientation, expected 'H' or 'V'")]
    BadOrientation {
        /// The code received.
        code: char,
    },
    /// The word neither covers the center nor crosses a letter already on the board.
    #[error("the word must cover the center or cross a letter on the board")]
    NoIntersection,
    /// The word would overwrite a different letter already on the board.
    #[error("{coordinate:?} already holds {placed:?}, not {letter:?}")]
    LetterConflict {
        /// Where the letters disagree.
        coordinate: Coordinate,
        /// The letter on the board.
        placed: char,
        /// The letter of the word.
        letter: char,
    },
    /// The hand holds fewer [tiles](crate::Tile) than the word has letters.
    #[error("the word has {required} letters but the hand holds {hand_len} tiles")]
    InsufficientTileCount {
        /// The number of letters in the word.
        required: usize,
        /// The number of [tiles](crate::Tile) in the hand.
        hand_len: usize,
    },
    /// Every letter of the word is already on the board.
    #[error("the word must place at least one tile")]
    NoNewTiles,
    /// Some letters are missing from the hand, and the blanks cannot cover them or were
    /// declined.
    #[error("{missing} letters are missing from the hand which holds {blanks} blanks")]
    InsufficientTiles {
        /// The number of letters the lettered [tiles](crate::Tile) of the hand cannot supply.
        missing: usize,
        /// The number of [blanks](crate::Tile::Blank) in the hand.
        blanks: usize,
    },
    /// The game has [finished](crate::Phase::Finished).
    #[error("the game has already finished")]
    GameAlreadyFinished,
    /// It is not the turn of the player.
    #[error("player {player} moved during the turn of player {current_player}")]
    NotCurrentPlayer {
        /// The player who attempted to move.
        player: usize,
        /// The index of the player whose turn it is.
        current_player: usize,
    },
}

impl GameState {
    /// If `word_move` is legal for `player`, places the word on the board, adds its points to
    /// the score of `player`, refills their hand from the bag, and advances to the next player.
    ///
    /// The hand must hold at least as many [tiles](crate::Tile) as the word has letters, and at
    /// least one letter must land on an empty cell. The letters crossing a word already on the
    /// board reuse the [tile](crate::Tile) placed there. Every other letter is taken from the hand, spending [blanks](crate::Tile::Blank)
    /// on missing letters only when `use_wildcards` is `true`.
    ///
    /// # Arguments
    ///
    /// * `player`: The index of the player moving.
    /// * `word_move`: The word, its start, and its orientation.
    /// * `use_wildcards`: Whether the player agrees to spend blanks on missing letters.
    ///
    /// # Errors
    ///
    /// Nothing is changed when any error is returned.
    ///
    /// * [MoveError::GameAlreadyFinished] The game has [finished](crate::Phase::Finished).
    /// * [MoveError::NotCurrentPlayer] It is not the turn of `player`.
    /// * [MoveError::OutOfBounds], [MoveError::BadOrientation], [MoveError::NoIntersection],
    /// and [MoveError::LetterConflict] as returned by [validate_move].
    /// * [MoveError::InsufficientTileCount] The hand holds fewer [tiles](crate::Tile) than the
    /// word has letters.
    /// * [MoveError::NoNewTiles] Every letter of the word is already on the board.
    /// * [MoveError::InsufficientTiles] as returned by [resolve_wildcards].
    ///
    /// # Returns
    ///
    /// The points earned by the word.
    pub fn submit_move(
        &mut self,
        player: usize,
        word_move: &Move,
        use_wildcards: bool,
    ) -> Result<usize, MoveError> {
        match self.try_submit_move(player, word_move, use_wildcards) {
            Ok(points) => Ok(points),
            Err(error) => {
                debug!(player, ?word_move, ?error, "rejected move");
                Err(error)
            }
        }
    }

    fn try_submit_move(
        &mut self,
        player: usize,
        word_move: &Move,
        use_wildcards: bool,
    ) -> Result<usize, MoveError> {
        self.check_turn(player)?;

        let placement = validate_move(&self.board, word_move)?;
        let hand = &self.hands[player];
        let word_len = placement.squares.len();
        if hand.len() < word_len {
            return Err(MoveError::InsufficientTileCount {
                required: word_len,
                hand_len: hand.len(),
            });
        }
        let required = placement.required_letters().collect_vec();
        if required.is_empty() {
            return Err(MoveError::NoNewTiles);
        }
        let selection = resolve_wildcards(hand, &required, use_wildcards)?;
        let points = score_word(&self.board, &placement, &selection);

        self.commit(player, &placement, &selection);
        self.scores[player] += points;
        info!(
            player,
            word = %word_move.word().iter().collect::<String>(),
            points,
            score = self.scores[player],
            bag_len = self.bag.len(),
            "accepted move"
        );
        debug!(standings = ?self.ranking(), "standings");

        self.advance();
        Ok(points)
    }

    /// Gives up the turn of `player` without changing the board, the hands, or the scores, and
    /// advances to the next player.
    ///
    /// # Errors
    ///
    /// * [MoveError::GameAlreadyFinished] The game has [finished](crate::Phase::Finished).
    /// * [MoveError::NotCurrentPlayer] It is not the turn of `player`.
    pub fn pass(&mut self, player: usize) -> Result<(), MoveError> {
        self.check_turn(player)?;

        debug!(player, "passed");
        self.advance();
        Ok(())
    }

    /// # Errors
    ///
    /// * [MoveError::GameAlreadyFinished] The game has [finished](crate::Phase::Finished).
    /// * [MoveError::NotCurrentPlayer] It is not the turn of `player`.
    fn check_turn(&self, player: usize) -> Result<(), MoveError> {
        if self.is_finished() {
            return Err(MoveError::GameAlreadyFinished);
        }
        if player != self.current_player {
            return Err(MoveError::NotCurrentPlayer {
                player,
                current_player: self.current_player,
            });
        }

        Ok(())
    }

    /// Places the selected [tiles](crate::Tile) on the empty cells of `placement`, removes them
    /// from the hand of `player`, and refills the hand up to [HAND_LEN].
    fn commit(&mut self, player: usize, placement: &Placement, selection: &Selection) {
        let empty_squares = placement
            .squares
            .iter()
            .filter(|square| square.placed.is_none());
        for (square, &(_, tile)) in empty_squares.zip(selection) {
            if let Err(error) = self.board.place(square.coordinate, tile) {
                unreachable!("a validated placement should fit the board: {error}");
            }
        }

        let hand = &mut self.hands[player];
        // remove from the back so earlier indexes stay valid
        for index in selection.iter().map(|&(index, _)| index).sorted_unstable().rev() {
            hand.remove(index);
        }

        let drawn = self
            .bag
            .draw(HAND_LEN.saturating_sub(hand.len()), &mut self.rng);
        debug!(player, drawn = drawn.len(), bag_len = self.bag.len(), "refilled hand");
        hand.extend(drawn);
    }
}
