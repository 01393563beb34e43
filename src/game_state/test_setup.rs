use crate::{
    random_bag, random_crossing_move, random_current_player, random_hands, Bag, Board,
    Coordinate, GameState, Hand, Hands, Move, Phase, Scores, Tile,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

impl GameState {
    /// Generates a [GameState] for `players_len` players with nothing dealt.
    ///
    /// # Returns
    ///
    /// A [GameState] struct with the properties set to the following:
    /// * `board`: An empty board with the standard premiums.
    /// * `bag`: An empty bag.
    /// * `hands`: `players_len` empty hands.
    /// * `scores`: `players_len` `0`s.
    /// * `current_player`: `0`.
    /// * `phase`: [Phase::InProgress].
    pub fn empty_game_state(players_len: usize) -> GameState {
        GameState {
            board: Board::new(),
            bag: Bag::default(),
            hands: (0..players_len).map(|_| Hand::new()).collect(),
            scores: Scores::from_elem(0, players_len),
            current_player: 0,
            phase: Phase::InProgress,
            rng: StdRng::seed_from_u64(rand::thread_rng().gen()),
        }
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// A mutable reference to `self.hands`.
    pub fn mut_hands(&mut self) -> &mut Hands {
        &mut self.hands
    }

    /// A mutable reference to `self.phase`.
    pub fn mut_phase(&mut self) -> &mut Phase {
        &mut self.phase
    }

    /// Replaces the bag with a random, small, non-zero number of [tiles](Tile).
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.bag = random_bag(rng);
        self.bag.len()
    }

    /// Pushes the same random, non-zero number of [tiles](Tile) into each player's hand.
    ///
    /// # Returns
    ///
    /// The number of additional [tiles](Tile) in each player's hand.
    pub fn random_hands<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_hands(rng, &mut self.hands)
    }

    /// Sets each player's score to a random, small number.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for score in self.scores.iter_mut() {
            *score = rng.gen_range(0..100);
        }
    }

    /// Sets the current player to a random player.
    ///
    /// # Returns
    ///
    /// The index of the player whose turn it is.
    pub fn random_current_player<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        random_current_player(rng, &mut self.current_player, self.hands.len())
    }

    /// A plausible [move](Move) for the current player. See [random_crossing_move].
    pub fn random_crossing_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Move {
        random_crossing_move(rng, &self.board, &self.hands[self.current_player])
    }

    /// The [tile](Tile) on the board at `coordinate`.
    pub fn tile(&self, coordinate: Coordinate) -> Option<Tile> {
        self.board.cell(coordinate).and_then(|cell| cell.tile())
    }

    /// The number of [tiles](Tile) in the bag, in every hand, and on the board.
    pub fn tiles_len(&self) -> usize {
        self.bag.len() + self.hands.iter().map(Hand::len).sum::<usize>() + self.board.placed_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HAND_LEN, TILES_LEN};

    #[test]
    fn empty_game_state() {
        let game_state = GameState::empty_game_state(3);

        assert_eq!(Board::new(), game_state.board);
        assert_eq!(Bag::default(), game_state.bag);
        assert_eq!(3, game_state.hands.len());
        assert!(game_state.hands.iter().all(Hand::is_empty));
        assert_eq!(Scores::from_elem(0, 3), game_state.scores);
        assert_eq!(0, game_state.current_player);
        assert_eq!(Phase::InProgress, game_state.phase);
    }

    #[test]
    fn tiles_len_of_new_game() {
        let mut game_state = GameState::new(2).unwrap();

        assert_eq!(TILES_LEN, game_state.tiles_len());

        game_state.mut_hands()[0].truncate(HAND_LEN - 1);

        assert_eq!(TILES_LEN - 1, game_state.tiles_len());
    }
}
