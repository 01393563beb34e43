use crate::{Bag, Board, Hand, Hands, Scores, HAND_LEN, MIN_PLAYERS, TILES_LEN};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

pub use game_view::*;
pub use ranking::*;
pub use submit_move::*;

mod game_view;
mod ranking;
mod submit_move;
#[cfg(test)]
mod test_setup;

/// Describes whether moves are still accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Phase {
    /// The current player may [submit a move](GameState::submit_move) or
    /// [pass](GameState::pass).
    InProgress,
    /// The bag was empty at the start of a turn. The [ranking](GameState::ranking) is final.
    Finished,
}

/// Owns the state of one game and implements methods. Created from [GameState::new] or
/// [GameState::new_seeded].
///
/// Every [tile](crate::Tile) of the game is in exactly one place at any time: the bag, a hand,
/// or the board.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The grid words are placed on.
    board: Board,
    /// This is a bag of all the [tiles](crate::Tile) that haven't been drawn yet.
    bag: Bag,
    /// A vector of hands for each player in turn order.
    hands: Hands,
    /// A vector of total scores for each player in turn order.
    scores: Scores,
    /// The index of the player whose turn it is.
    current_player: usize,
    /// Whether moves are still accepted.
    phase: Phase,
    /// Draws [tiles](crate::Tile) from the bag.
    rng: StdRng,
}

/// Describes the reason why [GameState] could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Error)]
pub enum NewError {
    /// Attempting [to start](GameState::new) with fewer than [MIN_PLAYERS] players.
    #[error("{players_len} players cannot start a game, at least {MIN_PLAYERS} are needed")]
    NotEnoughPlayers {
        /// The number of players requested.
        players_len: usize,
    },
    /// Attempting to deal more [tiles](crate::Tile) than [tiles](crate::Tile) in the bag.
    #[error("dealing {requested_tiles} tiles needs more than the {tiles_in_bag} in the bag")]
    NotEnoughTiles {
        /// The number of [tiles](crate::Tile) requested for hands.
        requested_tiles: usize,
        /// The number of available [tiles](crate::Tile) in the bag.
        tiles_in_bag: usize,
    },
}

impl GameState {
    /// Checks that there are at least [MIN_PLAYERS] players and that the bag holds enough
    /// [tiles](crate::Tile) to deal [HAND_LEN] to each of them, then deals every hand from
    /// a full bag. Player `0` moves first.
    ///
    /// The bag is shuffled from system entropy. See [GameState::new_seeded] for
    /// reproducible games.
    ///
    /// # Arguments
    ///
    /// * `players_len`: The number of players in the game.
    ///
    /// # Errors
    ///
    /// * [NewError::NotEnoughPlayers] Attempting [to start](GameState::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::NotEnoughTiles] Attempting to deal more [tiles](crate::Tile) than
    /// [tiles](crate::Tile) in the bag.
    pub fn new(players_len: usize) -> Result<GameState, HashSet<NewError>> {
        GameState::with_rng(players_len, StdRng::from_entropy())
    }

    /// Same as [GameState::new], but every draw from the bag is determined by `seed`.
    ///
    /// # Errors
    ///
    /// * [NewError::NotEnoughPlayers] Attempting [to start](GameState::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::NotEnoughTiles] Attempting to deal more [tiles](crate::Tile) than
    /// [tiles](crate::Tile) in the bag.
    pub fn new_seeded(players_len: usize, seed: u64) -> Result<GameState, HashSet<NewError>> {
        GameState::with_rng(players_len, StdRng::seed_from_u64(seed))
    }

    fn with_rng(players_len: usize, mut rng: StdRng) -> Result<GameState, HashSet<NewError>> {
        GameState::check(players_len)?;

        let mut bag = Bag::full();
        let hands: Hands = (0..players_len)
            .map(|_| bag.draw(HAND_LEN, &mut rng))
            .collect();
        let scores = Scores::from_elem(0, players_len);

        let mut game_state = GameState {
            board: Board::new(),
            bag,
            hands,
            scores,
            current_player: 0,
            phase: Phase::InProgress,
            rng,
        };
        game_state.check_bag();
        info!(
            players_len,
            bag_len = game_state.bag.len(),
            "started a new game"
        );

        Ok(game_state)
    }

    /// Checks that there are at least [MIN_PLAYERS] players and that the bag holds enough
    /// [tiles](crate::Tile) to deal [HAND_LEN] to each of them.
    ///
    /// # Errors
    ///
    /// * [NewError::NotEnoughPlayers] Attempting [to start](GameState::new) with fewer than
    /// [MIN_PLAYERS] players.
    /// * [NewError::NotEnoughTiles] Attempting to deal more [tiles](crate::Tile) than
    /// [tiles](crate::Tile) in the bag.
    fn check(players_len: usize) -> Result<(), HashSet<NewError>> {
        let mut errors = HashSet::with_capacity(2);
        if players_len < MIN_PLAYERS {
            errors.insert(NewError::NotEnoughPlayers { players_len });
        }

        let requested_tiles = players_len.saturating_mul(HAND_LEN);
        if requested_tiles > TILES_LEN {
            errors.insert(NewError::NotEnoughTiles {
                requested_tiles,
                tiles_in_bag: TILES_LEN,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(())
    }

    /// The index of the player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> usize {
        self.current_player
    }

    /// The number of players in the game.
    #[inline]
    pub fn players_len(&self) -> usize {
        self.hands.len()
    }

    /// Whether moves are still accepted.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has [finished](Phase::Finished).
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// # Returns
    ///
    /// The [tiles](crate::Tile) held by the requesting player or [None] if out of bounds.
    pub fn get_hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// The [tiles](crate::Tile) held by the player whose turn it is.
    pub fn current_hand(&self) -> &Hand {
        &self.hands[self.current_player]
    }

    /// Hands the turn to the next player, and ends the game if the bag is empty at the start
    /// of their turn.
    fn advance(&mut self) {
        self.current_player = (self.current_player + 1) % self.hands.len();
        self.check_bag();
    }

    /// Ends the game if the bag is empty.
    fn check_bag(&mut self) {
        if !self.bag.is_empty() || self.is_finished() {
            return;
        }

        self.phase = Phase::Finished;
        let ranking = self.ranking();
        info!(
            winner = ?ranking.first().map(|standing| standing.player),
            scores = ?self.scores,
            "game finished"
        );
    }
}
