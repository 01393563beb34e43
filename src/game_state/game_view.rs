use crate::{Board, GameState, HandLens, Phase, Scores};
use smallvec::SmallVec;

/// Immutably borrows properties from [GameState] that every player may see.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The grid words are placed on.
    pub board: &'a Board,
    /// The number of [tiles](crate::Tile) left in the bag.
    pub bag_len: usize,
    /// The number of [tiles](crate::Tile) in each hand.
    pub hand_lens: HandLens,
    /// A vector of total scores for each player.
    pub scores: &'a Scores,
    /// The index of the player whose turn it is.
    pub current_player: usize,
    /// Whether moves are still accepted.
    pub phase: Phase,
}

impl GameState {
    /// # Returns
    ///
    /// A new [GameView] struct, which immutably borrows properties from [GameState], but with
    /// `bag` replaced by `bag.len()` and `hands` replaced by the number of
    /// [tiles](crate::Tile) in each hand.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            bag_len: self.bag.len(),
            hand_lens: self.hands.iter().map(SmallVec::len).collect(),
            scores: &self.scores,
            current_player: self.current_player,
            phase: self.phase,
        }
    }
}
