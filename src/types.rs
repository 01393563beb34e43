use crate::{Tile, HAND_LEN, PLAYER_CAPACITY};
use smallvec::SmallVec;

/// A vector of [tiles](Tile) for one player.
///
/// # See Also
///
/// * [Tile]
/// * [HAND_LEN]
/// * [Hands]
/// * [GameState::get_hand](crate::GameState::get_hand)
pub type Hand = SmallVec<[Tile; HAND_LEN]>;
/// A vector of hands for each player in turn order, where each hand is
/// a vector of [tiles](Tile).
///
/// # See Also
///
/// * [Hand]
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
pub type Hands = SmallVec<[Hand; PLAYER_CAPACITY]>;
/// A vector of total scores for each player in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
/// * [GameView](crate::GameView)
pub type Scores = SmallVec<[usize; PLAYER_CAPACITY]>;
/// A vector of hand lengths.
///
/// # See Also
///
/// * [Hands]
/// * [PLAYER_CAPACITY]
/// * [GameView](crate::GameView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
