use crate::{GameState, Scores, PLAYER_CAPACITY};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;

/// The place of one player in a [Ranking].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Standing {
    /// The `1`-indexed position in the ranking.
    pub place: usize,
    /// The index of the player in turn order.
    pub player: usize,
    /// The total score of the player.
    pub score: usize,
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. player {} with {} points",
            self.place, self.player, self.score
        )
    }
}

/// Every player ordered by score from highest to lowest.
pub type Ranking = SmallVec<[Standing; PLAYER_CAPACITY]>;

/// Orders players by score from highest to lowest. Players with equal scores keep their turn
/// order.
///
/// # Returns
///
/// One [Standing] per player with places counted from `1`.
pub fn rank(scores: &Scores) -> Ranking {
    scores
        .iter()
        .copied()
        .enumerate()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .enumerate()
        .map(|(index, (player, score))| Standing {
            place: index + 1,
            player,
            score,
        })
        .collect()
}

impl GameState {
    /// Ranks the players by their current scores. Final once the game has
    /// [finished](crate::Phase::Finished).
    ///
    /// # See Also
    ///
    /// [rank]
    pub fn ranking(&self) -> Ranking {
        rank(&self.scores)
    }
}
