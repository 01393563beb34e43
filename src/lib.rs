//! Concrete structs to represent and protect the state of a word placement game with methods to
//! progress through its turns.
//!
//! ## Summary
//!
//! Players take turns placing words on a square board of [BOARD_LEN] by [BOARD_LEN] cells. Each
//! player holds a hand of up to [HAND_LEN] [tiles](Tile) drawn from a bag of [TILES_LEN]
//! [tiles](Tile). Every word either covers the [center](CENTER) or crosses a letter already on
//! the board, and earns the points printed on its [tiles](Tile) scaled by the
//! [premiums](Premium) of the cells it covers. The game ends when the bag is empty at the start
//! of a turn. The player with the most points wins.
//!
//! ## How is the game created?
//!
//! [GameState::new] and [GameState::new_seeded] check the number of players, fill the bag, and
//! deal [HAND_LEN] [tiles](Tile) to each player. Player `0` moves first.
//!
//! ## How is the game advanced?
//!
//! The current player either [submits a move](GameState::submit_move) or
//! [passes](GameState::pass). A [move](Move) names a word, the [coordinate](Coordinate) of its
//! first letter, and an orientation code. The turn then goes to the next player in turn order,
//! looping back to `0`.
//!
//! ### How are moves checked?
//!
//! [validate_move] resolves the word to cells and rejects words which leave the board, carry an
//! unknown orientation, touch nothing, or overwrite a different letter. Letters crossing a word
//! already on the board reuse the [tile](Tile) placed there. The remaining letters must come from
//! the hand. [resolve_wildcards] matches them against the lettered [tiles](Tile) first, then
//! spends [blanks](Tile::Blank) on the missing letters if the player agreed to. A rejected move
//! leaves the game unchanged and returns a [MoveError].
//!
//! ### How are tiles placed?
//!
//! Remove the selected [tiles](Tile) from the current player's hand, place them on the board,
//! add the points earned by the word to the current player, refill the hand up to [HAND_LEN]
//! from the bag, and advance to the next player. A placed [tile](Tile) never moves again, and a
//! [bound blank](Tile::Bound) keeps its letter and its `0` points for the rest of the game.
//!
//! ## How are points calculated?
//!
//! [score_word] sums the points of each letter times the letter multiplier of its cell, then
//! multiplies the sum by the word multiplier of every cell the word covers. Only the placed word
//! is scored.
//!
//! ## How is the game viewed?
//!
//! [GameState::view] returns an immutable [GameView] of everything visible to all players.
//! [GameState::get_hand] shares the private hand of each individual player.
//! [GameState::ranking] orders players by score at any time.
//!
//! ## How is the game played end to end?
//!
//! [runtime::run] drives a game against one [runtime::Player] per player, which supply
//! [actions](runtime::Action) and receive views, rejections, and the final [ranking](Ranking).
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [GameState]
//! implements methods to get mutable references to its properties, helper methods to add
//! random data to specific properties, and methods to set properties for common scenarios.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use game_state::*;
pub use placement::*;
#[cfg(test)]
pub use random::*;
pub use score::*;
pub use tile::*;
pub use types::*;
pub use wildcard::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod game_state;
mod placement;
#[cfg(test)]
mod random;
pub mod runtime;
mod score;
mod tile;
mod types;
mod wildcard;
