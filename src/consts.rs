use crate::Coordinate;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the board. `17` cells per side.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [validate_move](crate::validate_move)
pub const BOARD_LEN: usize = 17;
/// The anchor of the board. The first word of the game must cover it, and any later word may
/// still use it instead of crossing a placed letter.
///
/// # See Also
///
/// * [MoveError::NoIntersection](crate::MoveError::NoIntersection)
pub const CENTER: Coordinate = (8, 8);
/// The number of [tiles](crate::Tile) a hand is dealt and refilled up to. `8` tiles per hand.
///
/// # See Also
///
/// * [GameState::new](crate::GameState::new)
/// * [GameState::submit_move](crate::GameState::submit_move)
pub const HAND_LEN: usize = 8;
/// The minimum number of players in a game. `2` players.
///
/// # See Also
///
/// * [NewError::NotEnoughPlayers](crate::NewError::NotEnoughPlayers)
pub const MIN_PLAYERS: usize = 2;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Hands](crate::Hands)
/// * [Scores](crate::Scores)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(CENTER.0 as usize == BOARD_LEN / 2 && CENTER.1 as usize == BOARD_LEN / 2);
