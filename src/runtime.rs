//! Drives a [GameState] to its end against a set of [Player]s which supply actions and present
//! the game.

use crate::{GameState, GameView, Hand, Move, MoveError, Ranking};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use tracing::{debug, info};

/// What the current player wants to do with their turn.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Attempt [GameState::submit_move].
    Play {
        /// The word, its start, and its orientation.
        word_move: Move,
        /// Whether blanks may be spent on missing letters.
        use_wildcards: bool,
    },
    /// Attempt [GameState::pass].
    Pass,
}

/// Describes the reason why [run] stopped before the game finished.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RunError<E> {
    /// The number of [Player]s does not match the number of players in the game.
    PlayersMismatch {
        /// The number of [Player]s given.
        players_len: usize,
        /// The number of players in the game.
        expected: usize,
    },
    /// Some [Player]s failed to send input or receive an update.
    Players(Vec<E>),
}

/// Defines a method to get input and methods to update output for one player.
///
/// [Player::get_action] and [Player::update_move_error] block execution until the current
/// player answers. [Player::update_view] and [Player::update_ranking] may execute in parallel
/// with the updates of other players.
///
/// # Errors
///
/// The implementor of [Player] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and the error is propagated back to the calling client
/// code.
#[async_trait]
pub trait Player<E> {
    /// On their turn, gets an [Action] from the current player.
    fn get_action(&self) -> Result<Action, E>;

    /// When an [Action] is rejected, updates the current player with the state of the game,
    /// their hand, their action, and the reason why it was rejected.
    fn update_move_error(
        &self,
        view: &GameView<'_>,
        hand: &Hand,
        action: Action,
        error: MoveError,
    ) -> Result<(), E>;

    /// Before every turn and once the game has finished, updates each player with the state of
    /// the game and their hand.
    async fn update_view<'a>(&self, view: &'a GameView<'a>, hand: &'a Hand) -> Result<(), E>;

    /// Once the game has finished, updates each player with the final [ranking](Ranking).
    async fn update_ranking<'a>(&self, ranking: &'a Ranking) -> Result<(), E>;
}

/// It repeatedly asks the current player for an [Action], and if the action is rejected, it
/// tells the player about the error and asks again. Stops asking once an action is accepted.
///
/// # Arguments
///
/// * `players`: A [Player] for each player in turn order.
/// * `game_state`: The current state of the game.
///
/// # Errors
///
/// When the current player fails to send input or receive an error update.
///
/// # Panics
///
/// If there are fewer `players` than players in `game_state`.
pub fn process_input<P, E>(players: &[P], game_state: &mut GameState) -> Result<(), E>
where
    P: Player<E>,
{
    let current_player = game_state.current_player();
    let player = &players[current_player];

    loop {
        let action = player.get_action()?;
        let result = match &action {
            Action::Play {
                word_move,
                use_wildcards,
            } => game_state
                .submit_move(current_player, word_move, *use_wildcards)
                .map(|_| ()),
            Action::Pass => game_state.pass(current_player),
        };

        match result {
            Ok(()) => return Ok(()),
            Err(error) => {
                debug!(player = current_player, ?error, "asking for another action");
                // cannot use map_err since E needs to be propagated here
                player.update_move_error(
                    &game_state.view(),
                    game_state.current_hand(),
                    action,
                    error,
                )?;
            }
        }
    }
}

/// Asynchronously sends the current state of the game to [Player]s.
///
/// # Arguments
///
/// * `players`: A [Player] for each player in turn order.
/// * `game_state`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [Player::update_view] into a vector.
pub async fn send_updates<P, E>(players: &[P], game_state: &GameState) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let view = game_state.view();
    let update_tasks = players.iter().enumerate().filter_map(|(index, player)| {
        game_state
            .get_hand(index)
            .map(|hand| player.update_view(&view, hand))
    });

    collect_errors(future::join_all(update_tasks).await)
}

/// Asynchronously sends the final [ranking](Ranking) to [Player]s.
///
/// # Errors
///
/// Accumulates all errors from [Player::update_ranking] into a vector.
pub async fn send_ranking<P, E>(players: &[P], ranking: &Ranking) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let update_tasks = players.iter().map(|player| player.update_ranking(ranking));

    collect_errors(future::join_all(update_tasks).await)
}

fn collect_errors<E>(results: Vec<Result<(), E>>) -> Result<(), Vec<E>> {
    let errors = results.into_iter().filter_map(Result::err).collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}

/// Plays `game_state` until it finishes. Before every turn, each player is
/// [updated](send_updates), then the current player is [asked](process_input) for actions until
/// one is accepted. Once finished, each player receives the final view and the
/// [ranking](Ranking).
///
/// # Errors
///
/// * [RunError::PlayersMismatch] The number of `players` differs from the number of players in
/// `game_state`.
/// * [RunError::Players] Some [Player] failed. The game stops at the first failing turn.
///
/// # Returns
///
/// The final [ranking](Ranking).
pub async fn run<P, E>(players: &[P], mut game_state: GameState) -> Result<Ranking, RunError<E>>
where
    P: Player<E>,
{
    if players.len() != game_state.players_len() {
        return Err(RunError::PlayersMismatch {
            players_len: players.len(),
            expected: game_state.players_len(),
        });
    }

    loop {
        send_updates(players, &game_state)
            .await
            .map_err(RunError::Players)?;
        if game_state.is_finished() {
            break;
        }
        process_input(players, &mut game_state).map_err(|error| RunError::Players(vec![error]))?;
    }

    let ranking = game_state.ranking();
    info!(ranking = %ranking.iter().join(", "), "game over");
    send_ranking(players, &ranking)
        .await
        .map_err(RunError::Players)?;

    Ok(ranking)
}
