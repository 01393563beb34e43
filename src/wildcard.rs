use crate::{Hand, MoveError, Tile};
use itertools::Itertools;
use std::collections::HashMap;

/// For each letter of a move, the index of the hand [tile](Tile) that supplies it and
/// the tile as it will be placed, with any [blank](Tile::Blank) already [bound](Tile::Bound).
pub type Selection = Vec<(usize, Tile)>;

/// Counts the letters in `required` which the lettered [tiles](Tile) of `hand` cannot supply.
/// [Blanks](Tile::Blank) are not counted as a source.
///
/// # Returns
///
/// A map of each missing letter to the number of copies missing. Empty when the hand covers
/// every letter on its own.
pub fn shortfall(hand: &Hand, required: impl IntoIterator<Item = char>) -> HashMap<char, usize> {
    let mut available = hand
        .iter()
        .filter_map(|tile| match *tile {
            Tile::Letter { letter, .. } => Some(letter),
            Tile::Blank | Tile::Bound { .. } => None,
        })
        .counts();

    let mut missing = HashMap::new();
    for letter in required {
        match available.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => *missing.entry(letter).or_insert(0) += 1,
        }
    }
    missing
}

/// Chooses the hand [tiles](Tile) which supply `required`, spending [blanks](Tile::Blank) on
/// the letters the hand lacks when `use_wildcards` allows it. Nothing is changed: the caller
/// commits the [selection](Selection).
///
/// Lettered tiles are matched first, in hand order. Each missing letter, in `required` order,
/// then takes the next unused blank in hand order and binds it, so the same hand and word
/// always produce the same selection. A bound blank is worth `0` points for the rest of
/// the game.
///
/// # Errors
///
/// * [MoveError::InsufficientTiles] Letters are missing and either the hand holds fewer blanks
/// than missing letters or `use_wildcards` is `false`.
///
/// # Returns
///
/// The [selection](Selection), one entry per required letter in order.
pub fn resolve_wildcards(
    hand: &Hand,
    required: &[char],
    use_wildcards: bool,
) -> Result<Selection, MoveError> {
    let missing: usize = shortfall(hand, required.iter().copied()).values().sum();
    let blanks = hand.iter().filter(|tile| tile.is_blank()).count();
    if missing > 0 && (blanks < missing || !use_wildcards) {
        return Err(MoveError::InsufficientTiles { missing, blanks });
    }

    // match lettered tiles before spending any blank
    let mut used = vec![false; hand.len()];
    let mut lettered = Vec::with_capacity(required.len());
    for &letter in required {
        let index = (0..hand.len()).find(|&index| {
            !used[index]
                && matches!(hand[index], Tile::Letter { letter: other, .. } if other == letter)
        });
        if let Some(index) = index {
            used[index] = true;
        }
        lettered.push(index);
    }

    let mut selection = Selection::with_capacity(required.len());
    for (&letter, index) in required.iter().zip(lettered) {
        let index = match index {
            Some(index) => index,
            None => {
                let blank = (0..hand.len())
                    .find(|&index| !used[index] && hand[index].is_blank())
                    .ok_or(MoveError::InsufficientTiles { missing, blanks })?;
                used[blank] = true;
                blank
            }
        };
        selection.push((index, hand[index].bind(letter)));
    }

    Ok(selection)
}
