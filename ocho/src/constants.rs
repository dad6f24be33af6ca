use strum::EnumCount;

use crate::card::{CardKind, Color};

/// One `N0` and two of each `N1`..`N9` per color.
pub(crate) const NUMBER_SLOTS_PER_COLOR: &[CardKind] = &[
    CardKind::N0,
    CardKind::N1,
    CardKind::N2,
    CardKind::N3,
    CardKind::N4,
    CardKind::N5,
    CardKind::N6,
    CardKind::N7,
    CardKind::N8,
    CardKind::N9,
    CardKind::N1,
    CardKind::N2,
    CardKind::N3,
    CardKind::N4,
    CardKind::N5,
    CardKind::N6,
    CardKind::N7,
    CardKind::N8,
    CardKind::N9,
];

/// Two of each color-special kind per color.
pub(crate) const SPECIAL_SLOTS_PER_COLOR: &[CardKind] = &[
    CardKind::Skip,
    CardKind::Reverse,
    CardKind::DrawTwo,
    CardKind::Skip,
    CardKind::Reverse,
    CardKind::DrawTwo,
];

pub(crate) const WILD_CARDS_IN_DECK: usize = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub(crate) const WHEEL_COLOR_COUNT: usize = Color::COUNT - 1;

pub(crate) const COLORED_CARDS_IN_DECK: usize =
    (NUMBER_SLOTS_PER_COLOR.len() + SPECIAL_SLOTS_PER_COLOR.len()) * WHEEL_COLOR_COUNT;

pub(crate) const TOTAL_CARDS_IN_DECK: usize =
    COLORED_CARDS_IN_DECK + WILD_CARDS_IN_DECK + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub(crate) const INITIAL_HAND_SIZE: usize = 7;

pub(crate) const MIN_PLAYERS: usize = 2;
pub(crate) const MAX_PLAYERS: usize = 15;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_card_count_constants() {
        assert_eq!(NUMBER_SLOTS_PER_COLOR.len(), 19);
        assert_eq!(SPECIAL_SLOTS_PER_COLOR.len(), 6);

        assert_eq!(WHEEL_COLOR_COUNT, 4);
        assert_eq!(COLORED_CARDS_IN_DECK, 100);

        assert_eq!(TOTAL_CARDS_IN_DECK, 108);
    }

    #[test]
    fn a_full_table_still_leaves_an_opening_card() {
        assert!(MAX_PLAYERS * INITIAL_HAND_SIZE < TOTAL_CARDS_IN_DECK);
    }
}
