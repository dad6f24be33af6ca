use core::fmt;
use std::fmt::Display;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::{GameError, Result};

/// Card face colors. `Black` is reserved for the wild family.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
    Black,
}

impl Color {
    /// The four colors a played black card may assume.
    pub fn wheel() -> impl Iterator<Item = Color> {
        Color::iter().filter(|color| *color != Color::Black)
    }
}

/// Card faces. Each digit is its own kind, so kind equality between two
/// number cards is digit-exact.
#[derive(Clone, Copy, Debug, EnumIter, PartialEq, Eq)]
pub enum CardKind {
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// The digit of a number kind.
    pub fn digit(self) -> Option<u8> {
        match self {
            CardKind::N0 => Some(0),
            CardKind::N1 => Some(1),
            CardKind::N2 => Some(2),
            CardKind::N3 => Some(3),
            CardKind::N4 => Some(4),
            CardKind::N5 => Some(5),
            CardKind::N6 => Some(6),
            CardKind::N7 => Some(7),
            CardKind::N8 => Some(8),
            CardKind::N9 => Some(9),
            _ => None,
        }
    }

    pub fn is_number(self) -> bool {
        self.digit().is_some()
    }

    /// Whether this kind belongs on a black card.
    pub fn is_black(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }
}

/// An immutable card. The pairing invariant is enforced at construction:
/// black pairs exactly with the wild family, the wheel colors with number
/// and color-special kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    color: Color,
    kind: CardKind,
}

impl Card {
    pub fn new(color: Color, kind: CardKind) -> Result<Self> {
        if (color == Color::Black) != kind.is_black() {
            return Err(GameError::InvalidCard { color, kind });
        }
        Ok(Self { color, kind })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }
}

/// The exposed top of the discard record. For a played black card the
/// color in effect is the one chosen at play time; otherwise it is the
/// card's own color. It is overwritten, never accumulated, on each play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopCard {
    card: Card,
    color_in_effect: Color,
}

impl TopCard {
    pub(crate) fn new(card: Card, color_in_effect: Color) -> Self {
        Self {
            card,
            color_in_effect,
        }
    }

    pub fn card(&self) -> Card {
        self.card
    }

    pub fn color_in_effect(&self) -> Color {
        self.color_in_effect
    }

    /// Whether `candidate` may legally be played on this card: its color
    /// matches the color in effect, its kind matches the exposed kind, or
    /// it is black.
    pub fn allows(&self, candidate: &Card) -> bool {
        self.color_in_effect == candidate.color
            || self.card.kind == candidate.kind
            || candidate.color == Color::Black
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Wild => write!(f, "Wild"),
            CardKind::WildDrawFour => write!(f, "Wild Draw Four"),
            CardKind::Skip => write!(f, "{} Skip", self.color),
            CardKind::Reverse => write!(f, "{} Reverse", self.color),
            CardKind::DrawTwo => write!(f, "{} Draw Two", self.color),
            kind => write!(
                f,
                "{} {}",
                self.color,
                kind.digit().expect("only number kinds remain")
            ),
        }
    }
}

impl Display for TopCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.card.color == Color::Black {
            write!(f, "{} ({})", self.card, self.color_in_effect)
        } else {
            write!(f, "{}", self.card)
        }
    }
}
